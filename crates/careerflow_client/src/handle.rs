use std::sync::{mpsc, Arc};
use std::thread;

use careerflow_core::{FailureKind, Job, NewJob, RequestError};
use careerflow_logging::{flow_debug, flow_error, flow_warn};
use tokio::runtime::Runtime;
use tokio::task::{JoinError, JoinHandle};

use crate::{ClientSettings, JobsApi, ReqwestJobsApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    FetchJobs,
    CreateJob(NewJob),
}

/// Completion of a [`ClientCommand`]. Every command yields exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    JobsFetched(Result<Vec<Job>, RequestError>),
    JobCreated(Result<Job, RequestError>),
}

impl ClientEvent {
    /// The completion reported when `command` never produced a response.
    fn aborted(command: &ClientCommand) -> Self {
        let err = RequestError::new(FailureKind::Aborted, String::new());
        match command {
            ClientCommand::FetchJobs => ClientEvent::JobsFetched(Err(err)),
            ClientCommand::CreateJob(_) => ClientEvent::JobCreated(Err(err)),
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<ClientEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<ClientEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid client settings: {0}")]
    Settings(#[from] RequestError),
    #[error("failed to start client runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Runs requests on a background tokio runtime and reports their outcomes
/// through an [`EventSink`].
///
/// Dropping the handle closes the command channel; requests already started
/// still run to completion before the worker thread exits.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    sink: Arc<dyn EventSink>,
    worker: thread::JoinHandle<()>,
}

impl ClientHandle {
    /// Builds a reqwest-backed client for `settings`.
    pub fn connect(
        settings: ClientSettings,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, ClientError> {
        let api = ReqwestJobsApi::new(settings)?;
        Self::spawn(Arc::new(api), sink)
    }

    pub fn spawn(api: Arc<dyn JobsApi>, sink: Arc<dyn EventSink>) -> Result<Self, ClientError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("careerflow-io")
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let worker_sink = sink.clone();
        let worker = thread::Builder::new()
            .name("careerflow-client".to_string())
            .spawn(move || run_worker(runtime, api, cmd_rx, worker_sink))?;

        Ok(Self {
            cmd_tx,
            sink,
            worker,
        })
    }

    pub fn send(&self, command: ClientCommand) {
        if let Err(mpsc::SendError(command)) = self.cmd_tx.send(command) {
            flow_error!("Client worker is gone; failing {:?}", command);
            self.sink.emit(ClientEvent::aborted(&command));
        }
    }

    pub fn fetch_jobs(&self) {
        self.send(ClientCommand::FetchJobs);
    }

    pub fn create_job(&self, new_job: NewJob) {
        self.send(ClientCommand::CreateJob(new_job));
    }

    /// Stops accepting commands and waits for in-flight requests to finish.
    pub fn shutdown(self) {
        let Self { cmd_tx, worker, .. } = self;
        drop(cmd_tx);
        if worker.join().is_err() {
            flow_error!("Client worker thread panicked");
        }
    }
}

fn run_worker(
    runtime: Runtime,
    api: Arc<dyn JobsApi>,
    cmd_rx: mpsc::Receiver<ClientCommand>,
    sink: Arc<dyn EventSink>,
) {
    let mut in_flight: Vec<JoinHandle<()>> = Vec::new();
    while let Ok(command) = cmd_rx.recv() {
        in_flight.retain(|task| !task.is_finished());
        let api = api.clone();
        let sink = sink.clone();
        in_flight.push(runtime.spawn(async move {
            handle_command(api, command, sink.as_ref()).await;
        }));
    }

    flow_debug!("Command channel closed; draining {} requests", in_flight.len());
    runtime.block_on(async {
        for task in in_flight {
            let _ = task.await;
        }
    });
}

async fn handle_command(api: Arc<dyn JobsApi>, command: ClientCommand, sink: &dyn EventSink) {
    let fallback = ClientEvent::aborted(&command);
    // The request runs in its own task so a panic inside it still yields a completion.
    let joined = tokio::spawn(async move {
        match command {
            ClientCommand::FetchJobs => ClientEvent::JobsFetched(api.list_jobs().await),
            ClientCommand::CreateJob(new_job) => {
                ClientEvent::JobCreated(api.create_job(&new_job).await)
            }
        }
    })
    .await;

    let event = joined.unwrap_or_else(|err: JoinError| {
        flow_warn!("Request task ended abnormally: {}", err);
        fallback
    });
    sink.emit(event);
}
