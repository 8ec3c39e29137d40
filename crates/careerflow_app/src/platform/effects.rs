use std::sync::{mpsc, Arc};

use careerflow_client::{ClientError, ClientEvent, ClientHandle, ClientSettings, EventSink};
use careerflow_core::{Effect, Msg, RequestError};
use careerflow_logging::{flow_info, flow_warn};

use super::app::HostEvent;

/// Feeds client completions back into the host loop as core messages.
struct MsgSink {
    tx: mpsc::Sender<HostEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(HostEvent::Msg(into_msg(event)));
    }
}

fn into_msg(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::JobsFetched(result) => Msg::JobsLoaded(result),
        ClientEvent::JobCreated(result) => Msg::JobCreated(result),
    }
}

enum Backend {
    Connected(ClientHandle),
    /// Settings were rejected; every effect completes at once with `reason`.
    Unavailable { reason: RequestError, sink: MsgSink },
}

pub(crate) struct EffectRunner {
    backend: Backend,
}

impl EffectRunner {
    /// Only a failure to start the runtime is returned; bad settings surface
    /// later as failed requests.
    pub fn new(
        settings: ClientSettings,
        tx: mpsc::Sender<HostEvent>,
    ) -> Result<Self, ClientError> {
        flow_info!("Job service at {}", settings.base_url);
        let sink = Arc::new(MsgSink { tx: tx.clone() });
        let backend = match ClientHandle::connect(settings, sink) {
            Ok(client) => Backend::Connected(client),
            Err(ClientError::Settings(reason)) => {
                flow_warn!("Job service unavailable: {}", reason);
                Backend::Unavailable {
                    reason,
                    sink: MsgSink { tx },
                }
            }
            Err(err) => return Err(err),
        };
        Ok(Self { backend })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobs => {
                    flow_info!("FetchJobs");
                    match &self.backend {
                        Backend::Connected(client) => client.fetch_jobs(),
                        Backend::Unavailable { reason, sink } => {
                            sink.emit(ClientEvent::JobsFetched(Err(reason.clone())))
                        }
                    }
                }
                Effect::CreateJob(new_job) => {
                    flow_info!(
                        "CreateJob company_len={} title_len={} status={}",
                        new_job.company.len(),
                        new_job.title.len(),
                        new_job.status
                    );
                    match &self.backend {
                        Backend::Connected(client) => client.create_job(new_job),
                        Backend::Unavailable { reason, sink } => {
                            sink.emit(ClientEvent::JobCreated(Err(reason.clone())))
                        }
                    }
                }
            }
        }
    }

    /// Waits for in-flight requests; their completions still reach the host channel.
    pub fn shutdown(self) {
        if let Backend::Connected(client) = self.backend {
            client.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerflow_core::{update, AppState, FailureKind, RequestKind, RequestState};

    fn drain_msgs(rx: &mpsc::Receiver<HostEvent>) -> Vec<Msg> {
        rx.try_iter()
            .map(|event| match event {
                HostEvent::Msg(msg) => msg,
                other => panic!("unexpected host event {other:?}"),
            })
            .collect()
    }

    #[test]
    fn client_events_map_to_core_messages() {
        let (tx, rx) = mpsc::channel();
        let sink = MsgSink { tx };

        sink.emit(ClientEvent::JobsFetched(Ok(Vec::new())));
        sink.emit(ClientEvent::JobCreated(Err(RequestError::http_status(502))));

        assert_eq!(
            drain_msgs(&rx),
            vec![
                Msg::JobsLoaded(Ok(Vec::new())),
                Msg::JobCreated(Err(RequestError::http_status(502))),
            ]
        );
    }

    #[test]
    fn relative_base_url_fails_the_initial_fetch() {
        let (tx, rx) = mpsc::channel();
        let runner = EffectRunner::new(ClientSettings::with_base_url("127.0.0.1:8000"), tx)
            .expect("bad settings still yield a runner");

        let (mut state, effects) = update(AppState::new(), Msg::Initialize);
        runner.enqueue(effects);
        for msg in drain_msgs(&rx) {
            let (next, _) = update(state, msg);
            state = next;
        }
        runner.shutdown();

        match state.store().request_state(RequestKind::List) {
            RequestState::Failed(message) => {
                assert!(message.starts_with("Invalid base URL"), "{message}")
            }
            other => panic!("expected failed list fetch, got {other:?}"),
        }
        assert!(state.view().error.is_some());
    }

    #[test]
    fn unavailable_service_fails_creates_too() {
        let (tx, rx) = mpsc::channel();
        let runner = EffectRunner::new(ClientSettings::with_base_url("not a url"), tx).unwrap();

        runner.enqueue(vec![Effect::CreateJob(careerflow_core::NewJob {
            company: "Acme".to_string(),
            title: "SRE".to_string(),
            status: careerflow_core::JobStatus::Applied,
        })]);

        match drain_msgs(&rx).as_slice() {
            [Msg::JobCreated(Err(err))] => assert_eq!(err.kind, FailureKind::InvalidUrl),
            other => panic!("unexpected messages {other:?}"),
        }
    }
}
