use careerflow_logging::{flow_debug, flow_info, flow_warn};

use crate::{Effect, Job, JobStore, RequestError, RequestKind, RequestState};

/// Owns the one-shot initial list load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchController {
    started: bool,
}

impl FetchController {
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Moves the list request to `Loading` and asks for the fetch. Only the
    /// first call per session does anything.
    pub fn begin(&mut self, store: &mut JobStore) -> Option<Effect> {
        if self.started {
            flow_debug!("List fetch already started; ignoring repeat initialize");
            return None;
        }
        self.started = true;
        store.set_request_state(RequestKind::List, RequestState::Loading);
        Some(Effect::FetchJobs)
    }

    /// Reconciles the fetch outcome. On failure the collection is left as is.
    pub fn complete(&self, store: &mut JobStore, result: Result<Vec<Job>, RequestError>) {
        if !store.request_state(RequestKind::List).is_loading() {
            flow_warn!("Dropping list result that arrived with no fetch in flight");
            return;
        }
        match result {
            Ok(jobs) => {
                flow_info!("Loaded {} jobs", jobs.len());
                store.replace_all(jobs);
                store.set_request_state(RequestKind::List, RequestState::Succeeded);
            }
            Err(err) => {
                flow_warn!("List fetch failed: {}", err);
                store.set_request_state(RequestKind::List, RequestState::Failed(err.describe()));
            }
        }
    }
}
