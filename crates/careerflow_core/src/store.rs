use crate::{Job, RequestKind, RequestState};

/// In-memory holder of the job collection and the per-operation request
/// states. Newest jobs come first.
///
/// Mutations never fail and never inspect job content; callers hand in data
/// they have already validated. Each mutation bumps [`JobStore::revision`] and
/// marks the store dirty so a host can poll for changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobStore {
    jobs: Vec<Job>,
    list: RequestState,
    create: RequestState,
    last_failed: Option<RequestKind>,
    revision: u64,
    dirty: bool,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn request_state(&self, kind: RequestKind) -> &RequestState {
        match kind {
            RequestKind::List => &self.list,
            RequestKind::Create => &self.create,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Message of the operation that failed most recently, if it is still failed.
    pub fn latest_error(&self) -> Option<&str> {
        self.last_failed
            .and_then(|kind| self.request_state(kind).failure_message())
    }

    pub fn replace_all(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
        self.touch();
    }

    pub fn prepend(&mut self, job: Job) {
        self.jobs.insert(0, job);
        self.touch();
    }

    pub fn set_request_state(&mut self, kind: RequestKind, state: RequestState) {
        match &state {
            RequestState::Failed(_) => self.last_failed = Some(kind),
            // A fresh attempt of either kind clears the displayed error.
            RequestState::Loading => self.last_failed = None,
            _ => {}
        }
        match kind {
            RequestKind::List => self.list = state,
            RequestKind::Create => self.create = state,
        }
        self.touch();
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.dirty = true;
    }
}
