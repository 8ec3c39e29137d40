use crate::NewJob;

/// IO requested by the state machine; the host executes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchJobs,
    CreateJob(NewJob),
}
