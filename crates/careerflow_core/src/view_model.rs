use crate::{FilterCriteria, Job, JobId, JobStatus, StatusFilter};

pub const EMPTY_HINT: &str = "No matching jobs. Try clearing the search or filter.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Size of the whole collection, before filtering.
    pub job_count: usize,
    pub rows: Vec<JobRowView>,
    pub status_options: Vec<StatusFilter>,
    pub create_status_choices: Vec<StatusChoice>,
    pub criteria: FilterCriteria,
    pub form: FormView,
    pub loading: bool,
    pub submitting: bool,
    pub submit_label: &'static str,
    pub error: Option<String>,
    pub empty_hint: Option<&'static str>,
    pub revision: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub id: JobId,
    pub company: String,
    pub title: String,
    pub status: JobStatus,
}

impl From<&Job> for JobRowView {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            company: job.company.clone(),
            title: job.title.clone(),
            status: job.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub company: String,
    pub title: String,
    pub status: JobStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChoice {
    pub value: JobStatus,
    pub label: &'static str,
}

impl From<JobStatus> for StatusChoice {
    fn from(value: JobStatus) -> Self {
        Self {
            value,
            label: value.label(),
        }
    }
}
