use crate::{Job, JobStatus, RequestError, StatusFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host finished starting up; triggers the one-shot list fetch.
    Initialize,
    /// User edited the search box.
    QueryChanged(String),
    /// User picked an entry from the status dropdown.
    StatusFilterChanged(StatusFilter),
    /// User edited the company field of the create form.
    CompanyChanged(String),
    /// User edited the title field of the create form.
    TitleChanged(String),
    /// User picked the status for the job being created.
    NewStatusChanged(JobStatus),
    /// User pressed "Add Job".
    SubmitClicked,
    /// Outcome of the list fetch.
    JobsLoaded(Result<Vec<Job>, RequestError>),
    /// Outcome of a create request.
    JobCreated(Result<Job, RequestError>),
    /// Host is shutting down; later responses are dropped.
    Teardown,
    NoOp,
}
