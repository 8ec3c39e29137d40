use careerflow_logging::{flow_debug, flow_info, flow_warn};

use crate::{
    Effect, Job, JobStatus, JobStore, NewJob, RequestError, RequestKind, RequestState,
    ValidationError,
};

/// Shown for any failed create, whatever the server said.
pub const CREATE_FAILURE_MESSAGE: &str = "Could not create job.";

/// Draft inputs of the create form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateForm {
    pub company: String,
    pub title: String,
    pub status: JobStatus,
}

impl CreateForm {
    /// Trims the text fields and rejects the draft if either ends up empty.
    pub fn validate(&self) -> Result<NewJob, ValidationError> {
        let company = self.company.trim();
        let title = self.title.trim();
        if company.is_empty() || title.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(NewJob {
            company: company.to_string(),
            title: title.to_string(),
            status: self.status,
        })
    }
}

/// Validates and submits new jobs, and merges confirmed ones into the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateController {
    form: CreateForm,
}

impl CreateController {
    pub fn form(&self) -> &CreateForm {
        &self.form
    }

    pub fn set_company(&mut self, company: String) {
        self.form.company = company;
    }

    pub fn set_title(&mut self, title: String) {
        self.form.title = title;
    }

    pub fn set_status(&mut self, status: JobStatus) {
        self.form.status = status;
    }

    /// Returns the create effect when the draft is valid and nothing is in
    /// flight. A second submit while loading is ignored.
    pub fn submit(&mut self, store: &mut JobStore) -> Option<Effect> {
        if store.request_state(RequestKind::Create).is_loading() {
            flow_debug!("Create already in flight; ignoring submit");
            return None;
        }
        match self.form.validate() {
            Ok(new_job) => {
                store.set_request_state(RequestKind::Create, RequestState::Loading);
                Some(Effect::CreateJob(new_job))
            }
            Err(err) => {
                flow_debug!("Create rejected locally: {}", err);
                store.set_request_state(RequestKind::Create, RequestState::Failed(err.to_string()));
                None
            }
        }
    }

    /// Prepends the confirmed job and clears the form, or records the failure
    /// and keeps the draft for a retry.
    pub fn complete(&mut self, store: &mut JobStore, result: Result<Job, RequestError>) {
        if !store.request_state(RequestKind::Create).is_loading() {
            flow_warn!("Dropping create result that arrived with no create in flight");
            return;
        }
        match result {
            Ok(job) => {
                flow_info!("Created job {} ({} / {})", job.id, job.company, job.title);
                store.prepend(job);
                self.form = CreateForm::default();
                store.set_request_state(RequestKind::Create, RequestState::Succeeded);
            }
            Err(err) => {
                flow_warn!("Create failed: {}", err);
                store.set_request_state(
                    RequestKind::Create,
                    RequestState::Failed(CREATE_FAILURE_MESSAGE.to_string()),
                );
            }
        }
    }
}
