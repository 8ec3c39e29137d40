use crate::filter::{status_options, visible_jobs};
use crate::view_model::{AppViewModel, FormView, JobRowView, StatusChoice, EMPTY_HINT};
use crate::{
    CreateController, FetchController, FilterCriteria, JobStatus, JobStore, RequestKind,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) store: JobStore,
    pub(crate) criteria: FilterCriteria,
    pub(crate) fetch: FetchController,
    pub(crate) create: CreateController,
    pub(crate) torn_down: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &JobStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn view(&self) -> AppViewModel {
        let jobs = self.store.jobs();
        let rows: Vec<JobRowView> = visible_jobs(jobs, &self.criteria)
            .into_iter()
            .map(JobRowView::from)
            .collect();
        let loading = self.store.request_state(RequestKind::List).is_loading();
        let submitting = self.store.request_state(RequestKind::Create).is_loading();
        let error = self.store.latest_error().map(ToOwned::to_owned);
        let empty_hint = (!loading && error.is_none() && rows.is_empty()).then_some(EMPTY_HINT);
        let form = self.create.form();

        AppViewModel {
            job_count: jobs.len(),
            rows,
            status_options: status_options(jobs),
            create_status_choices: JobStatus::ALL.into_iter().map(StatusChoice::from).collect(),
            criteria: self.criteria.clone(),
            form: FormView {
                company: form.company.clone(),
                title: form.title.clone(),
                status: form.status,
            },
            loading,
            submitting,
            submit_label: if submitting { "Adding..." } else { "Add Job" },
            error,
            empty_hint,
            revision: self.store.revision(),
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// True when the view needs re-rendering since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        let store_dirty = self.store.consume_dirty();
        std::mem::take(&mut self.dirty) || store_dirty
    }
}
