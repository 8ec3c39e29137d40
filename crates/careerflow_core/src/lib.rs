//! CareerFlow core: job store, request controllers and the filter engine,
//! driven by a pure `update` function.
mod create_controller;
mod effect;
mod error;
mod fetch_controller;
mod filter;
mod job;
mod msg;
mod request;
mod state;
mod store;
mod update;
mod view_model;

pub use create_controller::{CreateController, CreateForm, CREATE_FAILURE_MESSAGE};
pub use effect::Effect;
pub use error::{FailureKind, RequestError, ValidationError, GENERIC_FAILURE_MESSAGE};
pub use fetch_controller::FetchController;
pub use filter::{status_options, visible_jobs, FilterCriteria, StatusFilter, ALL_STATUSES};
pub use job::{Job, JobId, JobStatus, NewJob, UnknownStatus};
pub use msg::Msg;
pub use request::{RequestKind, RequestState};
pub use state::AppState;
pub use store::JobStore;
pub use update::update;
pub use view_model::{AppViewModel, FormView, JobRowView, StatusChoice, EMPTY_HINT};
