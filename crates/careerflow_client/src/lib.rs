//! CareerFlow client: HTTP access to the job service and the background
//! runtime that executes core effects.
mod api;
mod handle;
mod settings;

pub use api::{jobs_url, JobsApi, ReqwestJobsApi};
pub use handle::{
    ChannelEventSink, ClientCommand, ClientError, ClientEvent, ClientHandle, EventSink,
};
pub use settings::{ClientSettings, DEFAULT_BASE_URL, JOBS_PATH};
