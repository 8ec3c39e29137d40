use careerflow_core::{FailureKind, Job, NewJob, RequestError};
use careerflow_logging::{flow_debug, flow_trace};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{ClientSettings, JOBS_PATH};

/// The two operations the client needs from the job service.
#[async_trait::async_trait]
pub trait JobsApi: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<Job>, RequestError>;

    async fn create_job(&self, new_job: &NewJob) -> Result<Job, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobsApi {
    client: reqwest::Client,
    jobs_url: Url,
    max_bytes: u64,
}

impl ReqwestJobsApi {
    pub fn new(settings: ClientSettings) -> Result<Self, RequestError> {
        let jobs_url = jobs_url(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| RequestError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            jobs_url,
            max_bytes: settings.max_bytes,
        })
    }

    pub fn jobs_url(&self) -> &Url {
        &self.jobs_url
    }

    /// Checks the status, then reads and decodes the body under the size cap.
    async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, RequestError> {
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::http_status(status.as_u16()));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(self.too_large(Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.max_bytes {
                return Err(self.too_large(Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        flow_trace!("Read {} body bytes from {}", bytes.len(), self.jobs_url);

        serde_json::from_slice(&bytes).map_err(|err| {
            RequestError::new(FailureKind::InvalidBody, format!("Invalid response body: {err}"))
        })
    }

    fn too_large(&self, actual: Option<u64>) -> RequestError {
        RequestError::new(
            FailureKind::TooLarge {
                max_bytes: self.max_bytes,
                actual,
            },
            "Response too large",
        )
    }
}

#[async_trait::async_trait]
impl JobsApi for ReqwestJobsApi {
    async fn list_jobs(&self) -> Result<Vec<Job>, RequestError> {
        flow_debug!("GET {}", self.jobs_url);
        let response = self
            .client
            .get(self.jobs_url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;
        self.decode(response).await
    }

    async fn create_job(&self, new_job: &NewJob) -> Result<Job, RequestError> {
        let body = serde_json::to_vec(new_job)
            .map_err(|err| RequestError::new(FailureKind::InvalidBody, err.to_string()))?;
        flow_debug!("POST {} ({} bytes)", self.jobs_url, body.len());
        let response = self
            .client
            .post(self.jobs_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        self.decode(response).await
    }
}

/// Resolves the jobs collection against `base`, keeping any path prefix.
pub fn jobs_url(base: &str) -> Result<Url, RequestError> {
    let invalid = |err: url::ParseError| {
        RequestError::new(FailureKind::InvalidUrl, format!("Invalid base URL {base:?}: {err}"))
    };
    let mut base_url = Url::parse(base.trim()).map_err(invalid)?;
    if base_url.cannot_be_a_base() {
        return Err(RequestError::new(
            FailureKind::InvalidUrl,
            format!("Invalid base URL {base:?}"),
        ));
    }
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url.join(JOBS_PATH).map_err(invalid)
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_timeout() {
        return RequestError::new(FailureKind::Timeout, err.to_string());
    }
    RequestError::new(FailureKind::Network, err.to_string())
}
