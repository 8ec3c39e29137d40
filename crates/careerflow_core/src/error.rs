use std::fmt;

/// Message shown when a failure carries no usable description.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Company and title are required.")]
    MissingRequiredFields,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    InvalidBody,
    Network,
    /// The request task ended without producing a response.
    Aborted,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::InvalidBody => write!(f, "invalid response body"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Aborted => write!(f, "request aborted"),
        }
    }
}

/// Failure of a remote operation: transport error, non-2xx status or an
/// undecodable body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct RequestError {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn http_status(code: u16) -> Self {
        Self::new(FailureKind::HttpStatus(code), format!("Request failed: {code}"))
    }

    /// Human-readable reason, falling back to [`GENERIC_FAILURE_MESSAGE`].
    pub fn describe(&self) -> String {
        let message = self.message.trim();
        if message.is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message.to_string()
        }
    }
}
