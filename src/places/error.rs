use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single data-service query. The operation name is carried
/// so callers and logs can tell which lookup failed.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{operation}: data service responded with status {status}")]
    Status {
        operation: &'static str,
        status: StatusCode,
    },
    #[error("{operation}: request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{operation}: could not decode response body: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid data service url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl RepositoryError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RepositoryError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
