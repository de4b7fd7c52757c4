//! Error types for the extraction service boundary.

use thiserror::Error;

/// An error from the extraction service client.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The endpoint URL in the configuration is unusable.
    #[error("service configuration error: {0}")]
    Configuration(String),

    /// The request never got a usable response (connect, TLS, timeout).
    #[error("service network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("invalid service response: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    /// Returns true if this error is transient and the request may be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::Configuration(_) | Self::InvalidResponse(_) => false,
        }
    }
}

/// A specialized Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryability() {
        assert!(
            ServiceError::Status {
                status: 503,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(
            ServiceError::Status {
                status: 429,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(
            !ServiceError::Status {
                status: 400,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(!ServiceError::InvalidResponse("not json".into()).is_retryable());
        assert!(!ServiceError::Configuration("bad endpoint".into()).is_retryable());
    }

    #[test]
    fn status_display() {
        let err = ServiceError::Status {
            status: 422,
            body: "no event found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("422"));
        assert!(msg.contains("no event found"));
    }
}
