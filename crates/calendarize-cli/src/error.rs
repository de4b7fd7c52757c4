//! Client error types.

use std::fmt;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the CLI.
#[derive(Debug)]
pub enum ClientError {
    /// The input given on the command line was unusable.
    Input(String),
    /// The extraction service call failed.
    Service(calendarize_service::ServiceError),
    /// Building an export artifact failed.
    Export(calendarize_core::ExportError),
    /// IO error.
    Io(std::io::Error),
    /// Action failed (open, download delivery).
    Action(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(msg) => write!(f, "invalid input: {}", msg),
            Self::Service(err) => write!(f, "conversion failed: {}", err),
            Self::Export(err) => write!(f, "export failed: {}", err),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Action(msg) => write!(f, "action failed: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::Export(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<calendarize_service::ServiceError> for ClientError {
    fn from(err: calendarize_service::ServiceError) -> Self {
        Self::Service(err)
    }
}

impl From<calendarize_core::ExportError> for ClientError {
    fn from(err: calendarize_core::ExportError) -> Self {
        Self::Export(err)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
