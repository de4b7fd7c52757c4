//! Error types for export artifact construction.

use thiserror::Error;

/// Errors raised by the export artifact builders.
///
/// Builders never fail for merely missing optional fields; those degrade to
/// empty or omitted sections. They fail fast only when a required temporal
/// field is absent or unparseable and no precomputed artifact is available,
/// since a link or ICS file with an invalid date is worse than no artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// A required temporal field could not be turned into a valid date and
    /// no server-provided artifact was available to fall back on.
    #[error("malformed event: {field} {value:?} is not a parseable timestamp")]
    MalformedEvent {
        /// The offending field (`start_time` or `end_time`).
        field: &'static str,
        /// The raw value as received.
        value: String,
    },

    /// Text escaping produced output that still contained raw control
    /// characters. Indicates an implementation bug, not bad user data;
    /// propagated unchanged.
    #[error("internal escaping error: {0}")]
    Escaping(String),
}

impl ExportError {
    /// Creates a `MalformedEvent` error for the given field.
    pub fn malformed(field: &'static str, value: impl Into<String>) -> Self {
        Self::MalformedEvent {
            field,
            value: value.into(),
        }
    }
}

/// A specialized Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
