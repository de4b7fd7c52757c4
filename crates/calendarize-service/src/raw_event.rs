//! Wire types for the extraction service.
//!
//! The service accepts the user's free-form input plus their local time and
//! timezone, and answers with event objects carrying any subset of the
//! fields below. Everything is optional on the wire; defaults are applied
//! during normalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The request body sent to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The user's free-form input text.
    pub text: String,
    /// The user's current local time, so relative phrases ("tomorrow at 3")
    /// can be resolved server-side.
    pub local_time: DateTime<Utc>,
    /// The user's IANA timezone identifier.
    pub time_zone: String,
}

impl GenerateRequest {
    /// Creates a request for the given text at the given local context.
    pub fn new(text: impl Into<String>, local_time: DateTime<Utc>, time_zone: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            local_time,
            time_zone: time_zone.into(),
        }
    }
}

/// One event object as returned by the service, before normalization.
///
/// All fields are optional and unknown fields are ignored; the service's
/// response shape has drifted over time and the normalizer fills the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEventRecord {
    /// Event title.
    pub title: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Start time as an ISO-8601-like string (offset may be missing).
    pub start_time: Option<String>,
    /// End time as an ISO-8601-like string (offset may be missing).
    pub end_time: Option<String>,
    /// IANA timezone identifier.
    pub time_zone: Option<String>,
    /// Free-text location.
    pub location: Option<String>,
    /// Attendee email addresses.
    pub attendees: Option<Vec<String>>,
    /// Pre-built Google Calendar deep link.
    pub gcal_link: Option<String>,
    /// Pre-built Outlook deep link.
    pub outlook_link: Option<String>,
    /// Pre-built ICS payload.
    pub ics_string: Option<String>,
}
