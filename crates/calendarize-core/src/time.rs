//! Timestamp handling for service-supplied event times.
//!
//! The extraction service returns start/end times as ISO-8601-like strings
//! that may or may not carry a timezone offset. Deep links need the values
//! in two renderings: Google's compact UTC basic format
//! (`YYYYMMDDTHHMMSSZ`) and Outlook's full ISO-8601 form. [`EventStamp`]
//! keeps the raw string around (for error reporting and serialization) next
//! to the parsed UTC instant, when one could be derived.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Accepted layouts for offset-less timestamps.
///
/// Offset-less values are read as UTC: the service reports the user's
/// timezone separately and calendar importers handle `Z`-suffixed stamps
/// most reliably.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A start or end time as received from the extraction service.
///
/// Holds the raw string verbatim plus the parsed UTC instant when the
/// string was parseable. Serializes as the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct EventStamp {
    raw: String,
    parsed: Option<DateTime<Utc>>,
}

impl EventStamp {
    /// Parses a timestamp string leniently.
    ///
    /// Accepts RFC 3339 (with offset or `Z`), and bare
    /// `YYYY-MM-DDTHH:MM[:SS[.fff]]` forms which are treated as UTC.
    /// Unparseable input is retained as raw text with no instant.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_instant(raw.trim());
        Self { raw, parsed }
    }

    /// Creates a stamp directly from a UTC datetime.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self {
            raw: dt.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            parsed: Some(dt),
        }
    }

    /// Creates an empty, unparseable stamp.
    pub fn empty() -> Self {
        Self {
            raw: String::new(),
            parsed: None,
        }
    }

    /// Returns the raw string as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if the stamp carried a parseable datetime.
    pub fn is_parsed(&self) -> bool {
        self.parsed.is_some()
    }

    /// Returns the parsed UTC instant, if any.
    pub fn as_utc(&self) -> Option<DateTime<Utc>> {
        self.parsed
    }

    /// Formats as compact UTC basic format: `YYYYMMDDTHHMMSSZ`.
    ///
    /// This is the form Google Calendar's `dates` parameter and ICS
    /// `DTSTART`/`DTEND` lines expect.
    pub fn compact_utc(&self) -> Option<String> {
        self.parsed.map(|dt| dt.format("%Y%m%dT%H%M%SZ").to_string())
    }

    /// Formats as full ISO-8601 UTC: `YYYY-MM-DDTHH:MM:SSZ`.
    ///
    /// This is the form Outlook's `startdt`/`enddt` parameters expect.
    pub fn iso_utc(&self) -> Option<String> {
        self.parsed
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
    }
}

impl From<String> for EventStamp {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl From<EventStamp> for String {
    fn from(stamp: EventStamp) -> Self {
        stamp.raw
    }
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }

    // RFC 3339 covers offsets, `Z`, and fractional seconds.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Offset-less fallbacks, read as UTC.
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    None
}
