//! The normalized calendar event record.
//!
//! [`CalendarEvent`] is the canonical representation of one event extracted
//! by the remote service, after defaults have been applied. It lives for a
//! single conversion cycle: created from a service response, superseded by
//! the next conversion or an explicit dismissal.

use serde::{Deserialize, Serialize};

use crate::time::EventStamp;

/// A normalized calendar event, ready for export.
///
/// `gcal_link`, `outlook_link` and `ics_string` may arrive pre-built from
/// the service; the export builders prefer those over re-deriving. The
/// remaining fields are used verbatim when an artifact has to be
/// synthesized locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Display title, used verbatim in all outputs. May be empty; the
    /// caller supplies any fallback text upstream.
    pub title: String,
    /// Free-text description. May contain newlines; escaped per RFC 5545
    /// rules when rendered into ICS.
    pub description: String,
    /// Event start as received from the service.
    pub start_time: EventStamp,
    /// Event end as received from the service.
    pub end_time: EventStamp,
    /// IANA timezone identifier. Informational only: export timestamps
    /// are always rendered as UTC for importer interoperability.
    pub time_zone: String,
    /// Free-text location, if the service reported one.
    pub location: Option<String>,
    /// Attendee email addresses, in display order.
    pub attendees: Vec<String>,
    /// Pre-built Google Calendar deep link from the service, if any.
    pub gcal_link: Option<String>,
    /// Pre-built Outlook deep link from the service, if any.
    pub outlook_link: Option<String>,
    /// Pre-built ICS payload from the service, if any.
    pub ics_string: Option<String>,
}

impl CalendarEvent {
    /// Creates an event with required fields; everything else defaults.
    pub fn new(title: impl Into<String>, start: EventStamp, end: EventStamp) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            start_time: start,
            end_time: end,
            time_zone: String::new(),
            location: None,
            attendees: Vec::new(),
            gcal_link: None,
            outlook_link: None,
            ics_string: None,
        }
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the timezone identifier.
    pub fn with_time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = tz.into();
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder method to set the attendee list.
    pub fn with_attendees(mut self, attendees: Vec<String>) -> Self {
        self.attendees = attendees;
        self
    }

    /// Builder method to set a pre-built Google Calendar link.
    pub fn with_gcal_link(mut self, url: impl Into<String>) -> Self {
        self.gcal_link = Some(url.into());
        self
    }

    /// Builder method to set a pre-built Outlook link.
    pub fn with_outlook_link(mut self, url: impl Into<String>) -> Self {
        self.outlook_link = Some(url.into());
        self
    }

    /// Builder method to set a pre-built ICS payload.
    pub fn with_ics_string(mut self, ics: impl Into<String>) -> Self {
        self.ics_string = Some(ics.into());
        self
    }

    /// Returns `true` when both temporal fields carry parseable datetimes.
    pub fn has_parseable_times(&self) -> bool {
        self.start_time.is_parsed() && self.end_time.is_parsed()
    }
}
