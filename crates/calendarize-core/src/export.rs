//! The export artifact builder.
//!
//! Given a [`CalendarEvent`], produces the three export artifacts: a Google
//! Calendar deep link, an Outlook deep link, and an ICS payload with a
//! suggested download filename. Each builder is a pure function of the
//! record; calling one twice yields byte-identical output.
//!
//! The service may send pre-built links or ICS text. Rather than scattering
//! ad hoc fallback branches, each artifact resolves through a single
//! [`ExportTarget`]: `Precomputed` when the service value is present and
//! usable, `Derived` when the builder must synthesize locally.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{ExportError, ExportResult};
use crate::event::CalendarEvent;
use crate::ics;

/// How an export artifact will be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget<'a> {
    /// Use the server-provided value verbatim.
    Precomputed(&'a str),
    /// Synthesize the artifact from the event fields.
    Derived(&'a CalendarEvent),
}

impl<'a> ExportTarget<'a> {
    /// Resolves a URL artifact: the precomputed link wins when it is
    /// non-empty and well-formed, otherwise the builder derives one.
    pub fn resolve_url(precomputed: Option<&'a str>, event: &'a CalendarEvent) -> Self {
        match precomputed {
            Some(link) if !link.trim().is_empty() => {
                if Url::parse(link).is_ok() {
                    Self::Precomputed(link)
                } else {
                    debug!(link = %link, "ignoring malformed precomputed link");
                    Self::Derived(event)
                }
            }
            _ => Self::Derived(event),
        }
    }

    /// Resolves a text artifact: any non-empty precomputed value wins.
    pub fn resolve_text(precomputed: Option<&'a str>, event: &'a CalendarEvent) -> Self {
        match precomputed {
            Some(text) if !text.trim().is_empty() => Self::Precomputed(text),
            _ => Self::Derived(event),
        }
    }
}

/// An ICS payload ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcsDownload {
    /// The ICS text, CRLF-terminated.
    pub payload: String,
    /// Suggested filename, derived from the event title.
    pub filename: String,
}

/// Builds the Google Calendar deep link for the event.
///
/// Prefers a well-formed `gcal_link` from the service. The fallback
/// synthesizes a `calendar/render` URL with start/end in compact UTC basic
/// format (`YYYYMMDDTHHMMSSZ`).
///
/// # Errors
///
/// [`ExportError::MalformedEvent`] when no precomputed link exists and a
/// temporal field cannot be parsed.
pub fn google_calendar_url(event: &CalendarEvent) -> ExportResult<String> {
    match ExportTarget::resolve_url(event.gcal_link.as_deref(), event) {
        ExportTarget::Precomputed(link) => Ok(link.to_string()),
        ExportTarget::Derived(event) => {
            let start = event
                .start_time
                .compact_utc()
                .ok_or_else(|| ExportError::malformed("start_time", event.start_time.raw()))?;
            let end = event
                .end_time
                .compact_utc()
                .ok_or_else(|| ExportError::malformed("end_time", event.end_time.raw()))?;

            Ok(format!(
                "https://www.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&details={}",
                urlencoding::encode(&event.title),
                start,
                end,
                urlencoding::encode(&event.description),
            ))
        }
    }
}

/// Builds the Outlook deep link for the event.
///
/// Prefers a well-formed `outlook_link` from the service. The fallback
/// synthesizes a `deeplink/compose` URL with start/end as full ISO-8601
/// UTC strings (unlike Google's compact form).
///
/// # Errors
///
/// [`ExportError::MalformedEvent`] when no precomputed link exists and a
/// temporal field cannot be parsed.
pub fn outlook_url(event: &CalendarEvent) -> ExportResult<String> {
    match ExportTarget::resolve_url(event.outlook_link.as_deref(), event) {
        ExportTarget::Precomputed(link) => Ok(link.to_string()),
        ExportTarget::Derived(event) => {
            let start = event
                .start_time
                .iso_utc()
                .ok_or_else(|| ExportError::malformed("start_time", event.start_time.raw()))?;
            let end = event
                .end_time
                .iso_utc()
                .ok_or_else(|| ExportError::malformed("end_time", event.end_time.raw()))?;

            Ok(format!(
                "https://outlook.office.com/calendar/0/deeplink/compose?subject={}&startdt={}&enddt={}&body={}",
                urlencoding::encode(&event.title),
                start,
                end,
                urlencoding::encode(&event.description),
            ))
        }
    }
}

/// Builds the ICS download payload for the event.
///
/// Prefers a non-empty `ics_string` from the service, normalized to CRLF
/// line terminators but otherwise untouched. The fallback synthesizes the
/// minimal VCALENDAR block.
///
/// Producing the payload has no side effect; writing it out and releasing
/// the transient download resource is the caller's responsibility.
///
/// # Errors
///
/// [`ExportError::MalformedEvent`] when no precomputed payload exists and a
/// temporal field cannot be parsed.
pub fn ics_download(event: &CalendarEvent) -> ExportResult<IcsDownload> {
    let payload = match ExportTarget::resolve_text(event.ics_string.as_deref(), event) {
        ExportTarget::Precomputed(text) => ics::normalize_crlf(text),
        ExportTarget::Derived(event) => ics::synthesize(event)?,
    };

    Ok(IcsDownload {
        payload,
        filename: ics::download_filename(&event.title),
    })
}
