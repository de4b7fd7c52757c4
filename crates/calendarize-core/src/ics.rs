//! ICS (RFC 5545) text handling.
//!
//! This module owns the three text-level concerns of ICS export:
//! escaping free-text fields, normalizing line terminators to CRLF (calendar
//! importers are strict about this), and synthesizing the minimal VCALENDAR
//! block used when the service did not supply a pre-built payload.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ExportError, ExportResult};
use crate::event::CalendarEvent;

/// Regex collapsing runs of whitespace in download filenames.
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Escapes free text for use in an ICS property value.
///
/// Per RFC 5545: backslash becomes `\\`, semicolon `\;`, comma `\,`, and
/// newlines the two-character sequence `\n`. Backslashes are escaped first
/// so the later replacements cannot double-escape.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {
                // CRLF and lone CR both count as one newline
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            _ => out.push(c),
        }
    }
    out
}

/// Normalizes line terminators to CRLF.
///
/// Applied to any server-provided `ics_string` before it is offered for
/// download: payloads received with bare `\n` would be rejected by strict
/// calendar importers.
pub fn normalize_crlf(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    unified.replace('\n', "\r\n")
}

/// Synthesizes a minimal RFC-5545 VCALENDAR block for the event.
///
/// Timestamps are rendered in compact UTC form; the caller must have
/// verified they are parseable. CRLF terminators throughout, including a
/// trailing one.
pub fn synthesize(event: &CalendarEvent) -> ExportResult<String> {
    let dtstart = event
        .start_time
        .compact_utc()
        .ok_or_else(|| ExportError::malformed("start_time", event.start_time.raw()))?;
    let dtend = event
        .end_time
        .compact_utc()
        .ok_or_else(|| ExportError::malformed("end_time", event.end_time.raw()))?;

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("SUMMARY:{}", escape_field(&event.title)?),
        format!("DTSTART:{}", dtstart),
        format!("DTEND:{}", dtend),
        format!("DESCRIPTION:{}", escape_field(&event.description)?),
    ];

    if let Some(ref location) = event.location {
        lines.push(format!("LOCATION:{}", escape_field(location)?));
    }

    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    Ok(out)
}

/// Escapes a field and verifies no raw line breaks survived.
///
/// The escaping rules are deterministic, so a leftover control character
/// indicates a bug here rather than bad user data.
fn escape_field(text: &str) -> ExportResult<String> {
    let escaped = escape_text(text);
    if escaped.contains('\n') || escaped.contains('\r') {
        return Err(ExportError::Escaping(format!(
            "raw line break survived escaping of {:?}",
            text
        )));
    }
    Ok(escaped)
}

/// Derives the suggested download filename from the event title.
///
/// Internal whitespace collapses to underscores; an empty title falls back
/// to `event.ics`.
pub fn download_filename(title: &str) -> String {
    let stem = WHITESPACE_REGEX.replace_all(title.trim(), "_");
    if stem.is_empty() {
        "event.ics".to_string()
    } else {
        format!("{}.ics", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::EventStamp;

    fn sample_event() -> CalendarEvent {
        CalendarEvent::new(
            "Team Standup Meeting",
            EventStamp::parse("2024-03-15T09:00:00Z"),
            EventStamp::parse("2024-03-15T09:30:00Z"),
        )
    }

    mod escaping {
        use super::*;

        #[test]
        fn escapes_special_characters_in_order() {
            assert_eq!(
                escape_text("Hello; World, \"quoted\"\nnewline"),
                "Hello\\; World\\, \"quoted\"\\nnewline"
            );
        }

        #[test]
        fn backslash_escaped_first() {
            // A literal backslash-semicolon must not double-escape
            assert_eq!(escape_text("a\\;b"), "a\\\\\\;b");
            assert_eq!(escape_text("C:\\path"), "C:\\\\path");
        }

        #[test]
        fn crlf_counts_as_one_newline() {
            assert_eq!(escape_text("a\r\nb"), "a\\nb");
            assert_eq!(escape_text("a\rb"), "a\\nb");
        }

        #[test]
        fn plain_text_unchanged() {
            assert_eq!(escape_text("Dentist appointment at 3pm"), "Dentist appointment at 3pm");
        }
    }

    mod crlf {
        use super::*;

        #[test]
        fn bare_newlines_become_crlf() {
            assert_eq!(
                normalize_crlf("BEGIN:VCALENDAR\nEND:VCALENDAR\n"),
                "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n"
            );
        }

        #[test]
        fn existing_crlf_untouched() {
            let ics = "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n";
            assert_eq!(normalize_crlf(ics), ics);
        }

        #[test]
        fn mixed_terminators_unified() {
            assert_eq!(normalize_crlf("a\r\nb\nc\rd"), "a\r\nb\r\nc\r\nd");
        }
    }

    mod synthesis {
        use super::*;

        #[test]
        fn minimal_block() {
            let event = sample_event().with_description("Daily sync");
            let ics = synthesize(&event).unwrap();
            assert_eq!(
                ics,
                "BEGIN:VCALENDAR\r\n\
                 VERSION:2.0\r\n\
                 CALSCALE:GREGORIAN\r\n\
                 BEGIN:VEVENT\r\n\
                 SUMMARY:Team Standup Meeting\r\n\
                 DTSTART:20240315T090000Z\r\n\
                 DTEND:20240315T093000Z\r\n\
                 DESCRIPTION:Daily sync\r\n\
                 END:VEVENT\r\n\
                 END:VCALENDAR\r\n"
            );
        }

        #[test]
        fn description_escaped_with_crlf_lines() {
            let event = sample_event().with_description("Hello; World, \"quoted\"\nnewline");
            let ics = synthesize(&event).unwrap();
            assert!(ics.contains("DESCRIPTION:Hello\\; World\\, \"quoted\"\\nnewline\r\n"));
            // Every line terminator is CRLF
            assert_eq!(ics.matches('\n').count(), ics.matches("\r\n").count());
        }

        #[test]
        fn location_included_when_present() {
            let event = sample_event().with_location("Room 4, Floor 2");
            let ics = synthesize(&event).unwrap();
            assert!(ics.contains("LOCATION:Room 4\\, Floor 2\r\n"));
        }

        #[test]
        fn location_omitted_when_absent() {
            let ics = synthesize(&sample_event()).unwrap();
            assert!(!ics.contains("LOCATION"));
        }

        #[test]
        fn unparseable_start_fails() {
            let event = CalendarEvent::new(
                "Broken",
                EventStamp::empty(),
                EventStamp::parse("2024-03-15T09:30:00Z"),
            );
            let err = synthesize(&event).unwrap_err();
            assert_eq!(err, ExportError::malformed("start_time", ""));
        }

        #[test]
        fn idempotent() {
            let event = sample_event().with_description("notes");
            assert_eq!(synthesize(&event).unwrap(), synthesize(&event).unwrap());
        }
    }

    mod filenames {
        use super::*;

        #[test]
        fn whitespace_collapses_to_underscores() {
            assert_eq!(download_filename("Team Standup Meeting"), "Team_Standup_Meeting.ics");
        }

        #[test]
        fn runs_of_whitespace_collapse() {
            assert_eq!(download_filename("  Lunch   with\tSam  "), "Lunch_with_Sam.ics");
        }

        #[test]
        fn empty_title_falls_back() {
            assert_eq!(download_filename(""), "event.ics");
            assert_eq!(download_filename("   "), "event.ics");
        }
    }
}
