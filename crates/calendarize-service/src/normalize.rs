//! RawEventRecord to CalendarEvent conversion.
//!
//! Applies the defaults the export builders rely on: blank precomputed
//! artifacts become `None`, a missing end time defaults to one hour after
//! the start, and missing collections become empty.

use chrono::Duration;

use calendarize_core::{CalendarEvent, EventStamp};

use crate::raw_event::RawEventRecord;

/// Default event length when the service omits the end time.
const DEFAULT_DURATION_MINUTES: i64 = 60;

/// Converts one raw service record into a normalized [`CalendarEvent`].
///
/// The title is kept as-is, empty included; any display fallback is the
/// caller's concern.
pub fn normalize_record(raw: &RawEventRecord) -> CalendarEvent {
    let start = EventStamp::parse(raw.start_time.as_deref().unwrap_or(""));
    let end = resolve_end(raw.end_time.as_deref(), &start);

    let mut event = CalendarEvent::new(raw.title.clone().unwrap_or_default(), start, end)
        .with_description(raw.description.clone().unwrap_or_default())
        .with_time_zone(raw.time_zone.clone().unwrap_or_default())
        .with_attendees(raw.attendees.clone().unwrap_or_default());

    if let Some(location) = non_blank(raw.location.as_deref()) {
        event = event.with_location(location);
    }
    if let Some(link) = non_blank(raw.gcal_link.as_deref()) {
        event = event.with_gcal_link(link);
    }
    if let Some(link) = non_blank(raw.outlook_link.as_deref()) {
        event = event.with_outlook_link(link);
    }
    if let Some(ics) = non_blank(raw.ics_string.as_deref()) {
        event = event.with_ics_string(ics);
    }

    event
}

/// Batch conversion for the array response shape.
pub fn normalize_records(raw: &[RawEventRecord]) -> Vec<CalendarEvent> {
    raw.iter().map(normalize_record).collect()
}

fn resolve_end(raw_end: Option<&str>, start: &EventStamp) -> EventStamp {
    match raw_end {
        Some(s) if !s.trim().is_empty() => EventStamp::parse(s),
        _ => match start.as_utc() {
            Some(start_utc) => {
                EventStamp::from_utc(start_utc + Duration::minutes(DEFAULT_DURATION_MINUTES))
            }
            None => EventStamp::empty(),
        },
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_record() -> RawEventRecord {
        RawEventRecord {
            title: Some("Team Standup".to_string()),
            description: Some("Daily sync".to_string()),
            start_time: Some("2024-03-15T09:00:00Z".to_string()),
            end_time: Some("2024-03-15T09:30:00Z".to_string()),
            time_zone: Some("Europe/Paris".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn normalizes_complete_record() {
        let event = normalize_record(&sample_record());
        assert_eq!(event.title, "Team Standup");
        assert_eq!(event.description, "Daily sync");
        assert_eq!(event.time_zone, "Europe/Paris");
        assert!(event.has_parseable_times());
        assert!(event.attendees.is_empty());
        assert!(event.gcal_link.is_none());
    }

    #[test]
    fn missing_end_defaults_to_one_hour() {
        let mut raw = sample_record();
        raw.end_time = None;

        let event = normalize_record(&raw);
        assert_eq!(
            event.end_time.as_utc(),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn blank_end_also_defaults() {
        let mut raw = sample_record();
        raw.end_time = Some("  ".to_string());

        let event = normalize_record(&raw);
        assert_eq!(
            event.end_time.as_utc(),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn unparseable_start_gives_no_default_end() {
        let raw = RawEventRecord {
            title: Some("Broken".to_string()),
            ..Default::default()
        };
        let event = normalize_record(&raw);
        assert!(!event.start_time.is_parsed());
        assert!(!event.end_time.is_parsed());
    }

    #[test]
    fn blank_links_become_none() {
        let raw = RawEventRecord {
            gcal_link: Some("".to_string()),
            outlook_link: Some("   ".to_string()),
            ics_string: Some(String::new()),
            ..sample_record()
        };
        let event = normalize_record(&raw);
        assert!(event.gcal_link.is_none());
        assert!(event.outlook_link.is_none());
        assert!(event.ics_string.is_none());
    }

    #[test]
    fn populated_links_survive() {
        let raw = RawEventRecord {
            gcal_link: Some("https://calendar.google.com/event?eid=abc".to_string()),
            ..sample_record()
        };
        let event = normalize_record(&raw);
        assert_eq!(
            event.gcal_link,
            Some("https://calendar.google.com/event?eid=abc".to_string())
        );
    }

    #[test]
    fn missing_title_stays_empty() {
        let raw = RawEventRecord {
            title: None,
            ..sample_record()
        };
        assert_eq!(normalize_record(&raw).title, "");
    }

    #[test]
    fn batch_preserves_order() {
        let mut second = sample_record();
        second.title = Some("Retro".to_string());

        let events = normalize_records(&[sample_record(), second]);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Team Standup");
        assert_eq!(events[1].title, "Retro");
    }
}
