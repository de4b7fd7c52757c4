//! Export session: the conversion-cycle event store.
//!
//! A conversion produces one batch of events whose lifetime is exactly one
//! render cycle: created when the service responds, superseded by the next
//! conversion, cleared on success or explicit dismissal. The batch lives in
//! an [`ExportSession`] passed into the export flow, so the lifecycle stays
//! explicit rather than leaking through ambient globals.

use tracing::debug;

use crate::event::CalendarEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SessionState {
    events: Vec<CalendarEvent>,
    selected: usize,
}

/// Holds the events of the current conversion cycle.
///
/// Single-threaded by design: export actions run synchronously inside the
/// caller's event handling, so no interior locking is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSession {
    state: Option<SessionState>,
}

impl ExportSession {
    /// Creates an empty session with no active conversion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new conversion cycle, superseding any previous one.
    ///
    /// The first event is selected. An empty batch leaves the session
    /// inactive.
    pub fn begin(&mut self, events: Vec<CalendarEvent>) {
        if events.is_empty() {
            debug!("conversion returned no events, clearing session");
            self.state = None;
            return;
        }
        debug!(count = events.len(), "starting export session");
        self.state = Some(SessionState {
            events,
            selected: 0,
        });
    }

    /// Returns `true` while a conversion cycle is active.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Returns the currently selected event, if any.
    pub fn current(&self) -> Option<&CalendarEvent> {
        self.state.as_ref().map(|s| &s.events[s.selected])
    }

    /// Returns all events of the current cycle.
    pub fn events(&self) -> &[CalendarEvent] {
        self.state.as_ref().map_or(&[], |s| s.events.as_slice())
    }

    /// Selects the event at `index` for export.
    ///
    /// Returns `false` (leaving the selection unchanged) when the index is
    /// out of range or no cycle is active.
    pub fn select(&mut self, index: usize) -> bool {
        match self.state {
            Some(ref mut s) if index < s.events.len() => {
                s.selected = index;
                true
            }
            _ => false,
        }
    }

    /// Ends the cycle: called after a successful export or an explicit
    /// dismissal.
    pub fn clear(&mut self) {
        if self.state.take().is_some() {
            debug!("export session cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::EventStamp;

    fn event(title: &str) -> CalendarEvent {
        CalendarEvent::new(
            title,
            EventStamp::parse("2024-03-15T09:00:00Z"),
            EventStamp::parse("2024-03-15T10:00:00Z"),
        )
    }

    #[test]
    fn starts_inactive() {
        let session = ExportSession::new();
        assert!(!session.is_active());
        assert!(session.current().is_none());
        assert!(session.events().is_empty());
    }

    #[test]
    fn begin_selects_first_event() {
        let mut session = ExportSession::new();
        session.begin(vec![event("First"), event("Second")]);

        assert!(session.is_active());
        assert_eq!(session.current().unwrap().title, "First");
        assert_eq!(session.events().len(), 2);
    }

    #[test]
    fn empty_batch_clears() {
        let mut session = ExportSession::new();
        session.begin(vec![event("First")]);
        session.begin(Vec::new());
        assert!(!session.is_active());
    }

    #[test]
    fn select_switches_event() {
        let mut session = ExportSession::new();
        session.begin(vec![event("First"), event("Second")]);

        assert!(session.select(1));
        assert_eq!(session.current().unwrap().title, "Second");

        // Out of range leaves the selection alone
        assert!(!session.select(5));
        assert_eq!(session.current().unwrap().title, "Second");
    }

    #[test]
    fn select_on_inactive_session_fails() {
        let mut session = ExportSession::new();
        assert!(!session.select(0));
    }

    #[test]
    fn new_conversion_supersedes_previous() {
        let mut session = ExportSession::new();
        session.begin(vec![event("Old")]);
        session.begin(vec![event("New")]);
        assert_eq!(session.current().unwrap().title, "New");
        assert_eq!(session.events().len(), 1);
    }

    #[test]
    fn clear_ends_cycle() {
        let mut session = ExportSession::new();
        session.begin(vec![event("First")]);
        session.clear();
        assert!(!session.is_active());
        assert!(session.current().is_none());

        // Clearing twice is harmless
        session.clear();
        assert!(!session.is_active());
    }
}
