//! Core types: events, timestamps, ICS synthesis, export artifact builders

pub mod error;
pub mod event;
pub mod export;
pub mod ics;
pub mod session;
pub mod time;
pub mod tracing;

pub use error::{ExportError, ExportResult};
pub use event::CalendarEvent;
pub use export::{ExportTarget, IcsDownload, google_calendar_url, ics_download, outlook_url};
pub use ics::{download_filename, escape_text, normalize_crlf};
pub use session::ExportSession;
pub use time::EventStamp;
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
