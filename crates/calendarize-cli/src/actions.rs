//! Export actions: print or open deep links, download ICS files.

use std::path::Path;

use tracing::info;

use calendarize_core::{CalendarEvent, google_calendar_url, ics_download, outlook_url};

use crate::download::deliver_ics;
use crate::error::{ClientError, ClientResult};

/// Prints or opens the Google Calendar deep link for the event.
pub fn export_google(event: &CalendarEvent, open_link: bool) -> ClientResult<()> {
    let url = google_calendar_url(event)?;
    emit_link("google", &url, open_link)
}

/// Prints or opens the Outlook deep link for the event.
pub fn export_outlook(event: &CalendarEvent, open_link: bool) -> ClientResult<()> {
    let url = outlook_url(event)?;
    emit_link("outlook", &url, open_link)
}

/// Downloads the event's ICS file into `out_dir`, optionally opening it.
pub fn export_ics(event: &CalendarEvent, out_dir: &Path, open_file: bool) -> ClientResult<()> {
    let download = ics_download(event)?;
    let path = deliver_ics(&download, out_dir, |staged| {
        if open_file {
            open::that(staged)
                .map_err(|e| ClientError::Action(format!("failed to open ICS file: {}", e)))?;
        }
        Ok(())
    })?;
    println!("{}", path.display());
    Ok(())
}

fn emit_link(kind: &str, url: &str, open_link: bool) -> ClientResult<()> {
    if open_link {
        info!(kind = kind, url = %url, "opening export link");
        open::that(url).map_err(|e| ClientError::Action(format!("failed to open URL: {}", e)))?;
    }
    println!("{}", url);
    Ok(())
}

/// Prints the available deep links for a converted event, best-effort.
///
/// Conversion output lists several events; one record with broken dates
/// should not hide the links of the others, so failures are reported
/// inline instead of propagated.
pub fn print_links(event: &CalendarEvent) {
    match google_calendar_url(event) {
        Ok(url) => println!("  google:  {}", url),
        Err(e) => println!("  google:  unavailable ({})", e),
    }
    match outlook_url(event) {
        Ok(url) => println!("  outlook: {}", url),
        Err(e) => println!("  outlook: unavailable ({})", e),
    }
}

/// Prints a one-screen summary of a converted event.
pub fn print_summary(event: &CalendarEvent) {
    let title = if event.title.is_empty() {
        "(untitled event)"
    } else {
        &event.title
    };
    println!("{}", title);
    println!("  start: {}", event.start_time.raw());
    println!("  end:   {}", event.end_time.raw());
    if !event.time_zone.is_empty() {
        println!("  zone:  {}", event.time_zone);
    }
    if let Some(ref location) = event.location {
        println!("  where: {}", location);
    }
    if !event.attendees.is_empty() {
        println!("  who:   {}", event.attendees.join(", "));
    }
    if !event.description.is_empty() {
        println!("  notes: {}", event.description);
    }
}
