//! ICS download delivery with scoped resource management.
//!
//! Offering an ICS payload "for download" means materializing it as a
//! temporary resource, letting a completion hook act on it (open it, hand
//! it to another program), and then either persisting it under its final
//! name or discarding it. The temporary file is released exactly once on
//! every path: persisting consumes it, and any error (from writing or from
//! the hook) drops it, which removes the file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use calendarize_core::IcsDownload;

use crate::error::{ClientError, ClientResult};

/// Writes the ICS payload into `out_dir` under its suggested filename.
///
/// The payload is staged in a temporary file first; `on_ready` runs against
/// the staged copy before anything appears under the final name. If the
/// hook fails, the staged file is removed and nothing is left behind.
///
/// An existing file under the suggested name is never overwritten. A
/// numeric suffix is appended instead, the way browsers name repeated
/// downloads, so a batch of same-title events yields one file per event.
pub fn deliver_ics<F>(download: &IcsDownload, out_dir: &Path, on_ready: F) -> ClientResult<PathBuf>
where
    F: FnOnce(&Path) -> ClientResult<()>,
{
    let mut staged = NamedTempFile::new_in(out_dir)?;
    staged.write_all(download.payload.as_bytes())?;
    staged.flush()?;
    debug!(path = %staged.path().display(), "staged ICS payload");

    // Hook failure drops `staged`, removing the temp file.
    on_ready(staged.path())?;

    let final_path = unique_path(out_dir, &download.filename);
    staged
        .persist(&final_path)
        .map_err(|e| ClientError::Action(format!("failed to persist ICS file: {}", e)))?;

    info!(path = %final_path.display(), "ICS file written");
    Ok(final_path)
}

/// Picks a path under `out_dir` that does not collide with an existing
/// file: `name.ics`, then `name-1.ics`, `name-2.ics`, and so on.
fn unique_path(out_dir: &Path, filename: &str) -> PathBuf {
    let candidate = out_dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (filename, None),
    };
    let mut counter = 1;
    loop {
        let numbered = match ext {
            Some(ext) => format!("{}-{}.{}", stem, counter, ext),
            None => format!("{}-{}", stem, counter),
        };
        let candidate = out_dir.join(numbered);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
