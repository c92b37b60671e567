//! Append-only event log for analytics and contact leads.
//!
//! The presentation layer appends records here; the core never reads the
//! file back. The header is written only when the file is created fresh,
//! so repeated runs keep appending to the same log.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// One logged event: a name plus a free-form payload string.
#[derive(Debug, Clone)]
pub struct EventRecord {
    /// Unix seconds when the event occurred.
    pub timestamp_unix: u64,
    /// Event name, e.g. `"estimator_submit"` or `"result_export"`.
    pub event: String,
    /// Free-form payload (key=value pairs, message text, ...).
    pub payload: String,
}

const HEADER: &[&str] = &["timestamp_unix", "event", "payload"];

/// Appends one event record to the CSV log at `path`.
///
/// Creates the file with a header row if it does not exist yet.
///
/// # Errors
///
/// Returns an `io::Error` if the file cannot be opened or written. Callers
/// that treat the log as best-effort analytics should log and continue; a
/// logging failure must never abort the run.
pub fn append_event(path: &Path, record: &EventRecord) -> io::Result<()> {
    let is_new = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if is_new {
        wtr.write_record(HEADER)?;
    }
    wtr.write_record(&[
        record.timestamp_unix.to_string(),
        record.event.clone(),
        record.payload.clone(),
    ])?;
    wtr.flush()
}
