// SPDX-License-Identifier: MPL-2.0
//! Export functionality for session activity logs.
//!
//! Writes the recorded session as pretty-printed JSON, with each event
//! stamped with its elapsed time since the session started.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use crate::activity::events::ActivityKind;
use crate::activity::log::ActivityLog;

/// Filename prefix for exported session logs.
pub const EXPORT_FILE_PREFIX: &str = "carte-activity";

/// Errors that can occur during activity log export.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error during file operations.
    Io(io::Error),
    /// JSON serialization error.
    Serialization(serde_json::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

/// One event as it appears in the exported document.
#[derive(Debug, Serialize)]
struct RecordedEvent<'a> {
    /// Milliseconds since the session started.
    elapsed_ms: u64,
    #[serde(flatten)]
    kind: &'a ActivityKind,
}

/// The exported document.
#[derive(Debug, Serialize)]
struct SessionReport<'a> {
    exported_at: String,
    event_count: usize,
    events: Vec<RecordedEvent<'a>>,
}

/// Renders the session log as a pretty-printed JSON document.
pub fn render_json(log: &ActivityLog) -> Result<String, ExportError> {
    let events = log
        .events()
        .map(|event| {
            // Events never predate the log; saturate rather than panic if
            // the clock source misbehaves.
            let elapsed = event.timestamp.saturating_duration_since(log.started());
            RecordedEvent {
                elapsed_ms: elapsed.as_millis() as u64,
                kind: &event.kind,
            }
        })
        .collect();

    let report = SessionReport {
        exported_at: Local::now().to_rfc3339(),
        event_count: log.len(),
        events,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Writes the session log into `dir` under a timestamped filename.
///
/// The directory is created if missing. Returns the path written.
pub fn export_to_dir(log: &ActivityLog, dir: &Path) -> Result<PathBuf, ExportError> {
    let content = render_json(log)?;
    fs::create_dir_all(dir)?;

    let filename = format!(
        "{EXPORT_FILE_PREFIX}-{}.json",
        Local::now().format("%Y%m%d-%H%M%S")
    );
    let path = dir.join(filename);
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::events::UserAction;
    use tempfile::tempdir;

    fn sample_log() -> ActivityLog {
        let mut log = ActivityLog::default();
        log.record_action(UserAction::StepNext);
        log.record_transition(0, 1);
        log.record_action_with_details(UserAction::SelectTab { index: 3 }, "curacao-mojito");
        log
    }

    #[test]
    fn render_json_includes_all_events() {
        let json = render_json(&sample_log()).expect("render should succeed");

        assert!(json.contains("\"event_count\": 3"));
        assert!(json.contains("\"type\": \"user_action\""));
        assert!(json.contains("\"type\": \"transition\""));
        assert!(json.contains("\"details\": \"curacao-mojito\""));
        assert!(json.contains("elapsed_ms"));
    }

    #[test]
    fn render_json_of_an_empty_log() {
        let json = render_json(&ActivityLog::default()).expect("render should succeed");
        assert!(json.contains("\"event_count\": 0"));
        assert!(json.contains("\"events\": []"));
    }

    #[test]
    fn export_writes_a_timestamped_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let path = export_to_dir(&sample_log(), temp_dir.path()).expect("export should succeed");

        assert!(path.exists());
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .expect("exported file has a name");
        assert!(filename.starts_with(EXPORT_FILE_PREFIX));
        assert!(filename.ends_with(".json"));

        let content = fs::read_to_string(&path).expect("exported file is readable");
        assert!(content.contains("exported_at"));
    }

    #[test]
    fn export_creates_the_target_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("logs").join("sessions");

        let path = export_to_dir(&sample_log(), &nested).expect("export should succeed");
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn export_error_display_names_the_cause() {
        let err = ExportError::Io(io::Error::other("disk full"));
        assert!(format!("{err}").contains("disk full"));
    }
}
