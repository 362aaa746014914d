//! JSONL logger: append-only line-delimited JSON for agent-friendly log
//! consumption.
//!
//! Each line is a self-contained JSON object. Lines are assembled in memory
//! and written with a single `write_all` to prevent interleaved partial lines
//! when the file is being tailed by another process.
//!
//! Three-level fallback chain:
//! 1. Primary file path
//! 2. stderr with `[NBC-JSONL]` prefix
//! 3. Silent discard (the shell must never crash for logging failures)

#![allow(missing_docs)]

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Severity level for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Event types matching the console shell activity model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    SessionStart,
    SessionStop,
    DisplayModeChange,
    SnapshotDegraded,
    SnapshotRecovered,
    ConfigLoaded,
    Error,
}

/// A single JSONL log entry; `ts`, `event`, `severity` always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 UTC timestamp.
    pub ts: String,
    /// Event type identifier.
    pub event: EventType,
    /// Severity level.
    pub severity: Severity,
    /// Display mode selected for the frame (when applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Route active at the time of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Project ref active at the time of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_ref: Option<String>,
    /// Free-form human-readable detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// NBC error code, for `Error` events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl LogEntry {
    /// New entry stamped with the current UTC time.
    #[must_use]
    pub fn new(event: EventType, severity: Severity) -> Self {
        Self {
            ts: Utc::now().to_rfc3339(),
            event,
            severity,
            mode: None,
            route: None,
            project_ref: None,
            detail: None,
            error_code: None,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    #[must_use]
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    #[must_use]
    pub fn with_project_ref(mut self, project_ref: impl Into<String>) -> Self {
        self.project_ref = Some(project_ref.into());
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Sink currently in use, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    Primary,
    Stderr,
    Discard,
}

/// Append-only JSONL logger with a degradation chain.
#[derive(Debug)]
pub struct JsonlLogger {
    path: PathBuf,
    sink: LogSink,
}

impl JsonlLogger {
    /// Logger targeting `path`. The file is created lazily on first write.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sink: LogSink::Primary,
        }
    }

    /// Sink currently in use.
    #[must_use]
    pub const fn sink(&self) -> LogSink {
        self.sink
    }

    /// Append one entry. Never returns an error: failures degrade the sink.
    pub fn log(&mut self, entry: &LogEntry) {
        let Ok(mut line) = serde_json::to_string(entry) else {
            // Serialization of our own types failing is a programming error,
            // but the logging contract is still "never crash".
            return;
        };
        line.push('\n');

        if self.sink == LogSink::Primary && !self.write_primary(line.as_bytes()) {
            self.sink = LogSink::Stderr;
        }
        if self.sink == LogSink::Stderr {
            let mut stderr = std::io::stderr().lock();
            if stderr
                .write_all(format!("[NBC-JSONL] {line}").as_bytes())
                .is_err()
            {
                self.sink = LogSink::Discard;
            }
        }
    }

    fn write_primary(&self, line: &[u8]) -> bool {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
                return false;
            }
        }
        let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path)
        else {
            return false;
        };
        file.write_all(line).is_ok()
    }
}
