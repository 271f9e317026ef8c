//! Append-only sync log
//!
//! Every record is written with its own open/write/close cycle, so a viewer
//! tailing the file sees events as they happen and no handle outlives a call.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::{Error, Result};

/// Timestamp layout used in the completion banner.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One event in the sync log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogRecord {
    Copied { source: PathBuf, replica: PathBuf },
    Deleted { replica: PathBuf },
    PassCompleted { at: NaiveDateTime },
}

impl LogRecord {
    /// Completion record stamped with the current local time.
    pub fn pass_completed_now() -> Self {
        Self::PassCompleted {
            at: Local::now().naive_local(),
        }
    }

    /// The exact text appended to the log, newline terminated.
    pub fn render(&self) -> String {
        match self {
            Self::PassCompleted { .. } => format!("{self}\n\n"),
            _ => format!("{self}\n"),
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied { source, replica } => {
                write!(f, "Copied {} to {}", source.display(), replica.display())
            }
            Self::Deleted { replica } => write!(f, "Deleted {}", replica.display()),
            Self::PassCompleted { at } => {
                write!(f, "--- Sync completed at {} ---", at.format(TIMESTAMP_FORMAT))
            }
        }
    }
}

/// Handle to the sync log file. Holds only the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncLog {
    path: PathBuf,
}

impl SyncLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file if needed.
    pub fn append(&self, record: &LogRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.unwritable(source))?;

        file.write_all(record.render().as_bytes())
            .map_err(|source| self.unwritable(source))
    }

    /// Append the completion banner for a pass.
    pub fn finalize(&self) -> Result<()> {
        self.append(&LogRecord::pass_completed_now())
    }

    /// Append a record, absorbing any failure into a diagnostic event.
    pub fn record(&self, record: &LogRecord) -> Option<Error> {
        match self.append(record) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Dropping sync log record");
                Some(e)
            }
        }
    }

    fn unwritable(&self, source: std::io::Error) -> Error {
        Error::LogUnwritable {
            path: self.path.clone(),
            source,
        }
    }
}
