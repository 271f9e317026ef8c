//! Mirror configuration and argument parsing helpers

use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use mirror_fs::PruneMode;

use crate::{Error, Result};

/// Everything one mirror needs to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Directory tree to read from
    pub source: PathBuf,
    /// Directory tree to make identical to `source`
    pub replica: PathBuf,
    /// Pause between the end of one pass and the start of the next
    pub interval: Duration,
    /// Append-only sync log
    pub log_file: PathBuf,
    /// How stale replica directories are removed
    pub prune_mode: PruneMode,
}

impl SyncConfig {
    pub fn new(
        source: impl Into<PathBuf>,
        replica: impl Into<PathBuf>,
        interval: Duration,
        log_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source: source.into(),
            replica: replica.into(),
            interval,
            log_file: log_file.into(),
            prune_mode: PruneMode::default(),
        }
    }

    pub fn with_prune_mode(mut self, prune_mode: PruneMode) -> Self {
        self.prune_mode = prune_mode;
        self
    }

    /// Check the configuration before the first pass.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] if a path is empty
    /// - [`Error::Overlap`] if one root contains the other
    /// - [`Error::LogInsideReplica`] if the log would be pruned as stale
    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("source", &self.source),
            ("replica", &self.replica),
            ("log file", &self.log_file),
        ] {
            if path.as_os_str().is_empty() {
                return Err(Error::InvalidConfig {
                    message: format!("{name} path is empty"),
                });
            }
        }

        let source = lexical_absolute(&self.source)?;
        let replica = lexical_absolute(&self.replica)?;
        if source.starts_with(&replica) || replica.starts_with(&source) {
            return Err(Error::Overlap {
                source_dir: self.source.clone(),
                replica_dir: self.replica.clone(),
            });
        }

        let log_file = lexical_absolute(&self.log_file)?;
        if log_file.starts_with(&replica) {
            return Err(Error::LogInsideReplica {
                log_file: self.log_file.clone(),
                replica_dir: self.replica.clone(),
            });
        }

        Ok(())
    }
}

/// Parse an interval in seconds the way C `atoi` does.
///
/// Leading whitespace and an optional sign are accepted, then decimal digits
/// up to the first non-digit. Input without leading digits yields 0, as do
/// negative values. Values too large for `u64` saturate.
pub fn parse_interval(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        });

    if negative { 0 } else { value }
}

/// Absolute form of `path` with `.` and `..` resolved without touching the
/// filesystem, so roots that do not exist yet can still be compared.
fn lexical_absolute(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
