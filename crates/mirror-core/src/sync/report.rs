//! Pass report model

use std::collections::BTreeMap;
use std::fmt;

use mirror_fs::{Error as FsError, SkipKind};

/// Counters and absorbed failures of one sync pass.
#[derive(Debug, Default)]
pub struct PassReport {
    /// Files whose copy completed
    pub copied: u64,
    /// Bytes written by completed copies
    pub bytes_copied: u64,
    /// Stale replica entries removed
    pub deleted: u64,
    /// Replica directories created, the root included
    pub directories_created: u64,
    /// Every failure skipped over during the pass, in encounter order
    pub skipped: Vec<FsError>,
}

impl PassReport {
    /// Whether the pass ran without skipping anything.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Number of skipped operations.
    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }

    /// Skipped operations grouped by kind.
    pub fn skips_by_kind(&self) -> BTreeMap<SkipKind, usize> {
        let mut counts = BTreeMap::new();
        for error in &self.skipped {
            *counts.entry(error.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} copied={} bytes={} deleted={} dirs_created={} skipped={}",
            self.copied,
            self.bytes_copied,
            self.deleted,
            self.directories_created,
            self.skip_count()
        )
    }

    pub(crate) fn skip(&mut self, error: FsError) {
        tracing::warn!(kind = ?error.kind(), error = %error, "Skipped");
        self.skipped.push(error);
    }
}

impl fmt::Display for PassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[SYNC]"))
    }
}
