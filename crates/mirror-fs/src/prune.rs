//! Removal of stale replica entries, one directory level at a time

use std::fs;
use std::io;
use std::path::Path;

use crate::entry::{PathPair, list_entry_names};
use crate::log::{LogRecord, SyncLog};
use crate::{Error, Result};

/// How a stale replica directory is removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PruneMode {
    /// Single-entry removal: non-empty directories fail and stay in place.
    #[default]
    SingleEntry,
    /// Remove stale directories together with everything below them.
    Recursive,
}

/// Outcome of pruning one directory level.
#[derive(Debug, Default)]
pub struct PruneStats {
    /// Entries removed (and logged)
    pub deleted: u64,
    /// Removals and log appends that failed
    pub failures: Vec<Error>,
}

/// Delete every entry of `pair.replica` whose counterpart under
/// `pair.source` does not exist.
///
/// Only the immediate entries of `pair.replica` are scanned. The source side
/// is checked for existence only. Each successful removal appends a
/// `Deleted` record; failed removals are collected and not logged.
///
/// Returns an error only when the replica directory itself cannot be listed,
/// in which case there is nothing to prune.
pub fn prune_level(pair: &PathPair, log: &SyncLog, mode: PruneMode) -> Result<PruneStats> {
    let names = list_entry_names(&pair.replica)?;
    let mut stats = PruneStats::default();

    for name in names {
        let child = pair.child(&name);
        if child.source.exists() {
            continue;
        }

        match remove_entry(&child.replica, mode) {
            Ok(()) => {
                tracing::debug!(replica = %child.replica.display(), "Deleted stale entry");
                stats.deleted += 1;
                if let Some(e) = log.record(&LogRecord::Deleted {
                    replica: child.replica,
                }) {
                    stats.failures.push(e);
                }
            }
            Err(source) => {
                let error = Error::DeleteFailed {
                    path: child.replica,
                    source,
                };
                tracing::warn!(error = %error, "Stale entry left in replica");
                stats.failures.push(error);
            }
        }
    }

    Ok(stats)
}

fn remove_entry(path: &Path, mode: PruneMode) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if !metadata.is_dir() {
        return fs::remove_file(path);
    }
    match mode {
        PruneMode::SingleEntry => fs::remove_dir(path),
        PruneMode::Recursive => fs::remove_dir_all(path),
    }
}
