//! TreeSynchronizer implementation
//!
//! Walks the source tree depth-first with an explicit stack. Each directory
//! is listed once up front; its entries are then handled in name order,
//! descending into subdirectories before moving to the next sibling. When a
//! directory's entries are exhausted, the matching replica directory is
//! pruned, so pruning always sees the finished state of that level.

use std::ffi::OsString;
use std::vec;

use mirror_fs::entry::{create_replica_dir, create_replica_root};
use mirror_fs::{
    EntryKind, PathPair, PruneMode, SyncLog, classify, copy_file, list_entry_names, prune_level,
};

use super::report::PassReport;

/// One directory pair being processed.
struct Frame {
    pair: PathPair,
    pending: vec::IntoIter<OsString>,
    /// False when the source exists but could not be listed
    prune: bool,
}

/// Reconciles a replica tree with its source tree.
///
/// A pass never fails as a whole: every error is absorbed at the entry it
/// concerns and recorded in the returned [`PassReport`].
pub struct TreeSynchronizer<'a> {
    log: &'a SyncLog,
    prune_mode: PruneMode,
}

impl<'a> TreeSynchronizer<'a> {
    pub fn new(log: &'a SyncLog, prune_mode: PruneMode) -> Self {
        Self { log, prune_mode }
    }

    /// Make `root.replica` mirror `root.source`.
    ///
    /// - every source file is copied, changed or not
    /// - missing replica directories are created before descending
    /// - replica entries without a source counterpart are removed
    ///
    /// A source directory that does not exist contributes no copies, and its
    /// replica level is pruned against it. A source directory that exists but
    /// cannot be listed is skipped as a whole subtree: nothing under its
    /// replica is copied or deleted.
    pub fn sync(&self, root: &PathPair) -> PassReport {
        let mut report = PassReport::default();
        tracing::debug!(source = %root.source.display(), replica = %root.replica.display(), "Starting pass");

        match create_replica_root(&root.replica) {
            Ok(true) => report.directories_created += 1,
            Ok(false) => {}
            Err(e) => report.skip(e),
        }

        let mut stack = vec![self.open(root.clone(), &mut report)];

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let Some(name) = frame.pending.next() else {
                if let Some(done) = stack.pop().filter(|done| done.prune) {
                    self.prune(&done.pair, &mut report);
                }
                continue;
            };
            let child = frame.pair.child(&name);

            match classify(&child.source) {
                Ok(EntryKind::Directory) => {
                    match create_replica_dir(&child.replica) {
                        Ok(true) => {
                            tracing::debug!(replica = %child.replica.display(), "Created directory");
                            report.directories_created += 1;
                        }
                        Ok(false) => {}
                        Err(e) => report.skip(e),
                    }
                    stack.push(self.open(child, &mut report));
                }
                Ok(EntryKind::File) => self.copy(&child, &mut report),
                Err(e) => report.skip(e),
            }
        }

        report
    }

    fn open(&self, pair: PathPair, report: &mut PassReport) -> Frame {
        let (names, prune) = match list_entry_names(&pair.source) {
            Ok(names) => (names, true),
            Err(e) => {
                let prune = e.is_missing_directory();
                report.skip(e);
                (Vec::new(), prune)
            }
        };
        Frame {
            pair,
            pending: names.into_iter(),
            prune,
        }
    }

    fn copy(&self, pair: &PathPair, report: &mut PassReport) {
        match copy_file(pair, self.log) {
            Ok(attempt) => {
                if let Some(bytes) = attempt.bytes() {
                    report.copied += 1;
                    report.bytes_copied += bytes;
                }
                for e in attempt.into_errors() {
                    report.skip(e);
                }
            }
            Err(e) => report.skip(e),
        }
    }

    fn prune(&self, pair: &PathPair, report: &mut PassReport) {
        match prune_level(pair, self.log, self.prune_mode) {
            Ok(stats) => {
                report.deleted += stats.deleted;
                for e in stats.failures {
                    report.skip(e);
                }
            }
            Err(e) => report.skip(e),
        }
    }
}
