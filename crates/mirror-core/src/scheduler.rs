//! Pass scheduling
//!
//! A [`Scheduler`] owns one mirror configuration and drives passes: once,
//! while a caller-supplied condition holds, or forever.

use std::thread;

use mirror_fs::{PathPair, SyncLog};

use crate::config::SyncConfig;
use crate::sync::{PassReport, TreeSynchronizer};

/// Runs sync passes for one source/replica pair.
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: SyncConfig,
    log: SyncLog,
    root: PathPair,
}

impl Scheduler {
    pub fn new(config: SyncConfig) -> Self {
        let log = SyncLog::new(&config.log_file);
        let root = PathPair::new(&config.source, &config.replica);
        Self { config, log, root }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Run one full pass and append its completion banner.
    pub fn run_pass(&self) -> PassReport {
        let mut report = TreeSynchronizer::new(&self.log, self.config.prune_mode).sync(&self.root);
        if let Err(e) = self.log.finalize() {
            tracing::warn!(error = %e, "Dropping completion banner");
            report.skip(e);
        }
        tracing::info!(
            copied = report.copied,
            deleted = report.deleted,
            skipped = report.skip_count(),
            "Pass completed"
        );
        report
    }

    /// Run passes separated by the configured interval for as long as
    /// `keep_going` accepts the latest report. Returns the number of passes.
    ///
    /// The first pass always runs; no sleep follows the last one.
    pub fn run_while<F>(&self, mut keep_going: F) -> usize
    where
        F: FnMut(&PassReport) -> bool,
    {
        let mut passes = 0;
        loop {
            let report = self.run_pass();
            passes += 1;
            if !keep_going(&report) {
                return passes;
            }
            thread::sleep(self.config.interval);
        }
    }

    /// Run passes separated by the configured interval until the process is
    /// terminated. A zero interval runs passes back to back.
    pub fn run_forever(&self) -> ! {
        loop {
            self.run_pass();
            thread::sleep(self.config.interval);
        }
    }
}
