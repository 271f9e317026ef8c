//! Core orchestration layer for folder mirroring
//!
//! This crate composes the `mirror-fs` primitives into:
//!
//! - **TreeSynchronizer**: one full source-to-replica reconciliation pass
//! - **PassReport**: counters and absorbed failures of a pass
//! - **SyncConfig**: validated roots, interval, log file and prune mode
//! - **Scheduler**: run-once and run-repeatedly drivers
//!
//! # Architecture
//!
//! ```text
//!        mirror-cli
//!            |
//!       mirror-core   (Scheduler -> TreeSynchronizer)
//!            |
//!        mirror-fs    (copy_file, prune_level, SyncLog)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use mirror_core::{Scheduler, SyncConfig};
//!
//! let config = SyncConfig::new("data", "backup", Duration::from_secs(60), "sync.log");
//! config.validate().unwrap();
//! let report = Scheduler::new(config).run_pass();
//! println!("{report}");
//! ```

pub mod config;
pub mod error;
pub mod scheduler;
pub mod sync;

pub use config::{SyncConfig, parse_interval};
pub use error::{Error, Result};
pub use mirror_fs::PruneMode;
pub use scheduler::Scheduler;
pub use sync::{PassReport, TreeSynchronizer};
