//! Filesystem primitives for folder mirroring
//!
//! Every operation here acts on one path pair or one directory level and
//! reports failures as [`Error`] values instead of aborting. Composing them
//! into a full tree pass is the job of `mirror-core`.

pub mod constants;
pub mod copy;
pub mod entry;
pub mod error;
pub mod log;
pub mod prune;

pub use copy::{CopyAttempt, copy_file};
pub use entry::{EntryKind, PathPair, classify, is_tree_entry, list_entry_names};
pub use error::{Error, Result, SkipKind};
pub use log::{LogRecord, SyncLog};
pub use prune::{PruneMode, PruneStats, prune_level};
