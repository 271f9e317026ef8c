//! Error types for mirror-core

use std::path::PathBuf;

/// Result type for mirror-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a mirror from being set up.
///
/// Failures inside a pass never surface here; they are absorbed into the
/// pass report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration value is unusable
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// One root lies inside the other (or they are the same directory)
    #[error("Source and replica overlap: {source_dir} <-> {replica_dir}")]
    Overlap {
        source_dir: PathBuf,
        replica_dir: PathBuf,
    },

    /// The log file would be pruned from the replica every pass
    #[error("Log file {log_file} must not live inside the replica {replica_dir}")]
    LogInsideReplica {
        log_file: PathBuf,
        replica_dir: PathBuf,
    },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
