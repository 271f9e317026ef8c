//! Error types for mirror-fs

use std::path::{Path, PathBuf};

/// Result type for mirror-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while mirroring one entry.
///
/// None of these are fatal to a pass: the caller records the error and
/// moves on to the next entry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A directory could not be opened or listed
    #[error("Cannot read directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Status lookup on a directory entry failed
    #[error("Cannot inspect {path}: {source}")]
    EntryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file could not be opened or read
    #[error("Cannot read source file {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Replica file could not be opened for writing
    #[error("Cannot open replica file {path}: {source}")]
    FileUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A chunk was not fully written to the replica file
    #[error("Short write to {path}: wrote {written} of {expected} bytes")]
    ShortWrite {
        path: PathBuf,
        expected: usize,
        written: usize,
        /// The write error, when the chunk failed outright
        #[source]
        cause: Option<std::io::Error>,
    },

    /// Replica directory could not be created
    #[error("Cannot create replica directory {path}: {source}")]
    DirectoryUncreatable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stale replica entry could not be removed
    #[error("Cannot delete {path}: {source}")]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Sync log could not be opened or appended to
    #[error("Cannot append to log {path}: {source}")]
    LogUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fieldless classification of [`Error`], for counting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipKind {
    DirectoryUnreadable,
    EntryUnreadable,
    FileUnreadable,
    FileUnwritable,
    ShortWrite,
    DirectoryUncreatable,
    DeleteFailed,
    LogUnwritable,
}

impl Error {
    /// The kind of skip this error represents.
    pub fn kind(&self) -> SkipKind {
        match self {
            Self::DirectoryUnreadable { .. } => SkipKind::DirectoryUnreadable,
            Self::EntryUnreadable { .. } => SkipKind::EntryUnreadable,
            Self::FileUnreadable { .. } => SkipKind::FileUnreadable,
            Self::FileUnwritable { .. } => SkipKind::FileUnwritable,
            Self::ShortWrite { .. } => SkipKind::ShortWrite,
            Self::DirectoryUncreatable { .. } => SkipKind::DirectoryUncreatable,
            Self::DeleteFailed { .. } => SkipKind::DeleteFailed,
            Self::LogUnwritable { .. } => SkipKind::LogUnwritable,
        }
    }

    /// True when a directory listing failed because nothing exists there.
    pub fn is_missing_directory(&self) -> bool {
        matches!(
            self,
            Self::DirectoryUnreadable { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// The path the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryUnreadable { path, .. }
            | Self::EntryUnreadable { path, .. }
            | Self::FileUnreadable { path, .. }
            | Self::FileUnwritable { path, .. }
            | Self::ShortWrite { path, .. }
            | Self::DirectoryUncreatable { path, .. }
            | Self::DeleteFailed { path, .. }
            | Self::LogUnwritable { path, .. } => path,
        }
    }
}
