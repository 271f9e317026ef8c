//! Directory entries and the source/replica path pairs built from them

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{REPLICA_DIR_MODE, SELF_AND_PARENT};
use crate::{Error, Result};

/// A source path and the replica path that mirrors it.
///
/// Both sides are always extended with the same entry name, so the two
/// trees stay structurally congruent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPair {
    pub source: PathBuf,
    pub replica: PathBuf,
}

impl PathPair {
    pub fn new(source: impl Into<PathBuf>, replica: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            replica: replica.into(),
        }
    }

    /// Pair for the entry `name` inside this pair's directories.
    pub fn child(&self, name: &OsStr) -> Self {
        Self {
            source: self.source.join(name),
            replica: self.replica.join(name),
        }
    }
}

/// How the traversal treats an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Anything that is not a directory, copied byte for byte
    File,
}

/// Whether `name` is tree content (anything but `.` and `..`).
pub fn is_tree_entry(name: &OsStr) -> bool {
    !SELF_AND_PARENT.iter().any(|special| name == OsStr::new(special))
}

/// List the entry names of `dir`, sorted, with the listing handle closed
/// before returning.
pub fn list_entry_names(dir: &Path) -> Result<Vec<OsString>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => {
                let name = entry.file_name();
                if is_tree_entry(&name) {
                    names.push(name);
                }
            }
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "Skipping unreadable directory entry");
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Classify `path` by a status lookup that follows symbolic links.
pub fn classify(path: &Path) -> Result<EntryKind> {
    let metadata = fs::metadata(path).map_err(|source| Error::EntryUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        Ok(EntryKind::Directory)
    } else {
        Ok(EntryKind::File)
    }
}

/// Create the replica directory at `path` if it is missing.
///
/// Returns `true` when a directory was created, `false` when something
/// already existed at `path`.
pub fn create_replica_dir(path: &Path) -> Result<bool> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(REPLICA_DIR_MODE);
    }
    #[cfg(not(unix))]
    let _ = REPLICA_DIR_MODE;

    match builder.create(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(source) => Err(Error::DirectoryUncreatable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Create the replica root and any missing parents.
pub fn create_replica_root(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(REPLICA_DIR_MODE);
    }

    builder
        .create(path)
        .map(|()| true)
        .map_err(|source| Error::DirectoryUncreatable {
            path: path.to_path_buf(),
            source,
        })
}
