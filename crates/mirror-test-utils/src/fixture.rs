//! [`MirrorFixture`] builder for mirroring test scenarios.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding `source/`, `replica/` and `sync.log`.
///
/// Relative paths given to the helpers use `/` separators and are resolved
/// under the matching root.
///
/// # Example
///
/// ```rust,no_run
/// use mirror_test_utils::MirrorFixture;
///
/// let fx = MirrorFixture::new();
/// fx.write_source("sub/b.txt", "yo");
/// fx.write_replica("stale.txt", "old");
/// // ... run a pass ...
/// fx.assert_replica_contains("sub/b.txt", "yo");
/// ```
pub struct MirrorFixture {
    temp_dir: TempDir,
}

impl Default for MirrorFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl MirrorFixture {
    /// Create the temporary directory with an empty `source/`.
    ///
    /// `replica/` and `sync.log` are not created.
    pub fn new() -> Self {
        let fixture = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        fs::create_dir(fixture.source()).unwrap();
        fixture
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source(&self) -> PathBuf {
        self.root().join("source")
    }

    pub fn replica(&self) -> PathBuf {
        self.root().join("replica")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root().join("sync.log")
    }

    /// Write a source file, creating parent directories.
    pub fn write_source(&self, rel: &str, content: &str) {
        write_under(&self.source(), rel, content);
    }

    /// Write a replica file, creating parent directories.
    pub fn write_replica(&self, rel: &str, content: &str) {
        write_under(&self.replica(), rel, content);
    }

    pub fn mkdir_source(&self, rel: &str) {
        fs::create_dir_all(self.source().join(rel)).unwrap();
    }

    pub fn mkdir_replica(&self, rel: &str) {
        fs::create_dir_all(self.replica().join(rel)).unwrap();
    }

    /// Log content, or an empty string if nothing was logged yet.
    pub fn log(&self) -> String {
        fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    /// Log lines that start with `prefix`.
    pub fn log_lines_starting_with(&self, prefix: &str) -> Vec<String> {
        self.log()
            .lines()
            .filter(|line| line.starts_with(prefix))
            .map(str::to_string)
            .collect()
    }

    /// Snapshot of a tree: relative path → `Some(content)` for files,
    /// `None` for directories.
    pub fn snapshot(root: &Path) -> BTreeMap<String, Option<Vec<u8>>> {
        let mut entries = BTreeMap::new();
        if root.is_dir() {
            collect(root, root, &mut entries);
        }
        entries
    }

    /// Assert that `rel` exists in the replica.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_replica_exists(&self, rel: &str) {
        let full_path = self.replica().join(rel);
        assert!(
            full_path.exists(),
            "Expected replica entry to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` does **not** exist in the replica.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_replica_missing(&self, rel: &str) {
        let full_path = self.replica().join(rel);
        assert!(
            !full_path.exists(),
            "Expected replica entry NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the replica file `rel` holds exactly `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or its content differs.
    pub fn assert_replica_contains(&self, rel: &str, content: &str) {
        let full_path = self.replica().join(rel);
        let actual = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert_eq!(
            actual,
            content,
            "Replica file {} has unexpected content",
            full_path.display()
        );
    }
}

fn write_under(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn collect(root: &Path, dir: &Path, entries: &mut BTreeMap<String, Option<Vec<u8>>>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let rel = path
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        if path.is_dir() {
            entries.insert(rel, None);
            collect(root, &path, entries);
        } else {
            entries.insert(rel, Some(fs::read(&path).unwrap()));
        }
    }
}
