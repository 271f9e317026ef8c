//! Fixed sizes and creation modes used when writing the replica tree.

/// Size of one read/write chunk when copying a file.
pub const COPY_CHUNK_SIZE: usize = 1024;

/// Mode requested for newly created replica files (before umask).
pub const REPLICA_FILE_MODE: u32 = 0o666;

/// Mode requested for newly created replica directories (before umask).
pub const REPLICA_DIR_MODE: u32 = 0o777;

/// Names that refer to the directory itself or its parent, never to content.
pub const SELF_AND_PARENT: [&str; 2] = [".", ".."];
