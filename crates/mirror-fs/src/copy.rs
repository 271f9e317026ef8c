//! Single-file copy from source to replica

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};

use crate::constants::{COPY_CHUNK_SIZE, REPLICA_FILE_MODE};
use crate::entry::PathPair;
use crate::log::{LogRecord, SyncLog};
use crate::{Error, Result};

/// Outcome of a copy whose source and replica files were both opened.
#[derive(Debug)]
pub struct CopyAttempt {
    /// Bytes written to the replica file, or the error that ended the transfer
    pub transfer: Result<u64>,
    /// Set when the `Copied` record could not be appended
    pub log_failure: Option<Error>,
}

impl CopyAttempt {
    /// Bytes written when the transfer completed.
    pub fn bytes(&self) -> Option<u64> {
        self.transfer.as_ref().ok().copied()
    }

    /// Every error the attempt produced, transfer first.
    pub fn into_errors(self) -> impl Iterator<Item = Error> {
        self.transfer.err().into_iter().chain(self.log_failure)
    }
}

/// Copy the full content of `pair.source` over `pair.replica`.
///
/// The replica file is created or truncated. Content moves in fixed-size
/// chunks and the copy stops at the first chunk that is not written in full,
/// leaving a partial replica file behind.
///
/// If both files could be opened, a `Copied` record is appended to `log`
/// whether or not the transfer completed: the record describes the attempt,
/// and the returned [`CopyAttempt`] carries both outcomes. If either open
/// fails, nothing is written, nothing is logged and the open error is
/// returned.
pub fn copy_file(pair: &PathPair, log: &SyncLog) -> Result<CopyAttempt> {
    let mut source = File::open(&pair.source).map_err(|source| Error::FileUnreadable {
        path: pair.source.clone(),
        source,
    })?;

    let mut replica = open_replica(pair)?;
    let transfer = transfer(pair, &mut source, &mut replica);
    drop(source);
    drop(replica);

    let log_failure = log.record(&LogRecord::Copied {
        source: pair.source.clone(),
        replica: pair.replica.clone(),
    });

    match &transfer {
        Ok(bytes) => {
            tracing::debug!(source = %pair.source.display(), replica = %pair.replica.display(), bytes, "Copied file");
        }
        Err(e) => {
            tracing::debug!(replica = %pair.replica.display(), error = %e, "Copy ended early");
        }
    }
    Ok(CopyAttempt {
        transfer,
        log_failure,
    })
}

fn open_replica(pair: &PathPair) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(REPLICA_FILE_MODE);
    }
    #[cfg(not(unix))]
    let _ = REPLICA_FILE_MODE;

    options
        .open(&pair.replica)
        .map_err(|source| Error::FileUnwritable {
            path: pair.replica.clone(),
            source,
        })
}

fn transfer(pair: &PathPair, source: &mut impl Read, replica: &mut impl Write) -> Result<u64> {
    let mut buffer = [0u8; COPY_CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let read = match source.read(&mut buffer) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(Error::FileUnreadable {
                    path: pair.source.clone(),
                    source: e,
                });
            }
        };

        let (written, cause) = match replica.write(&buffer[..read]) {
            Ok(n) => (n, None),
            Err(e) => (0, Some(e)),
        };
        if written != read {
            return Err(Error::ShortWrite {
                path: pair.replica.clone(),
                expected: read,
                written,
                cause,
            });
        }
        total += read as u64;
    }
}
