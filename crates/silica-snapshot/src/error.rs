//! Snapshot acquisition errors.

use thiserror::Error;

/// Errors that can occur while acquiring or replaying a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("line {line}: malformed record: {text:?}")]
    MalformedRecord { line: usize, text: String },

    #[error("line {line}: malformed CPU header: {text:?}")]
    MalformedHeader { line: usize, text: String },

    #[error("dump contains no records")]
    Empty,

    #[error("reading the host CPU requires an x86_64 target")]
    UnsupportedHost,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
