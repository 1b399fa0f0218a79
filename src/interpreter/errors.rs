//! Error types surfaced outside the core walk
//!
//! The builder and the walker never fail: scanner errors are recovered where
//! they happen. What remains is reading the program in the first place, and
//! bookkeeping of the recorded walk history.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the program text
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Error reading file: {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading program from standard input")]
    Stdin(#[source] io::Error),
}

/// Walk history errors. These never change the outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history limit exceeded: {current} + {requested} > {limit} bytes")]
    LimitExceeded {
        current: usize,
        requested: usize,
        limit: usize,
    },

    #[error("already at the beginning of the run")]
    AtStart,

    #[error("already at the end of the run")]
    AtEnd,

    #[error("no steps recorded")]
    Empty,
}
