//! Error type for the narrow ambient I/O boundary.
//!
//! No *command* ever fails: unknown entities, unknown relations, and
//! malformed input are all silent no-ops or treated as end-of-input per
//! the command contract. The only genuinely exceptional condition left is
//! the process-level input/output stream itself misbehaving (a broken
//! pipe, an interrupted read).

use thiserror::Error as ThisError;

/// Failure modes of the `relindex` process.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Reading from stdin or writing to stdout failed.
    #[error("{operation} failed")]
    Io {
        /// What was being attempted (e.g. "reading command line").
        operation: &'static str,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for the `relindex` process.
pub type Result<T> = std::result::Result<T, Error>;
