use std::fmt;
use std::io;

use thiserror::Error;

/// The terminal control request that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    GetAttrs,
    SetAttrs,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::GetAttrs => f.write_str("get terminal attributes"),
            Op::SetAttrs => f.write_str("set terminal attributes"),
        }
    }
}

/// Errors surfaced by the terminal layer.
///
/// Nothing here is retried or logged; every failure goes straight back
/// to the caller, who decides whether and how to restore the terminal.
#[derive(Debug, Error)]
pub enum TermError {
    /// The OS reported the control request itself failed (bad
    /// descriptor, not a terminal, permission).
    #[error("{op} failed: {source}")]
    Os {
        op: Op,
        #[source]
        source: io::Error,
    },

    /// The control request completed at the OS level but signalled
    /// failure through its return value. The cause is unknown to this
    /// layer, so only the raw code is carried.
    #[error("{op} returned nonzero status {code}")]
    Failed { op: Op, code: i32 },

    /// A read from the terminal returned a negative length.
    #[error("read from terminal failed: {source}")]
    Read {
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TermError>;
