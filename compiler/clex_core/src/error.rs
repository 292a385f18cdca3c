//! Errors raised by [`ReadCache`](crate::ReadCache).

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    /// A rollback was requested without a fresh read to undo, either twice in
    /// a row or before the first read.
    #[error("rollback window exceeded at position {position}: only one step back from the last read is retained")]
    RollbackWindowExceeded { position: usize },

    /// `2 * half_capacity` bytes cannot be allocated.
    #[error("half capacity {half_capacity} is too large for a double buffer")]
    CapacityOverflow { half_capacity: usize },

    /// The underlying source failed while refilling a half.
    #[error("failed to read from source: {0}")]
    Io(#[from] io::Error),
}
