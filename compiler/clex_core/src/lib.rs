//! Low-level read-ahead for the clex tokenizer.
//!
//! [`ReadCache`] presents a sequential [`std::io::Read`] source one byte at a
//! time, refilling a two-half circular buffer in fixed-size chunks. A single
//! step of rollback is always available after a successful read, including
//! across refill boundaries, and the source is never queried twice for the
//! same bytes.
//!
//! # Layout
//!
//! ```text
//! [ half 0: B bytes | half 1: B bytes ]
//!   ^                 ^
//!   0                 B            (pos wraps modulo 2B)
//! ```
//!
//! Entering a half that has already been consumed triggers a refill of that
//! half. Re-entering the freshest half after a rollback does not.

mod config;
mod error;
mod read_cache;

pub use config::{CacheConfig, DEFAULT_HALF_CAPACITY};
pub use error::CacheError;
pub use read_cache::ReadCache;
