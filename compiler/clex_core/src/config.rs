//! Sizing for [`ReadCache`](crate::ReadCache).

use std::num::NonZeroUsize;

/// Default size of one buffer half, in bytes.
pub const DEFAULT_HALF_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(n) => n,
    None => panic!("default half capacity must be non-zero"),
};

/// Construction parameters for a [`ReadCache`](crate::ReadCache).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Bytes per buffer half. Each refill requests exactly this many bytes;
    /// the cache owns `2 * half_capacity` bytes in total.
    pub half_capacity: NonZeroUsize,
}

impl CacheConfig {
    pub const fn new(half_capacity: NonZeroUsize) -> Self {
        Self { half_capacity }
    }

    /// Build a config from a plain byte count. Zero is raised to one.
    pub fn with_half_capacity(half_capacity: usize) -> Self {
        Self::new(NonZeroUsize::new(half_capacity).unwrap_or(NonZeroUsize::MIN))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HALF_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constant() {
        assert_eq!(CacheConfig::default().half_capacity.get(), 1024);
    }

    #[test]
    fn zero_half_capacity_is_raised_to_one() {
        assert_eq!(CacheConfig::with_half_capacity(0).half_capacity.get(), 1);
        assert_eq!(CacheConfig::with_half_capacity(7).half_capacity.get(), 7);
    }
}
