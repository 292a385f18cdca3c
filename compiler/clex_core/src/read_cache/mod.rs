//! Double-buffered read-ahead cache with one-step rollback.
//!
//! The cache owns `2 * B` bytes split into two halves. Construction fills
//! half 0. Whenever [`next_char()`](ReadCache::next_char) advances onto the
//! first index of a half that has already been consumed, that half is
//! refilled from the source before it is read. The half that was current a
//! moment ago stays intact, so the byte just read can always be un-read.
//!
//! # End of Input
//!
//! A refill that delivers fewer than `B` bytes marks the source exhausted.
//! The cache is at EOF only once `pos` has reached the end of that short
//! fill. Until then, bytes already buffered are still handed out, even though
//! the source itself has nothing left.
//!
//! # Rollback Window
//!
//! Exactly one step back from the most recent successful read is guaranteed.
//! The `fence` is the first index of the older half, the oldest position whose
//! predecessor may already be stale. A read never leaves the cursor on it.
//! Rolling back without a read to undo is reported as
//! [`CacheError::RollbackWindowExceeded`] and leaves the cursor where it was.
//!
//! # Failed Refills
//!
//! A refill runs before the cursor moves. If the source fails, nothing is
//! consumed and the bytes already received are kept. The next call resumes
//! the same refill, so a retryable error such as `WouldBlock` never loses or
//! repeats a byte.

use std::io::{ErrorKind, Read};

use crate::{CacheConfig, CacheError};

/// Character-at-a-time view of a chunked [`Read`] source.
#[derive(Debug)]
pub struct ReadCache<R> {
    source: R,
    /// Two halves of `half` bytes each.
    buf: Box<[u8]>,
    half: usize,
    /// Next index to read, in `0..2 * half`.
    pos: usize,
    /// Rolling back from this index would cross into bytes a refill may have
    /// replaced.
    fence: usize,
    /// Offset of the most recent fill.
    last_offset: usize,
    /// Bytes delivered by the most recent fill (the short-read count).
    last_count: usize,
    /// Index (0 or 1) of the half most recently filled.
    fresh_half: usize,
    /// The source returned fewer bytes than requested at least once.
    exhausted: bool,
    /// A read has happened since the last rollback.
    rollback_armed: bool,
    /// Bytes already received by a refill that failed part-way.
    partial: usize,
}

impl<R: Read> ReadCache<R> {
    /// Create a cache with the default half capacity and fill the first half.
    pub fn new(source: R) -> Result<Self, CacheError> {
        Self::with_config(source, CacheConfig::default())
    }

    /// Create a cache and fill the first half.
    pub fn with_config(source: R, config: CacheConfig) -> Result<Self, CacheError> {
        let half = config.half_capacity.get();
        let total = half
            .checked_mul(2)
            .ok_or(CacheError::CapacityOverflow {
                half_capacity: half,
            })?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(total)
            .map_err(|_| CacheError::CapacityOverflow {
                half_capacity: half,
            })?;
        buf.resize(total, 0u8);
        let mut cache = Self {
            source,
            buf: buf.into_boxed_slice(),
            half,
            pos: 0,
            fence: 0,
            last_offset: 0,
            last_count: 0,
            fresh_half: 0,
            exhausted: false,
            rollback_armed: false,
            partial: 0,
        };
        cache.fill(half, 0)?;
        Ok(cache)
    }

    /// Read up to `count` bytes from the source into `buf[offset..]`.
    ///
    /// Returns the number of bytes delivered. Short reads from the source are
    /// retried until `count` bytes arrive or the source reports end of input,
    /// so a return value below `count` always means the source is exhausted.
    /// Bytes in `buf[offset + delivered..offset + count]` are stale.
    ///
    /// On error, the bytes received so far are remembered and the next call
    /// continues after them.
    fn fill(&mut self, count: usize, offset: usize) -> Result<usize, CacheError> {
        let window = &mut self.buf[offset..offset + count];
        let mut delivered = std::mem::take(&mut self.partial).min(count);
        while delivered < count {
            match self.source.read(&mut window[delivered..]) {
                Ok(0) => break,
                Ok(n) => delivered += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => {
                    self.partial = delivered;
                    tracing::debug!(offset, delivered, error = %err, "refill failed");
                    return Err(CacheError::Io(err));
                }
            }
        }

        self.last_offset = offset;
        self.last_count = delivered;
        self.fresh_half = offset / self.half;
        tracing::trace!(offset, requested = count, delivered, "filled cache half");
        if delivered < count {
            self.exhausted = true;
            tracing::debug!(offset, delivered, "source exhausted");
        }
        Ok(delivered)
    }

    /// Return the byte at the cursor and advance, or `None` at end of input.
    ///
    /// Advancing onto the start of a consumed half refills it first. The
    /// half most recently filled is never refilled twice in a row, which is
    /// what keeps a rollback-then-reread from skipping a chunk.
    ///
    /// If that refill fails, nothing is consumed and the call can be retried.
    pub fn next_char(&mut self) -> Result<Option<u8>, CacheError> {
        if self.eof() {
            return Ok(None);
        }

        let next = (self.pos + 1) % self.buf.len();
        if next % self.half == 0 && next / self.half != self.fresh_half {
            self.fill(self.half, next)?;
            self.fence = (next + self.half) % self.buf.len();
        }

        let byte = self.buf[self.pos];
        self.pos = next;
        self.rollback_armed = true;
        Ok(Some(byte))
    }

    /// Step the cursor back by one byte.
    ///
    /// Valid once per successful [`next_char()`](Self::next_char).
    pub fn roll_back(&mut self) -> Result<(), CacheError> {
        if !self.rollback_armed {
            return Err(CacheError::RollbackWindowExceeded { position: self.pos });
        }
        // Every read that lands on the older half refills it and moves the
        // fence past it, so an armed cursor never sits on the fence.
        debug_assert_ne!(self.pos, self.fence, "armed cursor on the fence");
        self.pos = (self.pos + self.buf.len() - 1) % self.buf.len();
        self.rollback_armed = false;
        Ok(())
    }

    /// `true` once every byte the source delivered has been handed out.
    ///
    /// Requires all of: the source has signalled exhaustion, the last fill was
    /// short, and the cursor sits exactly at the end of that short fill. A
    /// cursor rolled back into the older half is never at EOF.
    pub fn eof(&self) -> bool {
        self.exhausted
            && self.last_count < self.half
            && self.pos == self.last_offset + self.last_count
    }
}

impl<R> ReadCache<R> {
    /// Bytes per buffer half.
    #[inline]
    pub fn half_capacity(&self) -> usize {
        self.half
    }

    /// Current cursor index, in `0..2 * half_capacity()`.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn fence(&self) -> usize {
        self.fence
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Give back the underlying source. Buffered, unread bytes are dropped.
    pub fn into_inner(self) -> R {
        self.source
    }
}
