//! # Uniform Sampling
//!
//! Every random decision staple makes (which word, which separator, which
//! suffix number, which character of an equivalent password) goes through
//! [`UniformSampler::next_int`]. It maps 32-bit draws from a [`RandomSource`]
//! onto an arbitrary half-open range using rejection sampling, so no value in
//! the range is more likely than another.
//!
//! ## Why not `value % n`
//!
//! With 2^32 possible draws and a range of size `n`, the first `2^32 mod n`
//! values of the range would be hit once more than the rest. Draws at or above
//! `floor(2^32 / n) * n` are discarded and redrawn instead.
//!
//! ## Sources
//!
//! - [`OsRandom`]: the operating system CSPRNG via `getrandom`. If it fails,
//!   sampling fails with [`StapleError::NoSecureRandomness`]. There is no
//!   fallback generator.
//! - Tests inject seeded or scripted sources through the same trait.

use crate::error::{Result, StapleError};
use tracing::debug;

/// Number of distinct values a single draw can take.
const DRAW_SPAN: u64 = 1 << 32;

/// A source of uniformly distributed 32-bit words.
pub trait RandomSource {
    fn next_u32(&mut self) -> Result<u32>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> Result<u32> {
        (**self).next_u32()
    }
}

/// Operating system CSPRNG.
///
/// Uses `getrandom`, which maps to `getrandom(2)` on Linux, `getentropy` on
/// macOS and `BCryptGenRandom` on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl OsRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandom {
    fn next_u32(&mut self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        getrandom::fill(&mut bytes).map_err(|e| StapleError::NoSecureRandomness(e.to_string()))?;
        Ok(u32::from_ne_bytes(bytes))
    }
}

/// Unbiased integer sampling over half-open ranges.
pub struct UniformSampler<R: RandomSource> {
    source: R,
}

impl<R: RandomSource> UniformSampler<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn into_inner(self) -> R {
        self.source
    }

    /// Returns an integer uniformly distributed in `[lower, upper)`.
    ///
    /// Fails with [`StapleError::InvalidRange`] when `upper <= lower` or when
    /// the range holds more than 2^32 values.
    pub fn next_int(&mut self, lower: i64, upper: i64) -> Result<i64> {
        let difference = upper
            .checked_sub(lower)
            .filter(|d| *d > 0)
            .map(|d| d as u64)
            .filter(|d| *d <= DRAW_SPAN)
            .ok_or(StapleError::InvalidRange { lower, upper })?;

        let max_accepted = (DRAW_SPAN / difference) * difference;
        let mut rejected = 0u32;

        loop {
            let value = u64::from(self.source.next_u32()?);
            if value < max_accepted {
                if rejected > 0 {
                    debug!(rejected, difference, "redrew out-of-range samples");
                }
                return Ok(lower + (value % difference) as i64);
            }
            rejected += 1;
        }
    }

    /// A uniform index into a collection of `len` items.
    pub fn index(&mut self, len: usize) -> Result<usize> {
        let upper = i64::try_from(len).map_err(|_| StapleError::InvalidRange {
            lower: 0,
            upper: i64::MAX,
        })?;
        Ok(self.next_int(0, upper)? as usize)
    }

    /// A uniformly chosen element of `items`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        let i = self.index(items.len())?;
        Ok(&items[i])
    }
}
