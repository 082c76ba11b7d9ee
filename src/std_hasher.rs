//! Adapter from `std::hash::Hasher` to [`Accumulator`].
//!
//! Lets any cloneable std hasher (rustc-hash's `FxHasher`, std's SipHash
//! `DefaultHasher`, ...) consume `HashAppend` values. Bytes go through
//! `Hasher::write`, so call boundaries are preserved as far as the wrapped
//! hasher preserves them.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::Hasher;

use rustc_hash::FxHasher;

use crate::accumulator::Accumulator;

/// [`Accumulator`] over a `std::hash::Hasher`.
#[derive(Clone, Default)]
pub struct StdAccumulator<S> {
    inner: S,
}

/// rustc-hash's Fx algorithm. Fast, not collision resistant.
pub type FxAccumulator = StdAccumulator<FxHasher>;

/// std's default SipHash hasher with fixed zero keys.
pub type SipAccumulator = StdAccumulator<DefaultHasher>;

impl<S: Hasher> StdAccumulator<S> {
    /// Wrap an existing hasher.
    #[inline]
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Wrap `inner` and feed a nonzero `seed` as its first 8 bytes.
    pub fn with_seed(inner: S, seed: u64) -> Self {
        let mut acc = Self::new(inner);
        if seed != 0 {
            acc.inner.write(&seed.to_le_bytes());
        }
        acc
    }

    /// Unwrap the underlying hasher.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> fmt::Debug for StdAccumulator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdAccumulator")
            .field("hasher", &std::any::type_name::<S>())
            .finish()
    }
}

impl<S: Hasher + Clone> Accumulator for StdAccumulator<S> {
    type Size = u64;
    type Digest = u64;

    #[inline]
    fn update(&mut self, bytes: &[u8]) {
        self.inner.write(bytes);
    }

    #[inline]
    fn result(&mut self) -> u64 {
        self.inner.finish()
    }
}
