//! Deterministic blake3 accumulator.
//!
//! Produces the same digest across processes, platforms with the same
//! endianness, and releases of this crate for the same input.

use std::fmt;

use crate::accumulator::{Accumulator, IntegralResult};
use crate::error::{HashError, HashResult};
use crate::HashAppend;

/// Length of a blake3 key in bytes.
pub const KEY_LEN: usize = blake3::KEY_LEN;

// =============================================================================
// StableHasher
// =============================================================================

/// A deterministic accumulator backed by blake3.
///
/// Unlike `std::hash::Hasher`, this produces the same output across
/// process restarts for the same input. Implements [`Accumulator`] and also
/// offers a by-value builder style:
///
/// ```
/// use hash_append::StableHasher;
///
/// let id = StableHasher::new()
///     .append("__page__")
///     .append(&("/blog/post.html", 3u32))
///     .finish();
/// # let _ = id;
/// ```
#[derive(Clone)]
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    /// Create a new StableHasher
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Create a keyed StableHasher (blake3 keyed mode)
    #[inline]
    pub fn new_keyed(key: &[u8; KEY_LEN]) -> Self {
        Self {
            inner: blake3::Hasher::new_keyed(key),
        }
    }

    /// Create a keyed StableHasher from a key slice.
    ///
    /// Fails unless the slice is exactly [`KEY_LEN`] bytes long.
    pub fn from_key_slice(key: &[u8]) -> HashResult<Self> {
        let key: &[u8; KEY_LEN] = key.try_into().map_err(|_| HashError::InvalidKeyLength {
            expected: KEY_LEN,
            found: key.len(),
        })?;
        Ok(Self::new_keyed(key))
    }

    /// Create a StableHasher in blake3 key-derivation mode.
    ///
    /// `context` should be a hardcoded string unique to the application and
    /// purpose.
    #[inline]
    pub fn new_derive_key(context: &str) -> Self {
        Self {
            inner: blake3::Hasher::new_derive_key(context),
        }
    }

    /// Create a StableHasher whose stream starts with `seed`.
    ///
    /// Seed `0` is the unseeded hasher.
    pub fn with_seed(seed: u64) -> Self {
        let mut hasher = Self::new();
        hasher.seed(seed);
        hasher
    }

    /// Feed a nonzero seed as the first 8 little-endian bytes.
    pub(crate) fn seed(&mut self, seed: u64) {
        if seed != 0 {
            self.inner.update(&seed.to_le_bytes());
        }
    }

    /// Update with raw bytes
    #[inline]
    pub fn chain(mut self, data: &[u8]) -> Self {
        self.inner.update(data);
        self
    }

    /// Append any hashable value
    #[inline]
    pub fn append<T: HashAppend + ?Sized>(mut self, value: &T) -> Self {
        value.hash_append(&mut self);
        self
    }

    /// Finalize into the full 32-byte digest
    #[inline]
    pub fn digest(&self) -> blake3::Hash {
        self.inner.finalize()
    }

    /// Finish and return the hash as u64
    ///
    /// Takes the first 8 bytes of blake3 output as little-endian u64.
    #[inline]
    pub fn finish(self) -> u64 {
        self.digest().to_u64()
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StableHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StableHasher")
            .field("count", &self.inner.count())
            .finish_non_exhaustive()
    }
}

impl Accumulator for StableHasher {
    type Size = u64;
    type Digest = blake3::Hash;

    #[inline]
    fn update(&mut self, bytes: &[u8]) {
        self.inner.update(bytes);
    }

    #[inline]
    fn result(&mut self) -> blake3::Hash {
        self.inner.finalize()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_append;

    #[test]
    fn test_deterministic() {
        let a = StableHasher::new().append(&(1u8, "x", vec![2.5f64])).finish();
        let b = StableHasher::new().append(&(1u8, "x", vec![2.5f64])).finish();
        assert_eq!(a, b);
    }

    #[test]
    fn test_builder_and_accumulator_agree() {
        let built = StableHasher::new().append(&42u32).append("tail").finish();

        let mut h = StableHasher::new();
        hash_append(&mut h, &42u32);
        hash_append(&mut h, "tail");
        assert_eq!(h.result().to_u64(), built);
    }

    #[test]
    fn test_chain_is_raw_bytes() {
        let raw = StableHasher::new().chain(&7u16.to_ne_bytes()).finish();
        let appended = StableHasher::new().append(&7u16).finish();
        assert_eq!(raw, appended);
    }

    #[test]
    fn test_matches_plain_blake3() {
        let ours = StableHasher::new().chain(b"abc").digest();
        assert_eq!(ours, blake3::hash(b"abc"));
    }

    #[test]
    fn test_result_does_not_consume_clone_source() {
        let mut h = StableHasher::new().chain(b"prefix");
        let before = h.digest();
        let mut scratch = h.clone();
        scratch.update(b"element");
        let _ = scratch.result();
        assert_eq!(h.result(), before);
    }

    #[test]
    fn test_seed_zero_is_unseeded() {
        assert_eq!(
            StableHasher::with_seed(0).append(&1u8).finish(),
            StableHasher::new().append(&1u8).finish()
        );
        assert_ne!(
            StableHasher::with_seed(9).append(&1u8).finish(),
            StableHasher::new().append(&1u8).finish()
        );
    }

    #[test]
    fn test_keyed_modes_differ() {
        let key = [7u8; KEY_LEN];
        let plain = StableHasher::new().append(&1u8).finish();
        let keyed = StableHasher::new_keyed(&key).append(&1u8).finish();
        let derived = StableHasher::new_derive_key("hash-append tests").append(&1u8).finish();
        assert_ne!(plain, keyed);
        assert_ne!(plain, derived);
        assert_ne!(keyed, derived);
    }

    #[test]
    fn test_from_key_slice() {
        let key = [3u8; KEY_LEN];
        let from_slice = StableHasher::from_key_slice(&key).unwrap().append(&5u8).finish();
        let from_array = StableHasher::new_keyed(&key).append(&5u8).finish();
        assert_eq!(from_slice, from_array);

        let err = StableHasher::from_key_slice(&key[..5]).unwrap_err();
        assert_eq!(err, HashError::InvalidKeyLength { expected: 32, found: 5 });
    }

    #[test]
    fn test_debug_reports_byte_count() {
        let h = StableHasher::new().chain(b"abcd");
        assert_eq!(format!("{:?}", h), "StableHasher { count: 4, .. }");
    }
}
