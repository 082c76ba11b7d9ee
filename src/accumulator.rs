//! The accumulator contract consumed by the dispatch rules.
//!
//! An accumulator is an order-sensitive byte sink. The dispatch code only ever
//! calls [`Accumulator::update`], clones the running state for unordered
//! ranges, and finalizes those clones with [`Accumulator::result`].

use crate::capability::SizeType;

// =============================================================================
// Accumulator
// =============================================================================

/// Sequential byte sink producing a digest on demand.
///
/// # Contract
///
/// - `update` may be called any number of times and must be sensitive to
///   both byte order and call boundaries as far as the algorithm allows. A
///   plain order-independent checksum breaks the length-suffix guarantees.
/// - `Clone` must produce an independent copy of the running state. The
///   unordered-range rule clones the outer accumulator once per element and
///   finalizes the clone; the original must not observe that.
/// - `result` may mutate state (stream-style algorithms may produce a
///   different value on a second call); the dispatch rules only call it on
///   clones.
pub trait Accumulator: Clone {
    /// Integer type used for all length suffixes
    type Size: SizeType;

    /// Output of [`result`](Accumulator::result)
    type Digest: IntegralResult;

    /// Append bytes to the running state.
    fn update(&mut self, bytes: &[u8]);

    /// Finalize and produce the digest.
    fn result(&mut self) -> Self::Digest;
}

// =============================================================================
// Digest reduction
// =============================================================================

/// Reduction of a digest to a fixed-width `u64`.
///
/// The unordered-range combiner sums these values with wrapping arithmetic.
pub trait IntegralResult {
    /// Reduce to 64 bits.
    ///
    /// Narrower integers zero-extend, wider ones keep their low 64 bits, byte
    /// arrays are read little-endian from their first 8 bytes.
    fn to_u64(&self) -> u64;
}

macro_rules! impl_integral_result {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntegralResult for $ty {
                #[inline]
                fn to_u64(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

impl_integral_result!(u8, u16, u32, u64, u128, usize);

impl<const N: usize> IntegralResult for [u8; N] {
    #[inline]
    fn to_u64(&self) -> u64 {
        let mut word = [0u8; 8];
        let n = N.min(8);
        word[..n].copy_from_slice(&self[..n]);
        u64::from_le_bytes(word)
    }
}

impl IntegralResult for blake3::Hash {
    #[inline]
    fn to_u64(&self) -> u64 {
        self.as_bytes().to_u64()
    }
}

// =============================================================================
// Tests
// =============================================================================
