//! Dispatch entry points.
//!
//! [`hash_append`] is the single entry point for values. The `hash_append_*`
//! range functions are the lower-level building blocks the category impls are
//! made of, exposed for callers that hold an iterator rather than a container.
//!
//! # Algorithm
//!
//! ```text
//! hash_append(h, v)
//!   └─ <T as HashAppend>::hash_append      one impl per type = one rule
//!        ├─ Contiguous      h.update(bytes_of(v))
//!        ├─ Float           normalize -0.0, h.update(bytes_of(v))
//!        ├─ Array           T::hash_append_slice(v)
//!        ├─ ContiguousRange T::hash_append_slice(v); size(len)
//!        ├─ Range           each element; size(len)
//!        ├─ UnorderedRange  w = Σ clone(h).append(e).result(); w; size(len)
//!        └─ Tuple           each field
//! ```

use crate::accumulator::{Accumulator, IntegralResult};
use crate::capability::{Shape, SizeType};

// =============================================================================
// HashAppend
// =============================================================================

/// A value that knows how to linearize itself into an [`Accumulator`].
///
/// Implementations exist for primitives, arrays, slices, strings, std
/// collections, tuples and smart pointers. User structs get one through
/// `#[derive(HashAppend)]`, and padding-free blobs through
/// [`hash_append_contiguous!`](crate::hash_append_contiguous).
pub trait HashAppend {
    /// Static shape category selecting the rule this impl follows.
    const SHAPE: Shape;

    /// Feed this value into `h`.
    fn hash_append<H: Accumulator>(&self, h: &mut H);

    /// Feed a contiguous run of values into `h`, without a length suffix.
    ///
    /// Leaf types override this to emit a single `update` over the whole
    /// slice, which produces the same bytes as element-by-element dispatch.
    #[inline]
    fn hash_append_slice<H: Accumulator>(data: &[Self], h: &mut H)
    where
        Self: Sized,
    {
        for item in data {
            item.hash_append(h);
        }
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Feed `value` into `h` according to its shape category.
#[inline]
pub fn hash_append<H, T>(h: &mut H, value: &T)
where
    H: Accumulator,
    T: HashAppend + ?Sized,
{
    value.hash_append(h);
}

/// Feed every element of `iter` in order, without a length suffix.
#[inline]
pub fn hash_append_range<H, I>(h: &mut H, iter: I)
where
    H: Accumulator,
    I: IntoIterator,
    I::Item: HashAppend,
{
    for item in iter {
        item.hash_append(h);
    }
}

/// Feed a contiguous slice without a length suffix.
///
/// For leaf element types this is a single `update` call; `&[u8]` is fed
/// as-is.
#[inline]
pub fn hash_append_slice<H, T>(h: &mut H, data: &[T])
where
    H: Accumulator,
    T: HashAppend,
{
    T::hash_append_slice(data, h);
}

/// Append a length suffix, coerced to the accumulator's size type.
#[inline]
pub fn hash_append_size<H: Accumulator>(h: &mut H, len: usize) {
    H::Size::from_len(len).hash_append(h);
}

/// Single-pass range: feed each element while counting, then the count.
///
/// The iterator is consumed exactly once.
pub fn hash_append_sized_range<H, I>(h: &mut H, iter: I)
where
    H: Accumulator,
    I: IntoIterator,
    I::Item: HashAppend,
{
    let mut count = 0usize;
    for item in iter {
        item.hash_append(h);
        count += 1;
    }
    hash_append_size(h, count);
}

/// Size-known range: feed each element, then the length reported up front.
///
/// Produces the same bytes as [`hash_append_sized_range`] for iterators whose
/// `len()` is truthful.
pub fn hash_append_exact_range<H, I>(h: &mut H, iter: I)
where
    H: Accumulator,
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: HashAppend,
{
    let iter = iter.into_iter();
    let len = iter.len();
    hash_append_range(h, iter);
    hash_append_size(h, len);
}

/// Unordered range: order-independent combination of per-element digests.
///
/// Each element is hashed into a fresh clone of the *outer* state, the clone's
/// digest is reduced to `u64`, and the reductions are summed modulo 2^64. The
/// sum and then the element count are appended to `h`. Clones never see each
/// other and are dropped at the end of their iteration.
///
/// The sum is not a multiset commitment: distinct multisets can collide on the
/// combined word even with a cryptographic accumulator.
pub fn hash_append_unordered_range<H, I>(h: &mut H, iter: I)
where
    H: Accumulator,
    I: IntoIterator,
    I::Item: HashAppend,
{
    let mut count = 0usize;
    let mut combined = 0u64;

    for item in iter {
        let mut scratch = h.clone();
        item.hash_append(&mut scratch);
        combined = combined.wrapping_add(scratch.result().to_u64());
        count += 1;
    }

    tracing::trace!(count, combined, "combined unordered range");

    combined.hash_append(h);
    hash_append_size(h, count);
}

// =============================================================================
// One-shot helpers
// =============================================================================

/// Append `value` to `h` and finalize.
#[inline]
pub fn hash_value<H, T>(mut h: H, value: &T) -> H::Digest
where
    H: Accumulator,
    T: HashAppend + ?Sized,
{
    value.hash_append(&mut h);
    h.result()
}

/// Append `value` to `h`, finalize, and reduce the digest to `u64`.
#[inline]
pub fn hash_u64<H, T>(h: H, value: &T) -> u64
where
    H: Accumulator,
    T: HashAppend + ?Sized,
{
    hash_value(h, value).to_u64()
}

// =============================================================================
// Tests
// =============================================================================
