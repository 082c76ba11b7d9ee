//! # Shape Capabilities
//!
//! Every hashable type belongs to exactly one shape category. The category is
//! a property of the *type*, fixed at compile time through
//! [`HashAppend::SHAPE`](crate::HashAppend::SHAPE), and decides which rule
//! linearizes the value into accumulator bytes.
//!
//! ```text
//! Category            Rule                                       Suffix
//! ─────────────────   ────────────────────────────────────────   ──────
//! Contiguous          raw bytes of the value                     none
//! Float               -0.0 → +0.0, then raw bytes                none
//! Array               each element in index order                none
//! ContiguousRange     one update over all element bytes          len
//! Range               each element in iteration order            len
//! UnorderedRange      Σ (wrapping) of per-element clone digests  len
//! Tuple               each field in declaration order            none
//! ```
//!
//! Rust coherence guarantees at most one `HashAppend` impl per type, so the
//! "exactly one matching rule" requirement holds by construction. A type with
//! no impl simply fails to type-check.

use std::fmt;

use crate::HashAppend;

// =============================================================================
// Sealed Pattern
// =============================================================================

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
}

// =============================================================================
// Shape
// =============================================================================

/// Static shape category of a hashable type.
///
/// Variants are listed in dispatch-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    /// Fixed-layout, padding-free scalar or blob hashed by its raw bytes
    Contiguous,
    /// Floating-point scalar, normalized before byte reinterpretation
    Float,
    /// Fixed-size homogeneous array (`[T; N]`)
    Array,
    /// Contiguous storage with a runtime length (`[T]`, `Vec<T>`, `str`)
    ContiguousRange,
    /// Ordered, non-contiguous iterable (`VecDeque`, `BTreeMap`, ...)
    Range,
    /// Iterable whose order carries no meaning (`HashSet`, `HashMap`, ...)
    UnorderedRange,
    /// Fixed-arity heterogeneous aggregate (tuples, derived structs)
    Tuple,
}

impl Shape {
    /// All categories in dispatch-priority order.
    pub const ALL: [Shape; 7] = [
        Shape::Contiguous,
        Shape::Float,
        Shape::Array,
        Shape::ContiguousRange,
        Shape::Range,
        Shape::UnorderedRange,
        Shape::Tuple,
    ];

    /// Category name, used for debugging and error messages
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Contiguous => "contiguous",
            Shape::Float => "float",
            Shape::Array => "array",
            Shape::ContiguousRange => "contiguous-range",
            Shape::Range => "range",
            Shape::UnorderedRange => "unordered-range",
            Shape::Tuple => "tuple",
        }
    }

    /// 1-based dispatch priority.
    pub const fn priority(self) -> u8 {
        match self {
            Shape::Contiguous => 1,
            Shape::Float => 2,
            Shape::Array => 3,
            Shape::ContiguousRange => 4,
            Shape::Range => 5,
            Shape::UnorderedRange => 6,
            Shape::Tuple => 7,
        }
    }

    /// Leaves are fed to the accumulator directly, without recursion.
    pub const fn is_leaf(self) -> bool {
        matches!(self, Shape::Contiguous | Shape::Float)
    }

    /// Ranges have a runtime length.
    pub const fn is_range(self) -> bool {
        matches!(
            self,
            Shape::ContiguousRange | Shape::Range | Shape::UnorderedRange
        )
    }

    /// Whether values of this shape end with a length suffix.
    ///
    /// Exactly the ranges do: arrays and tuples have a static length.
    pub const fn appends_size(self) -> bool {
        self.is_range()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape category of `T`, without needing a value.
#[inline]
pub const fn shape_of<T: HashAppend + ?Sized>() -> Shape {
    T::SHAPE
}

// =============================================================================
// Size Type
// =============================================================================

/// Fixed-width integer an accumulator uses for every length suffix.
///
/// Sealed: only `u32`, `u64` and `usize` qualify. All of them are
/// [`Shape::Contiguous`], so a length enters the stream through the leaf rule.
pub trait SizeType: sealed::Sealed + HashAppend + Copy + 'static {
    /// Convert an element count, truncating if it does not fit.
    fn from_len(len: usize) -> Self;
}

impl SizeType for u32 {
    #[inline]
    fn from_len(len: usize) -> Self {
        len as u32
    }
}

impl SizeType for u64 {
    #[inline]
    fn from_len(len: usize) -> Self {
        len as u64
    }
}

impl SizeType for usize {
    #[inline]
    fn from_len(len: usize) -> Self {
        len
    }
}

// =============================================================================
// Tests
// =============================================================================
