//! hash-append - Structural hashing for arbitrary nested values
//!
//! ## Core Concepts
//!
//! **Types don't know which hash they feed.** A value describes *how* it is
//! linearized ([`HashAppend`]); an [`Accumulator`] decides *what* is computed
//! from those bytes. Equal values produce identical accumulator input for any
//! algorithm.
//!
//! **One static category per type.** Each type's [`HashAppend`] impl declares
//! a [`Shape`] and follows that category's rule:
//!
//! - leaves (integers, `bool`, `char`, raw pointers, padding-free blobs) feed
//!   their raw bytes; floats first map `-0.0` to `+0.0`
//! - arrays and tuples feed their elements, with no length
//! - ranges (`Vec`, `str`, `VecDeque`, `BTreeMap`, ...) feed their elements
//!   and then their length
//! - unordered ranges (`HashSet`, `HashMap`, ...) feed a wrapping sum of
//!   per-element digests and then their length
//!
//! ## Modules
//! - `append`: dispatch entry point and range building blocks
//! - `accumulator`: the accumulator contract and digest reduction
//! - `capability`: shape categories and size types
//! - `hash`: blake3-backed [`StableHasher`]
//! - `std_hasher`: adapter for any `std::hash::Hasher`
//! - `config`: runtime algorithm selection
//!
//! ## Usage
//!
//! ```
//! use std::collections::HashMap;
//! use hash_append::{hash_append, Accumulator, HashAppend, StableHasher};
//!
//! #[derive(HashAppend)]
//! struct Record {
//!     name: String,
//!     scores: Vec<(u32, f64)>,
//!     tags: HashMap<String, bool>,
//! }
//!
//! let record = Record {
//!     name: "ada".into(),
//!     scores: vec![(1, 0.5), (2, -0.0)],
//!     tags: HashMap::from([("admin".to_string(), true)]),
//! };
//!
//! let mut h = StableHasher::new();
//! hash_append(&mut h, &record);
//! let digest = h.result();
//! # let _ = digest;
//! ```

extern crate self as hash_append;

// =============================================================================
// Core modules
// =============================================================================

/// Accumulator contract and digest reduction
pub mod accumulator;

/// Dispatch entry point and range building blocks
pub mod append;

/// Shape categories and size types
pub mod capability;

/// Runtime accumulator selection
pub mod config;

/// Error types
pub mod error;

/// blake3 accumulator
pub mod hash;

/// Prelude for common imports
pub mod prelude;

/// `std::hash::Hasher` adapter
pub mod std_hasher;

mod impls;
mod macros;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

// Dispatch
pub use append::{
    hash_append, hash_append_exact_range, hash_append_range, hash_append_size,
    hash_append_sized_range, hash_append_slice, hash_append_unordered_range, hash_u64,
    hash_value, HashAppend,
};

// Accumulators
pub use accumulator::{Accumulator, IntegralResult};
pub use config::{AccumulatorConfig, Algorithm, AnyAccumulator};
pub use hash::StableHasher;
pub use std_hasher::{FxAccumulator, SipAccumulator, StdAccumulator};

// Categories
pub use capability::{shape_of, Shape, SizeType};

// Error types
pub use error::{HashError, HashResult};

// Used by `hash_append_contiguous!` and the derive macro
pub use zerocopy;

// Proc macros
#[cfg(feature = "macros")]
pub use hash_append_macros::HashAppend;

// =============================================================================
// Tests
// =============================================================================
