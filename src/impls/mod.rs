//! `HashAppend` implementations, one module per group of categories.
//!
//! - `scalar`: integers, `bool`, `char`, raw pointers, floats
//! - `sequence`: arrays, slices, strings, ordered and unordered collections
//! - `tuple`: tuples up to arity 12
//! - `pointer`: references and owning smart pointers (forwarding)
//! - `ecosystem`: optional impls for third-party containers

mod pointer;
mod scalar;
mod sequence;
mod tuple;

#[cfg(any(feature = "smallvec", feature = "compact_str"))]
mod ecosystem;
