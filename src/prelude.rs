//! Prelude module for common imports.
//!
//! ```
//! use hash_append::prelude::*;
//! ```

// Dispatch
pub use crate::append::{hash_append, hash_u64, hash_value, HashAppend};

// Accumulators
pub use crate::accumulator::{Accumulator, IntegralResult};
pub use crate::config::{AccumulatorConfig, Algorithm, AnyAccumulator};
pub use crate::hash::StableHasher;
pub use crate::std_hasher::{FxAccumulator, SipAccumulator, StdAccumulator};

// Categories
pub use crate::capability::{shape_of, Shape};

// Error
pub use crate::error::{HashError, HashResult};

// Derive
#[cfg(feature = "macros")]
pub use hash_append_macros::HashAppend;
