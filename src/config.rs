//! Runtime accumulator selection.
//!
//! [`AccumulatorConfig`] picks an algorithm by name (e.g. from a settings
//! file or a CLI flag) and builds an [`AnyAccumulator`], which reduces every
//! digest to `u64` so callers can treat all algorithms alike.

use std::fmt;
use std::str::FromStr;

use crate::accumulator::{Accumulator, IntegralResult};
use crate::error::{HashError, HashResult};
use crate::hash::{StableHasher, KEY_LEN};
use crate::std_hasher::{FxAccumulator, SipAccumulator};

// =============================================================================
// Algorithm
// =============================================================================

/// Accumulator algorithms selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// blake3 via [`StableHasher`]
    #[default]
    Blake3,
    /// rustc-hash `FxHasher`
    Fx,
    /// std `DefaultHasher` (SipHash)
    Sip,
}

impl Algorithm {
    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Blake3 => "blake3",
            Algorithm::Fx => "fx",
            Algorithm::Sip => "sip",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(s: &str) -> HashResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blake3" => Ok(Algorithm::Blake3),
            "fx" => Ok(Algorithm::Fx),
            "sip" => Ok(Algorithm::Sip),
            _ => Err(HashError::unknown_algorithm(s)),
        }
    }
}

// =============================================================================
// AccumulatorConfig
// =============================================================================

/// Configuration for building an [`AnyAccumulator`].
///
/// Defaults to unkeyed, unseeded blake3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccumulatorConfig {
    /// Algorithm to build.
    pub algorithm: Algorithm,
    /// Fed as the first 8 little-endian bytes when nonzero.
    /// Default: 0
    pub seed: u64,
    /// blake3 key; only valid with [`Algorithm::Blake3`].
    /// Default: None
    pub key: Option<[u8; KEY_LEN]>,
}

impl AccumulatorConfig {
    /// Create config for an algorithm with no seed and no key.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set blake3 key
    pub fn with_key(mut self, key: [u8; KEY_LEN]) -> Self {
        self.key = Some(key);
        self
    }

    /// Build the configured accumulator.
    ///
    /// Fails when a key is set for an algorithm without a keyed mode.
    pub fn build(&self) -> HashResult<AnyAccumulator> {
        if self.key.is_some() && self.algorithm != Algorithm::Blake3 {
            return Err(HashError::invalid_config(format!(
                "algorithm {} does not support keys",
                self.algorithm
            )));
        }

        let acc = match self.algorithm {
            Algorithm::Blake3 => {
                let mut hasher = match &self.key {
                    Some(key) => StableHasher::new_keyed(key),
                    None => StableHasher::new(),
                };
                hasher.seed(self.seed);
                AnyAccumulator::Blake3(hasher)
            }
            Algorithm::Fx => {
                AnyAccumulator::Fx(FxAccumulator::with_seed(Default::default(), self.seed))
            }
            Algorithm::Sip => {
                AnyAccumulator::Sip(SipAccumulator::with_seed(Default::default(), self.seed))
            }
        };

        tracing::debug!(
            algorithm = %self.algorithm,
            seeded = self.seed != 0,
            keyed = self.key.is_some(),
            "built accumulator"
        );
        Ok(acc)
    }
}

// =============================================================================
// AnyAccumulator
// =============================================================================

/// Accumulator chosen at runtime. Digests are reduced to `u64`.
#[derive(Debug, Clone)]
pub enum AnyAccumulator {
    /// blake3
    Blake3(StableHasher),
    /// rustc-hash Fx
    Fx(FxAccumulator),
    /// SipHash
    Sip(SipAccumulator),
}

impl AnyAccumulator {
    /// Algorithm this accumulator runs
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyAccumulator::Blake3(_) => Algorithm::Blake3,
            AnyAccumulator::Fx(_) => Algorithm::Fx,
            AnyAccumulator::Sip(_) => Algorithm::Sip,
        }
    }
}

impl Accumulator for AnyAccumulator {
    type Size = u64;
    type Digest = u64;

    #[inline]
    fn update(&mut self, bytes: &[u8]) {
        match self {
            AnyAccumulator::Blake3(h) => h.update(bytes),
            AnyAccumulator::Fx(h) => h.update(bytes),
            AnyAccumulator::Sip(h) => h.update(bytes),
        }
    }

    #[inline]
    fn result(&mut self) -> u64 {
        match self {
            AnyAccumulator::Blake3(h) => h.result().to_u64(),
            AnyAccumulator::Fx(h) => h.result(),
            AnyAccumulator::Sip(h) => h.result(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
