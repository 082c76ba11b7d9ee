//! Test-only accumulators.

use crate::Accumulator;

/// Records every `update` call verbatim.
///
/// `result` hashes the recorded calls (including their boundaries) with
/// blake3, so it is order- and boundary-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Transcript {
    pub calls: Vec<Vec<u8>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded bytes, concatenated.
    pub fn bytes(&self) -> Vec<u8> {
        self.calls.concat()
    }
}

impl Accumulator for Transcript {
    type Size = u64;
    type Digest = u64;

    fn update(&mut self, bytes: &[u8]) {
        self.calls.push(bytes.to_vec());
    }

    fn result(&mut self) -> u64 {
        let mut hasher = blake3::Hasher::new();
        for call in &self.calls {
            hasher.update(&(call.len() as u64).to_le_bytes());
            hasher.update(call);
        }
        crate::IntegralResult::to_u64(&hasher.finalize())
    }
}

/// Bytes of a `u64` length suffix.
pub(crate) fn size_bytes(n: u64) -> Vec<u8> {
    n.to_ne_bytes().to_vec()
}
