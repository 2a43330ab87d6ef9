//! Fingerprint-prefix shard selection.
//!
//! Maps a [`Fingerprint`] to a shard index for
//! [`ShardedWitnessMemory`](crate::sharded::ShardedWitnessMemory).
//! Fingerprints are already uniformly distributed digests, so the selector
//! reads their first eight bytes instead of rehashing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Shard Selection Flow                            │
//! │                                                                         │
//! │   Fingerprint  2c f2 4d ba 5f b0 a3 0e | 26 e8 3b ...                   │
//! │                └──────── prefix ──────┘                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │   ┌───────────────────────────────────────────────────────────────┐     │
//! │   │  ShardSelector { shards: 4 }                                  │     │
//! │   │                                                               │     │
//! │   │  1. prefix = u64::from_le_bytes(bytes[0..8])                  │     │
//! │   │  2. shard  = prefix % 4                                       │     │
//! │   └───────────────────────────────────────────────────────────────┘     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │   ┌─────────┬─────────┬─────────┬─────────┐                             │
//! │   │ Shard 0 │ Shard 1 │ Shard 2 │ Shard 3 │                             │
//! │   └─────────┴─────────┴─────────┴─────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Equal fingerprints always land in the same shard, which is what keeps
//! witnessing exact per shard.
//!
//! ## Example Usage
//!
//! ```
//! use witnesskit::ds::ShardSelector;
//! use witnesskit::fingerprint::Fingerprint;
//!
//! let selector = ShardSelector::try_new(4).unwrap();
//! let fp = Fingerprint::of(b"user:123");
//!
//! let shard = selector.shard_for(&fp);
//! assert!(shard < 4);
//! assert_eq!(selector.shard_for(&fp), shard);
//! ```

use crate::error::ConfigError;
use crate::fingerprint::Fingerprint;

/// Deterministic fingerprint-to-shard mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardSelector {
    shards: usize,
}

impl ShardSelector {
    /// Creates a selector for `shards` shards.
    ///
    /// Fails when `shards` is zero.
    pub fn try_new(shards: usize) -> Result<Self, ConfigError> {
        if shards == 0 {
            tracing::warn!(shards, "rejected shard configuration");
            return Err(ConfigError::new("shards must be > 0"));
        }
        Ok(Self { shards })
    }

    /// Returns the number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards
    }

    /// Maps a fingerprint to a shard index in `[0, shards)`.
    #[inline]
    pub fn shard_for(&self, fingerprint: &Fingerprint) -> usize {
        (fingerprint.prefix_u64() % self.shards as u64) as usize
    }
}

impl Default for ShardSelector {
    /// Single-shard selector.
    fn default() -> Self {
        Self { shards: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shard_selector_is_deterministic() {
        let selector = ShardSelector::try_new(8).unwrap();
        let fp = Fingerprint::of(b"key");

        let a = selector.shard_for(&fp);
        let b = selector.shard_for(&fp);
        assert_eq!(a, b);
        assert!(a < selector.shard_count());
    }

    #[test]
    fn zero_shards_rejected() {
        let err = ShardSelector::try_new(0).unwrap_err();
        assert!(err.message().contains("shards"));
    }

    #[test]
    fn single_shard_maps_everything_to_zero() {
        let selector = ShardSelector::default();
        for n in 0u32..64 {
            assert_eq!(selector.shard_for(&Fingerprint::of(&n.to_le_bytes())), 0);
        }
    }

    #[test]
    fn uses_fingerprint_prefix() {
        let selector = ShardSelector::try_new(16).unwrap();
        let mut bytes = [0xffu8; 32];
        bytes[..8].copy_from_slice(&21u64.to_le_bytes());
        assert_eq!(selector.shard_for(&Fingerprint::from_bytes(bytes)), 5);
    }

    #[test]
    fn spreads_across_all_shards() {
        let selector = ShardSelector::try_new(4).unwrap();
        let mut hits = [0usize; 4];
        for n in 0u32..1000 {
            hits[selector.shard_for(&Fingerprint::of(&n.to_le_bytes()))] += 1;
        }
        assert!(hits.iter().all(|&count| count > 150), "{:?}", hits);
    }
}
