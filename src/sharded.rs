//! Witness memory split into independent shards.
//!
//! Each shard is its own [`WitnessMemory`] with its own lock. A fingerprint
//! always routes to the same shard (by prefix, see
//! [`ShardSelector`](crate::ds::ShardSelector)), so repeats are still caught
//! exactly. What changes is the window: each shard forgets independently
//! after `capacity_per_shard` writes routed to it, so the combined window is
//! no longer a strict "last N writes" across all callers.
//!
//! ## Example Usage
//!
//! ```
//! use witnesskit::sharded::ShardedWitnessMemory;
//! use witnesskit::traits::Witness;
//!
//! let memory = ShardedWitnessMemory::try_new(4, 256).unwrap();
//! assert_eq!(memory.capacity(), 1024);
//!
//! assert!(!memory.witness(b"packet"));
//! assert!(memory.witness(b"packet"));
//! ```

use crate::ds::ShardSelector;
use crate::error::{ConfigError, InvariantError, require_capacity};
use crate::fingerprint::Fingerprint;
use crate::memory::WitnessMemory;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::WitnessMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsReset, MetricsSnapshotProvider};
use crate::traits::Witness;

/// Fingerprint-prefix sharded witness memory.
#[derive(Debug)]
pub struct ShardedWitnessMemory {
    shards: Box<[WitnessMemory]>,
    selector: ShardSelector,
}

impl ShardedWitnessMemory {
    /// Creates `shards` independent memories of `capacity_per_shard` slots.
    pub fn try_new(shards: usize, capacity_per_shard: usize) -> Result<Self, ConfigError> {
        let selector = ShardSelector::try_new(shards)?;
        require_capacity(capacity_per_shard)?;

        let shards = (0..shards)
            .map(|_| WitnessMemory::try_new(capacity_per_shard))
            .collect::<Result<Vec<_>, _>>()?
            .into_boxed_slice();
        tracing::debug!(
            shards = shards.len(),
            capacity_per_shard,
            "sharded witness memory constructed"
        );
        Ok(Self { shards, selector })
    }

    /// Number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// The shard `fingerprint` routes to.
    pub fn shard_for(&self, fingerprint: &Fingerprint) -> &WitnessMemory {
        &self.shards[self.selector.shard_for(fingerprint)]
    }

    /// All shards, in selector order.
    pub fn shards(&self) -> &[WitnessMemory] {
        &self.shards
    }

    /// Populated slots summed across shards.
    pub fn len(&self) -> usize {
        self.shards.iter().map(WitnessMemory::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(WitnessMemory::is_empty)
    }

    /// Validates every shard, reporting the first failure with its index.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for (idx, shard) in self.shards.iter().enumerate() {
            shard
                .check_invariants()
                .map_err(|err| InvariantError::new(format!("shard {}: {}", idx, err)))?;
        }
        Ok(())
    }
}

impl Witness for ShardedWitnessMemory {
    #[inline]
    fn witness_fingerprint(&self, fingerprint: Fingerprint) -> bool {
        self.shard_for(&fingerprint).witness_fingerprint(fingerprint)
    }

    fn capacity(&self) -> usize {
        self.shards.iter().map(Witness::capacity).sum()
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<WitnessMetricsSnapshot> for ShardedWitnessMemory {
    /// Shard snapshots merged; each shard is locked in turn, not all at once.
    fn snapshot(&self) -> WitnessMetricsSnapshot {
        self.shards
            .iter()
            .map(|shard| shard.snapshot())
            .fold(WitnessMetricsSnapshot::default(), WitnessMetricsSnapshot::merge)
    }
}

#[cfg(feature = "metrics")]
impl MetricsReset for ShardedWitnessMemory {
    fn reset_metrics(&self) {
        for shard in self.shards.iter() {
            shard.reset_metrics();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(n: u32) -> Fingerprint {
        Fingerprint::of(&n.to_le_bytes())
    }

    #[test]
    fn rejects_zero_shards_and_zero_capacity() {
        assert!(ShardedWitnessMemory::try_new(0, 8).is_err());
        assert!(ShardedWitnessMemory::try_new(4, 0).is_err());
    }

    #[test]
    fn repeats_route_to_the_same_shard() {
        let memory = ShardedWitnessMemory::try_new(8, 16).unwrap();
        for n in 0..64 {
            assert!(!memory.witness_fingerprint(fp(n)));
        }
        // 64 distinct over 8 shards of 16 slots: at most a few shards wrap,
        // but the most recent write in every shard is still present.
        let last = fp(63);
        assert!(memory.witness_fingerprint(last));
        memory.check_invariants().unwrap();
    }

    #[test]
    fn shards_evict_independently() {
        let memory = ShardedWitnessMemory::try_new(2, 1).unwrap();
        let a = (0..).map(fp).find(|f| memory.selector.shard_for(f) == 0).unwrap();
        let b = (0..).map(fp).find(|f| memory.selector.shard_for(f) == 1).unwrap();

        assert!(!memory.witness_fingerprint(a));
        assert!(!memory.witness_fingerprint(b));
        // Capacity 1 per shard, yet `b` did not displace `a`.
        assert!(memory.witness_fingerprint(a));
        assert!(memory.witness_fingerprint(b));
    }

    #[test]
    fn capacity_and_len_sum_over_shards() {
        let memory = ShardedWitnessMemory::try_new(3, 5).unwrap();
        assert_eq!(memory.capacity(), 15);
        assert_eq!(memory.shard_count(), 3);
        assert!(memory.is_empty());
        memory.witness(b"x");
        assert_eq!(memory.len(), 1);
        assert_eq!(
            memory.shards().iter().filter(|shard| !shard.is_empty()).count(),
            1
        );
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn snapshot_merges_shards() {
        let memory = ShardedWitnessMemory::try_new(4, 4).unwrap();
        for n in 0..10 {
            memory.witness_fingerprint(fp(n));
        }
        memory.witness_fingerprint(fp(9));
        let snap = memory.snapshot();
        assert_eq!(snap.witness_calls, 11);
        assert_eq!(snap.familiar, 1);
        assert_eq!(snap.capacity, 16);

        memory.reset_metrics();
        assert_eq!(memory.snapshot().witness_calls, 0);
    }
}
