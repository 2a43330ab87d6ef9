//! Builder for witness memories.
//!
//! Validates capacity and shard count up front and returns a [`ConfigError`]
//! instead of producing an instance that would misbehave later.
//!
//! ## Example
//!
//! ```rust
//! use witnesskit::builder::WitnessBuilder;
//! use witnesskit::traits::Witness;
//!
//! let memory = WitnessBuilder::new(100).try_build().unwrap();
//! assert!(!memory.witness(b"hello"));
//! assert!(memory.witness(b"hello"));
//!
//! // 1000 slots over 8 shards → 125 per shard
//! let sharded = WitnessBuilder::new(1000).shards(8).try_build_sharded().unwrap();
//! assert_eq!(sharded.capacity(), 1000);
//!
//! assert!(WitnessBuilder::new(0).try_build().is_err());
//! ```

use crate::error::{ConfigError, require_capacity};
use crate::memory::WitnessMemory;
use crate::sharded::ShardedWitnessMemory;

/// Builder for [`WitnessMemory`] and [`ShardedWitnessMemory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WitnessBuilder {
    capacity: usize,
    shards: usize,
}

impl WitnessBuilder {
    /// Starts a builder for a window of `capacity` slots in total.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            shards: 1,
        }
    }

    /// Splits the window across `shards` independent shards.
    ///
    /// Only used by [`try_build_sharded`](Self::try_build_sharded).
    pub fn shards(mut self, shards: usize) -> Self {
        self.shards = shards;
        self
    }

    /// Total slots requested.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots each shard receives: the total divided evenly, rounded up.
    pub fn capacity_per_shard(&self) -> Result<usize, ConfigError> {
        self.validate()?;
        Ok(self.capacity.div_ceil(self.shards))
    }

    /// Builds a single, unsharded memory.
    ///
    /// A shard count other than 1 is an error here rather than silently
    /// ignored.
    pub fn try_build(self) -> Result<WitnessMemory, ConfigError> {
        if self.shards != 1 {
            return Err(ConfigError::new(format!(
                "shards = {} requires try_build_sharded",
                self.shards
            )));
        }
        WitnessMemory::try_new(self.capacity)
    }

    /// Builds a sharded memory.
    pub fn try_build_sharded(self) -> Result<ShardedWitnessMemory, ConfigError> {
        let per_shard = self.capacity_per_shard()?;
        ShardedWitnessMemory::try_new(self.shards, per_shard)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        require_capacity(self.capacity)?;
        if self.shards == 0 {
            return Err(ConfigError::new("shards must be > 0"));
        }
        if self.shards > self.capacity {
            return Err(ConfigError::new(format!(
                "shards ({}) must not exceed capacity ({})",
                self.shards, self.capacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Witness;

    #[test]
    fn builds_single_memory() {
        let memory = WitnessBuilder::new(10).try_build().unwrap();
        assert_eq!(memory.capacity(), 10);
        assert!(!memory.witness(b"one"));
        assert!(memory.witness(b"one"));
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = WitnessBuilder::new(0).try_build().unwrap_err();
        assert!(err.message().contains("capacity"));
        assert!(WitnessBuilder::new(0).shards(2).try_build_sharded().is_err());
    }

    #[test]
    fn zero_shards_rejected() {
        let err = WitnessBuilder::new(8).shards(0).try_build_sharded().unwrap_err();
        assert!(err.message().contains("shards"));
    }

    #[test]
    fn more_shards_than_slots_rejected() {
        let err = WitnessBuilder::new(3).shards(4).try_build_sharded().unwrap_err();
        assert_eq!(err.message(), "shards (4) must not exceed capacity (3)");
    }

    #[test]
    fn sharded_split_rounds_up() {
        let builder = WitnessBuilder::new(10).shards(4);
        assert_eq!(builder.capacity_per_shard().unwrap(), 3);

        let memory = builder.try_build_sharded().unwrap();
        assert_eq!(memory.shard_count(), 4);
        assert_eq!(memory.capacity(), 12);
    }

    #[test]
    fn try_build_refuses_shard_count() {
        assert!(WitnessBuilder::new(8).shards(2).try_build().is_err());
    }
}
