pub mod shard;
pub mod witness_ring;

pub use shard::ShardSelector;
pub use witness_ring::{WitnessOutcome, WitnessRing};
