pub use crate::builder::WitnessBuilder;
pub use crate::ds::{ShardSelector, WitnessOutcome, WitnessRing};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::fingerprint::{FINGERPRINT_LEN, Fingerprint};
pub use crate::memory::WitnessMemory;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::WitnessMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider};
pub use crate::sharded::ShardedWitnessMemory;
pub use crate::traits::Witness;
