//! Thread-safe witness memory.
//!
//! [`WitnessMemory`] wraps a [`WitnessRing`] in a single `parking_lot::Mutex`.
//! The lock covers the whole check-and-insert sequence, so two threads
//! witnessing the same new fingerprint at once cannot both see it as
//! unfamiliar: whichever acquires the lock second sees the first one's write.
//!
//! ```text
//!   thread A ─┐                         ┌─────────────────────────────────┐
//!   thread B ─┼──► Mutex<WitnessRing> ──►│ lookup → prune → write → advance│
//!   thread C ─┘    (one at a time)       └─────────────────────────────────┘
//! ```
//!
//! There is no read-only path. Looking up without recording would split the
//! atomic unit, so every call goes through the lock and writes.
//!
//! Nothing blocks inside the critical section except memory operations; a
//! caller waits only for callers ahead of it. For more throughput, split the
//! window with [`ShardedWitnessMemory`](crate::sharded::ShardedWitnessMemory).
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use witnesskit::memory::WitnessMemory;
//! use witnesskit::traits::Witness;
//!
//! let memory = Arc::new(WitnessMemory::try_new(1024).unwrap());
//!
//! let handles: Vec<_> = (0..4u32)
//!     .map(|t| {
//!         let memory = Arc::clone(&memory);
//!         thread::spawn(move || memory.witness(&t.to_le_bytes()))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert!(!handle.join().unwrap());
//! }
//! assert!(memory.witness(&0u32.to_le_bytes()));
//! ```

use parking_lot::Mutex;

use crate::ds::{WitnessOutcome, WitnessRing};
use crate::error::{ConfigError, InvariantError};
use crate::fingerprint::Fingerprint;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::WitnessMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsReset, MetricsSnapshotProvider};
use crate::traits::Witness;

/// Bounded, exact, shared seen-before memory.
#[derive(Debug)]
pub struct WitnessMemory {
    ring: Mutex<WitnessRing>,
    capacity: usize,
}

impl WitnessMemory {
    /// Creates a memory that remembers the last `capacity` witness calls.
    ///
    /// Storage for every slot is reserved here; witnessing never grows it.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        let ring = WitnessRing::try_new(capacity)?;
        tracing::debug!(capacity, "witness memory constructed");
        Ok(Self {
            ring: Mutex::new(ring),
            capacity,
        })
    }

    /// Number of populated slots. Takes the lock.
    pub fn len(&self) -> usize {
        self.ring.lock().len()
    }

    /// Takes the lock.
    pub fn is_empty(&self) -> bool {
        self.ring.lock().is_empty()
    }

    /// Witnesses `fingerprint` and reports the slot it displaced.
    pub fn record(&self, fingerprint: Fingerprint) -> WitnessOutcome {
        self.ring.lock().record(fingerprint)
    }

    /// Validates ring/index consistency under the lock.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.ring.lock().check_invariants()
    }

    /// Consumes the memory, returning the unsynchronized ring.
    pub fn into_inner(self) -> WitnessRing {
        self.ring.into_inner()
    }
}

impl Witness for WitnessMemory {
    #[inline]
    fn witness_fingerprint(&self, fingerprint: Fingerprint) -> bool {
        self.ring.lock().witness(fingerprint)
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl From<WitnessRing> for WitnessMemory {
    fn from(ring: WitnessRing) -> Self {
        let capacity = ring.capacity();
        Self {
            ring: Mutex::new(ring),
            capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<WitnessMetricsSnapshot> for WitnessMemory {
    fn snapshot(&self) -> WitnessMetricsSnapshot {
        self.ring.lock().snapshot()
    }
}

#[cfg(feature = "metrics")]
impl MetricsReset for WitnessMemory {
    fn reset_metrics(&self) {
        self.ring.lock().reset_metrics();
    }
}
