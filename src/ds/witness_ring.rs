//! Fixed-capacity witness ring with a recency index.
//!
//! Stores the last `capacity` fingerprints written, in write order, and
//! answers "was this fingerprint written within the window?" in O(1) via a
//! fingerprint → slot index. The slots are the ground truth; the index is an
//! accelerator that is reconciled on every slot write.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                            WitnessRing                               │
//!   │                                                                      │
//!   │   slots: Vec<Fingerprint>   (pre-allocated to capacity)              │
//!   │                                                                      │
//!   │   index: FxHashMap<Fingerprint, usize>   slot[0] = A  ◄── cursor     │
//!   │   ┌─────────┬─────────┐                  slot[1] = B                 │
//!   │   │    A    │   2     │                  slot[2] = A                 │
//!   │   │    B    │   1     │                  slot[3] = C                 │
//!   │   │    C    │   3     │                                              │
//!   │   └─────────┴─────────┘                                              │
//!   │                                                                      │
//!   │   Slot 0 holds an older copy of A and index[A] = 2, so overwriting   │
//!   │   slot 0 keeps A indexed. index[B] = 1, so B is pruned when the      │
//!   │   cursor reaches slot 1.                                             │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Witness Flow
//!
//! ```text
//!   witness(f)
//!        │
//!        ▼
//!   familiar = index.contains(f)
//!        │
//!        ▼
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │ Ring full?                                                           │
//!   │   NO  → push f (initial fill, nothing is evicted)                    │
//!   │   YES → old = slot[cursor]                                           │
//!   │         index[old] == cursor ? remove index[old] : keep (newer copy) │
//!   │         slot[cursor] = f                                             │
//!   └──────────────────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//!   index[f] = cursor; cursor = (cursor + 1) % capacity; return familiar
//! ```
//!
//! ## Not an LRU
//!
//! Eviction follows write order. Witnessing a fingerprint that is already
//! present still consumes a slot, so a burst of repeats pushes other,
//! unrepeated fingerprints out of the window sooner.
//!
//! ## Performance Characteristics
//!
//! | Operation   | Time | Notes                                  |
//! |-------------|------|----------------------------------------|
//! | `witness`   | O(1) | Two map lookups, one slot write        |
//! | `contains`  | O(1) | Index lookup only                      |
//! | `iter`      | O(n) | Oldest write first                     |
//!
//! ## Example Usage
//!
//! ```
//! use witnesskit::ds::WitnessRing;
//! use witnesskit::fingerprint::Fingerprint;
//!
//! let mut ring = WitnessRing::try_new(2).unwrap();
//! let a = Fingerprint::of(b"a");
//! let b = Fingerprint::of(b"b");
//! let c = Fingerprint::of(b"c");
//!
//! assert!(!ring.witness(a));
//! assert!(ring.witness(a));   // repeat consumes a slot too
//! assert!(!ring.witness(b));  // overwrites the first `a`, newer `a` survives
//! assert!(ring.contains(&a));
//! assert!(!ring.witness(c));  // overwrites the second `a`
//! assert!(!ring.contains(&a));
//! ```

use rustc_hash::FxHashMap;

use crate::error::{ConfigError, InvariantError, require_capacity};
use crate::fingerprint::Fingerprint;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::WitnessMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsSnapshotProvider, WitnessMetrics, WitnessMetricsRecorder};

/// Result of a single write into the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WitnessOutcome {
    /// The fingerprint was in the window before this write.
    pub familiar: bool,
    /// Fingerprint whose slot was overwritten, if the ring was full.
    pub evicted: Option<Fingerprint>,
}

/// Unsynchronized ring store plus recency index.
///
/// Use [`WitnessMemory`](crate::memory::WitnessMemory) to share one window
/// across threads.
#[derive(Debug)]
pub struct WitnessRing {
    slots: Vec<Fingerprint>,
    index: FxHashMap<Fingerprint, usize>,
    cursor: usize,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: WitnessMetrics,
}

impl WitnessRing {
    /// Creates a ring holding the last `capacity` writes.
    ///
    /// Fails when `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        require_capacity(capacity)?;
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            cursor: 0,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: WitnessMetrics::default(),
        })
    }

    /// Returns the configured capacity (number of slots).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of populated slots.
    ///
    /// Counts writes, not distinct fingerprints.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` once the ring has wrapped, i.e. every write evicts.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Index of the slot the next write lands in.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if `fingerprint` is in the window. Does not write.
    #[inline]
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.index.contains_key(fingerprint)
    }

    /// Number of distinct fingerprints in the window.
    #[inline]
    pub fn distinct_len(&self) -> usize {
        self.index.len()
    }

    /// Checks `fingerprint` against the window, then records it as newest.
    ///
    /// Returns `true` if it was present before this call.
    #[inline]
    pub fn witness(&mut self, fingerprint: Fingerprint) -> bool {
        self.record(fingerprint).familiar
    }

    /// Same as [`witness`](Self::witness), also reporting the overwritten slot.
    pub fn record(&mut self, fingerprint: Fingerprint) -> WitnessOutcome {
        let familiar = self.index.contains_key(&fingerprint);
        let slot = self.cursor;

        let evicted = if self.is_full() {
            let old = std::mem::replace(&mut self.slots[slot], fingerprint);
            // Only drop the entry if no newer copy of `old` lives elsewhere.
            let stale = self.index.get(&old) == Some(&slot);
            if stale {
                self.index.remove(&old);
            }
            #[cfg(feature = "metrics")]
            {
                self.metrics.record_eviction();
                if stale {
                    self.metrics.record_index_prune();
                } else {
                    self.metrics.record_retained_eviction();
                }
            }
            tracing::trace!(slot, evicted = %old, "witness slot overwritten");
            Some(old)
        } else {
            self.slots.push(fingerprint);
            None
        };

        self.index.insert(fingerprint, slot);
        self.cursor = (slot + 1) % self.capacity;

        #[cfg(feature = "metrics")]
        {
            if familiar {
                self.metrics.record_familiar();
            } else {
                self.metrics.record_unfamiliar();
            }
        }

        WitnessOutcome { familiar, evicted }
    }

    /// Iterates the window oldest write first.
    pub fn iter(&self) -> impl Iterator<Item = &Fingerprint> + '_ {
        // Before wrapping the cursor equals len, so the head slice is empty.
        let (newer, older) = self.slots.split_at(self.cursor % self.slots.len().max(1));
        older.iter().chain(newer.iter())
    }

    /// Validates ring/index consistency.
    ///
    /// Every index entry must point at a slot holding its fingerprint, every
    /// slot's fingerprint must be indexed, and the index must point at the
    /// newest slot holding it.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.slots.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "slot count {} exceeds capacity {}",
                self.slots.len(),
                self.capacity
            )));
        }
        if self.cursor >= self.capacity {
            return Err(InvariantError::new(format!(
                "cursor {} out of range for capacity {}",
                self.cursor, self.capacity
            )));
        }
        if !self.is_full() && self.cursor != self.slots.len() {
            return Err(InvariantError::new(format!(
                "cursor {} != len {} during initial fill",
                self.cursor,
                self.slots.len()
            )));
        }

        for (fingerprint, &slot) in &self.index {
            match self.slots.get(slot) {
                Some(held) if held == fingerprint => {},
                Some(held) => {
                    return Err(InvariantError::new(format!(
                        "index maps {:?} to slot {} holding {:?}",
                        fingerprint, slot, held
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "index maps {:?} to unpopulated slot {}",
                        fingerprint, slot
                    )));
                },
            }
        }

        // Walking oldest to newest, the last slot seen for each fingerprint
        // is the one the index must name.
        let mut newest: FxHashMap<&Fingerprint, usize> = FxHashMap::default();
        let len = self.slots.len();
        let start = if self.is_full() { self.cursor } else { 0 };
        for step in 0..len {
            let slot = (start + step) % len;
            newest.insert(&self.slots[slot], slot);
        }
        if newest.len() != self.index.len() {
            return Err(InvariantError::new(format!(
                "{} distinct fingerprints in slots, {} index entries",
                newest.len(),
                self.index.len()
            )));
        }
        for (fingerprint, slot) in newest {
            if self.index.get(fingerprint) != Some(&slot) {
                return Err(InvariantError::new(format!(
                    "index for {:?} is not its newest slot {}",
                    fingerprint, slot
                )));
            }
        }
        Ok(())
    }

    /// Zeroes the metrics counters.
    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&mut self) {
        self.metrics = WitnessMetrics::default();
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<WitnessMetricsSnapshot> for WitnessRing {
    fn snapshot(&self) -> WitnessMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity)
    }
}
