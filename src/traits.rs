//! # Witness Trait
//!
//! The interface every shared witness implementation offers.
//!
//! ## Architecture
//!
//! ```text
//!                 ┌─────────────────────────────────────────┐
//!                 │               Witness                   │
//!                 │                                         │
//!                 │  witness(&, &[u8]) → bool      provided │
//!                 │  witness_fingerprint(&, Fp) → bool      │
//!                 │  capacity(&) → usize                    │
//!                 └──────────────────┬──────────────────────┘
//!                                    │
//!              ┌─────────────────────┴─────────────────────┐
//!              ▼                                           ▼
//!   ┌────────────────────────────┐          ┌────────────────────────────┐
//!   │      WitnessMemory         │          │   ShardedWitnessMemory     │
//!   │  one ring, one Mutex       │          │  N WitnessMemory shards    │
//!   │  exact over whole window   │          │  exact per shard           │
//!   └────────────────────────────┘          └────────────────────────────┘
//! ```
//!
//! ## Entry-point equivalence
//!
//! [`Witness::witness`] is a provided method that hashes with
//! [`Fingerprint::of`] and forwards to [`Witness::witness_fingerprint`].
//! Implementors only write the fingerprint path, so raw bytes and their
//! precomputed digest always see the same window.
//!
//! Methods take `&self`: implementations synchronize internally and are
//! shared by reference or `Arc`.
//!
//! ## Example Usage
//!
//! ```
//! use witnesskit::fingerprint::Fingerprint;
//! use witnesskit::memory::WitnessMemory;
//! use witnesskit::traits::Witness;
//!
//! fn forward_once(seen: &impl Witness, frame: &[u8]) -> bool {
//!     !seen.witness(frame)
//! }
//!
//! let memory = WitnessMemory::try_new(64).unwrap();
//! assert!(forward_once(&memory, b"frame-1"));
//! assert!(!forward_once(&memory, b"frame-1"));
//!
//! // The precomputed digest hits the same entry.
//! assert!(memory.witness_fingerprint(Fingerprint::of(b"frame-1")));
//! ```

use std::sync::Arc;

use crate::fingerprint::Fingerprint;

/// Check-and-record over a bounded window of content fingerprints.
///
/// Every call is one atomic unit: it reports whether the content was in the
/// window before the call and then records it as the newest entry.
pub trait Witness: Send + Sync {
    /// Hashes `data` and witnesses its fingerprint.
    ///
    /// Returns `true` if the same content was seen within the window.
    #[inline]
    fn witness(&self, data: &[u8]) -> bool {
        self.witness_fingerprint(Fingerprint::of(data))
    }

    /// Witnesses a precomputed fingerprint, skipping the hash.
    fn witness_fingerprint(&self, fingerprint: Fingerprint) -> bool;

    /// Total number of slots in the window.
    fn capacity(&self) -> usize;
}

impl<T: Witness + ?Sized> Witness for &T {
    #[inline]
    fn witness_fingerprint(&self, fingerprint: Fingerprint) -> bool {
        (**self).witness_fingerprint(fingerprint)
    }

    #[inline]
    fn capacity(&self) -> usize {
        (**self).capacity()
    }
}

impl<T: Witness + ?Sized> Witness for Arc<T> {
    #[inline]
    fn witness_fingerprint(&self, fingerprint: Fingerprint) -> bool {
        (**self).witness_fingerprint(fingerprint)
    }

    #[inline]
    fn capacity(&self) -> usize {
        (**self).capacity()
    }
}

impl<T: Witness + ?Sized> Witness for Box<T> {
    #[inline]
    fn witness_fingerprint(&self, fingerprint: Fingerprint) -> bool {
        (**self).witness_fingerprint(fingerprint)
    }

    #[inline]
    fn capacity(&self) -> usize {
        (**self).capacity()
    }
}
