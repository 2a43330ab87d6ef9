//! # Metrics Traits
//!
//! Recording, snapshotting, and export are separate concerns:
//!
//! ```text
//!   ┌──────────────────────────────┐
//!   │   WitnessMetricsRecorder     │   bumped by WitnessRing::record
//!   │ familiar/unfamiliar/evict    │
//!   └──────────────┬───────────────┘
//!                  │
//!        ┌─────────┴──────────────────────┐
//!        ▼                                ▼
//!   ┌──────────────────────────────┐ ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │ │ MetricsExporter<S>           │
//!   │ (bench/test)                 │ │ (production monitoring)      │
//!   └──────────────────────────────┘ └──────────────────────────────┘
//! ```

use crate::metrics::snapshot::WitnessMetricsSnapshot;

/// Counters written on every witness call.
pub trait WitnessMetricsRecorder {
    fn record_familiar(&mut self);
    fn record_unfamiliar(&mut self);
    /// A full ring overwrote a slot.
    fn record_eviction(&mut self);
    /// The overwritten fingerprint left the window; its index entry was removed.
    fn record_index_prune(&mut self);
    /// The overwritten fingerprint has a newer copy; its index entry was kept.
    fn record_retained_eviction(&mut self);
}

/// Produce a point-in-time snapshot of metrics.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}

/// Plain counters owned by a single ring.
#[derive(Debug, Default, Clone, Copy)]
pub struct WitnessMetrics {
    familiar: u64,
    unfamiliar: u64,
    evictions: u64,
    index_prunes: u64,
    retained_evictions: u64,
}

impl WitnessMetrics {
    /// Captures the counters plus the ring gauges passed in.
    pub fn snapshot(&self, len: usize, capacity: usize) -> WitnessMetricsSnapshot {
        WitnessMetricsSnapshot {
            witness_calls: self.familiar + self.unfamiliar,
            familiar: self.familiar,
            unfamiliar: self.unfamiliar,
            evictions: self.evictions,
            index_prunes: self.index_prunes,
            retained_evictions: self.retained_evictions,
            len,
            capacity,
        }
    }
}

impl WitnessMetricsRecorder for WitnessMetrics {
    #[inline]
    fn record_familiar(&mut self) {
        self.familiar += 1;
    }

    #[inline]
    fn record_unfamiliar(&mut self) {
        self.unfamiliar += 1;
    }

    #[inline]
    fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    #[inline]
    fn record_index_prune(&mut self) {
        self.index_prunes += 1;
    }

    #[inline]
    fn record_retained_eviction(&mut self) {
        self.retained_evictions += 1;
    }
}
