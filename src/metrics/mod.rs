//! Witness counters, snapshots, and export.
//!
//! Enabled with the `metrics` cargo feature. Counters are bumped inside the
//! witness critical section, so they are exact and need no atomics.

pub mod exporter;
pub mod snapshot;
pub mod traits;
