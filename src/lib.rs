//! witnesskit: exact, bounded-memory "seen before?" witnessing over content
//! fingerprints.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod builder;
pub mod ds;
pub mod error;
pub mod fingerprint;
pub mod memory;
pub mod sharded;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
