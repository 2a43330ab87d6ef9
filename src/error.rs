//! Error types for the witnesskit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (zero capacity, zero shards, more shards than slots, a fingerprint of
//!   the wrong length).
//! - [`InvariantError`]: Returned by the diagnostic `check_invariants`
//!   methods when the ring store and its recency index disagree.
//!
//! Witnessing itself never fails: once an instance exists, every call
//! returns a familiarity flag.
//!
//! ## Example Usage
//!
//! ```
//! use witnesskit::error::ConfigError;
//! use witnesskit::memory::WitnessMemory;
//!
//! let memory: Result<WitnessMemory, ConfigError> = WitnessMemory::try_new(128);
//! assert!(memory.is_ok());
//!
//! // Zero capacity is caught at construction
//! let bad = WitnessMemory::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when ring/index consistency is violated.
///
/// Produced by [`WitnessRing::check_invariants`](crate::ds::WitnessRing::check_invariants)
/// and the wrappers that forward to it. Carries a human-readable description
/// of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`WitnessMemory::try_new`](crate::memory::WitnessMemory::try_new) and the
/// builder's `try_build*` methods. This is the only error a caller can see
/// outside of diagnostics; there is nothing to retry.
///
/// # Example
///
/// ```
/// use witnesskit::memory::WitnessMemory;
///
/// let err = WitnessMemory::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

/// Rejects a zero capacity, logging the rejection.
pub(crate) fn require_capacity(capacity: usize) -> Result<(), ConfigError> {
    if capacity == 0 {
        tracing::warn!(capacity, "rejected witness configuration");
        return Err(ConfigError::new("capacity must be > 0"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("index points at foreign slot");
        assert_eq!(err.to_string(), "index points at foreign slot");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("cursor out of range");
        assert_eq!(err.message(), "cursor out of range");
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
    }

    #[test]
    fn config_debug_includes_message() {
        let err = ConfigError::new("shards must be > 0");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("shards must be > 0"));
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    #[test]
    fn require_capacity_rejects_zero_only() {
        assert!(require_capacity(0).is_err());
        assert!(require_capacity(1).is_ok());
        assert!(require_capacity(usize::MAX).is_ok());
    }
}
