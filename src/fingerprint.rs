//! Content fingerprints: the digest boundary.
//!
//! A [`Fingerprint`] is the SHA-256 digest of some content and the only key
//! the witness structures understand. Two equal fingerprints are the same
//! content no matter whether they were computed here with
//! [`Fingerprint::of`] or handed in precomputed by the caller.
//!
//! ## Example Usage
//!
//! ```
//! use witnesskit::fingerprint::Fingerprint;
//!
//! let computed = Fingerprint::of(b"hello");
//! let supplied = Fingerprint::from_bytes(*computed.as_bytes());
//! assert_eq!(computed, supplied);
//!
//! assert_eq!(
//!     computed.to_string(),
//!     "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
//! );
//! ```

use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::ConfigError;

/// Length in bytes of a [`Fingerprint`].
pub const FINGERPRINT_LEN: usize = 32;

/// Fixed-length content digest, stored by value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Hashes `data` with SHA-256.
    #[inline]
    pub fn of(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Wraps a digest the caller already holds.
    ///
    /// The bytes must be the SHA-256 digest of the content for the result to
    /// line up with [`Fingerprint::of`].
    #[inline]
    pub const fn from_bytes(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// First eight bytes read little-endian. Used for shard selection.
    #[inline]
    pub fn prefix_u64(&self) -> u64 {
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&self.0[..8]);
        u64::from_le_bytes(prefix)
    }
}

impl From<[u8; FINGERPRINT_LEN]> for Fingerprint {
    fn from(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Fingerprint {
    type Error = ConfigError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; FINGERPRINT_LEN] = bytes.try_into().map_err(|_| {
            ConfigError::new(format!(
                "fingerprint must be {} bytes, got {}",
                FINGERPRINT_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(array))
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Fingerprint {
    // Short form keeps ring dumps readable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint(")?;
        for byte in &self.0[..4] {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, "..)")
    }
}
