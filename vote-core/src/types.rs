//! Basic ledger types

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Candidate identifier type (64-bit unsigned integer)
///
/// Candidate ids are caller-supplied, not auto-assigned. The value `0` is
/// reserved as the "absent" sentinel and is never a valid candidate id.
pub type CandidateId = u64;

/// A single rating, valid in the range `0..=MAX_RATING`
pub type Rating = u8;

/// Highest admissible rating value
pub const MAX_RATING: Rating = 100;

/// 20-byte address identifying a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address([u8; 20]);

impl Address {
    /// Create a new address from byte array
    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Create address from slice (panics if length != 20)
    pub fn from_slice(slice: &[u8]) -> Self {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(slice);
        Self(bytes)
    }

    /// Get the underlying byte array
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hex string (with or without a `0x` prefix)
    pub fn from_hex(hex: &str) -> CoreResult<Self> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex)?;
        if bytes.len() != 20 {
            return Err(CoreError::InvalidAddress(format!(
                "expected 20 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self::from_slice(&bytes))
    }

    /// Zero address (all bytes are 0)
    pub fn zero() -> Self {
        Self([0u8; 20])
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
