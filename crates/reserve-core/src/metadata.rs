//! Token metadata and reserve wallet key
//!
//! Both are informational. Neither participates in any ledger invariant.

use crate::amount::DECIMALS;
use crate::errors::{ReserveError, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of a compressed reserve wallet public key
pub const RESERVE_PUBLIC_KEY_LENGTH: usize = 33;

/// Fixed descriptive metadata for the issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Human-readable name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Fractional digits, always [`DECIMALS`]
    pub decimals: u8,
    /// Optional link to off-system metadata
    pub uri: Option<String>,
}

impl TokenMetadata {
    /// Create metadata with the fixed decimal precision
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, uri: Option<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals: DECIMALS,
            uri,
        }
    }
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self::new("Wrapped Reserve Coin", "wRSV", None)
    }
}

/// Compressed public key of the custodial reserve wallet
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReservePublicKey([u8; RESERVE_PUBLIC_KEY_LENGTH]);

impl ReservePublicKey {
    /// Parse a 33-byte compressed key (`0x02` or `0x03` prefix)
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; RESERVE_PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            ReserveError::invalid(format!(
                "reserve public key must be {RESERVE_PUBLIC_KEY_LENGTH} bytes, got {}",
                bytes.len()
            ))
        })?;
        if !matches!(raw[0], 0x02 | 0x03) {
            return Err(ReserveError::invalid(format!(
                "reserve public key has invalid prefix {:#04x}",
                raw[0]
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_bytes(&self) -> &[u8; RESERVE_PUBLIC_KEY_LENGTH] {
        &self.0
    }
}

impl fmt::Display for ReservePublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for ReservePublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReservePublicKey({self})")
    }
}

impl FromStr for ReservePublicKey {
    type Err = ReserveError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(s)?)
    }
}

impl Serialize for ReservePublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReservePublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "03556902f83defc6c63a7eb56a2d8ee4baee109f2126aac41e4f9e3a0835f34bc5";

    #[test]
    fn parses_compressed_key() {
        let key: ReservePublicKey = KEY.parse().unwrap();
        assert_eq!(key.to_string(), KEY);
    }

    #[test]
    fn rejects_uncompressed_prefix() {
        let mut bytes = hex::decode(KEY).unwrap();
        bytes[0] = 0x04;
        assert!(ReservePublicKey::from_slice(&bytes).is_err());
        assert!(ReservePublicKey::from_slice(&bytes[..32]).is_err());
    }

    #[test]
    fn default_metadata_uses_fixed_decimals() {
        assert_eq!(TokenMetadata::default().decimals, 8);
    }
}
