//! Principal identifiers
//!
//! Holders and the controller share one identifier space: a controller is an
//! ordinary account that the access gate currently recognizes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Namespace for name-derived account identifiers
const ACCOUNT_NAMESPACE: Uuid = Uuid::from_bytes([
    0x5b, 0x1e, 0x0c, 0x3a, 0x8d, 0x44, 0x4f, 0x61, 0x9a, 0x27, 0x6e, 0x0d, 0x13, 0xc2, 0x7f, 0x90,
]);

/// Account identifier for holders and the controller
///
/// Absent balances for an account are implicitly zero, so any identifier is a
/// valid transfer target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Create a new account ID from caller-provided entropy.
    pub fn new_from_entropy(entropy: [u8; 32]) -> Self {
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes.copy_from_slice(&entropy[..16]);
        Self(Uuid::from_bytes(uuid_bytes))
    }

    /// Create from 32 bytes (for testing)
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self::new_from_entropy(bytes)
    }

    /// Deterministic identifier derived from a human-readable name.
    ///
    /// The same name always maps to the same account, which lets operator
    /// scripts refer to `"alice"` instead of a UUID.
    pub fn from_name(name: &str) -> Self {
        Self(Uuid::new_v5(&ACCOUNT_NAMESPACE, name.as_bytes()))
    }

    /// Parse either a UUID or, failing that, derive from a name.
    pub fn parse_or_named(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| Self::from_name(s))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AccountId(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for AccountId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<AccountId> for Uuid {
    fn from(account_id: AccountId) -> Self {
        account_id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_accounts_are_stable() {
        assert_eq!(AccountId::from_name("alice"), AccountId::from_name("alice"));
        assert_ne!(AccountId::from_name("alice"), AccountId::from_name("bob"));
    }

    #[test]
    fn parse_or_named_prefers_uuid() {
        let id = AccountId::from_bytes([3u8; 32]);
        assert_eq!(AccountId::parse_or_named(&id.to_string()), id);
        assert_eq!(
            AccountId::parse_or_named("treasury"),
            AccountId::from_name("treasury")
        );
    }
}
