//! Unified error system for reserve issuance
//!
//! A single error type shared by every crate in the workspace. The first five
//! variants are the domain failures an operator must be able to tell apart;
//! the rest cover malformed inputs and the configuration surface.

use crate::amount::Amount;
use crate::identifiers::AccountId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error type for all reserve operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ReserveError {
    /// Caller is not the current controller
    #[error("Forbidden: {caller} is not the controller")]
    Forbidden {
        /// Identity that attempted the call
        caller: AccountId,
    },

    /// Zero or otherwise disallowed amount
    #[error("Invalid amount: {message}")]
    InvalidAmount {
        /// Why the amount was rejected
        message: String,
    },

    /// A debit exceeds the source balance
    #[error("Insufficient balance: {account} holds {balance}, requested {requested}")]
    InsufficientBalance {
        /// Account being debited
        account: AccountId,
        /// Balance at the time of the call
        balance: Amount,
        /// Amount that was requested
        requested: Amount,
    },

    /// A mint would push total supply above the cap
    #[error("Supply exceeded: supply {supply} + {requested} is above cap {cap}")]
    SupplyExceeded {
        /// Total supply at the time of the call
        supply: Amount,
        /// Amount that was requested
        requested: Amount,
        /// Fixed supply cap
        cap: Amount,
    },

    /// The inclusion verifier rejected or failed on the claim
    #[error("Invalid proof: {reason}")]
    InvalidProof {
        /// Verdict or failure reported by the verifier
        reason: String,
    },

    /// Malformed input (wrong length, bad encoding)
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Configuration could not be loaded or failed validation
    #[error("Config error: {message}")]
    Config {
        /// Error message describing the configuration issue
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message describing the serialization failure
        message: String,
    },
}

/// Copyable discriminant of [`ReserveError`] for remediation decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Forbidden,
    InvalidAmount,
    InsufficientBalance,
    SupplyExceeded,
    InvalidProof,
    Invalid,
    Config,
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::InvalidAmount => "invalid_amount",
            ErrorKind::InsufficientBalance => "insufficient_balance",
            ErrorKind::SupplyExceeded => "supply_exceeded",
            ErrorKind::InvalidProof => "invalid_proof",
            ErrorKind::Invalid => "invalid",
            ErrorKind::Config => "config",
            ErrorKind::Serialization => "serialization",
        };
        f.write_str(name)
    }
}

impl ReserveError {
    /// Create a forbidden error for `caller`
    pub fn forbidden(caller: AccountId) -> Self {
        Self::Forbidden { caller }
    }

    /// Create an invalid amount error
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount {
            message: message.into(),
        }
    }

    /// Create an invalid proof error
    pub fn invalid_proof(reason: impl Into<String>) -> Self {
        Self::InvalidProof {
            reason: reason.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Kind of failure, without the context payload
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Forbidden { .. } => ErrorKind::Forbidden,
            Self::InvalidAmount { .. } => ErrorKind::InvalidAmount,
            Self::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            Self::SupplyExceeded { .. } => ErrorKind::SupplyExceeded,
            Self::InvalidProof { .. } => ErrorKind::InvalidProof,
            Self::Invalid { .. } => ErrorKind::Invalid,
            Self::Config { .. } => ErrorKind::Config,
            Self::Serialization { .. } => ErrorKind::Serialization,
        }
    }
}

/// Standard Result type for reserve operations
pub type Result<T> = std::result::Result<T, ReserveError>;

impl From<serde_json::Error> for ReserveError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ReserveError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}

impl From<hex::FromHexError> for ReserveError {
    fn from(err: hex::FromHexError) -> Self {
        Self::invalid(format!("bad hex: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_distinct() {
        let caller = AccountId::from_bytes([7u8; 32]);
        let errors = [
            ReserveError::forbidden(caller),
            ReserveError::invalid_amount("zero"),
            ReserveError::InsufficientBalance {
                account: caller,
                balance: Amount::ZERO,
                requested: Amount::from_base_units(1),
            },
            ReserveError::SupplyExceeded {
                supply: Amount::ZERO,
                requested: Amount::from_base_units(1),
                cap: Amount::ZERO,
            },
            ReserveError::invalid_proof("verifier returned false"),
        ];

        let kinds: std::collections::HashSet<_> = errors.iter().map(ReserveError::kind).collect();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn test_error_display() {
        let err = ReserveError::invalid_proof("root mismatch");
        assert_eq!(err.to_string(), "Invalid proof: root mismatch");
        assert_eq!(err.kind().to_string(), "invalid_proof");
    }

    #[test]
    fn test_hex_conversion() {
        let err = ReserveError::from(hex::decode("zz").unwrap_err());
        assert_eq!(err.kind(), ErrorKind::Invalid);
    }
}
