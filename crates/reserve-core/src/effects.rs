//! Pure interfaces composed by the issuance gateway
//!
//! Three narrow contracts, no implementations:
//! - [`AccessControl`]: who may mutate
//! - [`Ledger`]: balances and supply under a fixed cap
//! - [`InclusionVerifier`]: whether a reserve-chain transaction is provably included
//!
//! Keeping them separate lets proof verification be swapped or stubbed
//! without touching ledger arithmetic.

use crate::amount::{Amount, MAX_SUPPLY};
use crate::chain::InclusionClaim;
use crate::errors::Result;
use crate::identifiers::AccountId;
use std::sync::Arc;

/// Single-controller authorization
pub trait AccessControl {
    /// Current controller identity
    fn controller(&self) -> AccountId;

    /// True iff `caller` is the current controller
    fn is_authorized(&self, caller: &AccountId) -> bool {
        *caller == self.controller()
    }

    /// Replace the controller. Fails with `Forbidden` unless `caller` is the
    /// current controller; no other side effects.
    fn rotate(&mut self, caller: &AccountId, new_controller: AccountId) -> Result<()>;
}

/// Fungible-token ledger
///
/// Every mutation either applies completely or returns an error having
/// changed nothing. After every call:
/// - sum of balances == total supply
/// - total supply <= [`Ledger::max_supply`]
pub trait Ledger {
    /// Credit `amount` to `to`. Fails with `SupplyExceeded` past the cap.
    /// A zero amount is accepted.
    fn mint(&mut self, to: &AccountId, amount: Amount) -> Result<()>;

    /// Debit `amount` from `from`. Fails with `InvalidAmount` on zero and
    /// `InsufficientBalance` when the balance is too small.
    fn burn(&mut self, from: &AccountId, amount: Amount) -> Result<()>;

    /// Move `amount` from `from` to `to`; supply is unchanged.
    fn transfer(&mut self, from: &AccountId, to: &AccountId, amount: Amount) -> Result<()>;

    /// Balance of `account`, zero if unknown
    fn balance_of(&self, account: &AccountId) -> Amount;

    /// Total issued supply
    fn total_supply(&self) -> Amount;

    /// Fixed supply cap
    fn max_supply(&self) -> Amount {
        MAX_SUPPLY
    }
}

/// Failure inside an inclusion verifier, as opposed to a negative verdict
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    /// The claim is internally inconsistent (depth, index, path length)
    #[error("malformed claim: {message}")]
    MalformedClaim {
        /// What is inconsistent
        message: String,
    },

    /// The source of recognized headers could not answer
    #[error("header source unavailable: {message}")]
    HeaderSourceUnavailable {
        /// Why the lookup failed
        message: String,
    },
}

impl VerificationError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedClaim {
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::HeaderSourceUnavailable {
            message: message.into(),
        }
    }
}

/// External oracle for reserve-chain transaction inclusion
///
/// Header validation, chain linkage and proof-of-work live behind this
/// trait. Callers consume only the verdict: anything other than `Ok(true)`
/// must abort the operation it guards.
pub trait InclusionVerifier {
    fn verify(&self, claim: &InclusionClaim) -> std::result::Result<bool, VerificationError>;
}

impl<V: InclusionVerifier + ?Sized> InclusionVerifier for &V {
    fn verify(&self, claim: &InclusionClaim) -> std::result::Result<bool, VerificationError> {
        (**self).verify(claim)
    }
}

impl<V: InclusionVerifier + ?Sized> InclusionVerifier for Box<V> {
    fn verify(&self, claim: &InclusionClaim) -> std::result::Result<bool, VerificationError> {
        (**self).verify(claim)
    }
}

impl<V: InclusionVerifier + ?Sized> InclusionVerifier for Arc<V> {
    fn verify(&self, claim: &InclusionClaim) -> std::result::Result<bool, VerificationError> {
        (**self).verify(claim)
    }
}
