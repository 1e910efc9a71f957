//! Ledger snapshots
//!
//! A snapshot is untrusted input once it has left the process, so restoring
//! one re-checks the same invariants the ledger maintains.

use reserve_core::{AccountId, Amount, ReserveError, ReserveResult, MAX_SUPPLY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serializable copy of every balance and the total supply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Non-zero balances keyed by account
    pub balances: BTreeMap<AccountId, Amount>,
    /// Total issued supply
    pub total_supply: Amount,
}

impl LedgerSnapshot {
    /// Check conservation, the cap, and the no-zero-entries convention
    pub fn validate(&self) -> ReserveResult<()> {
        if self.total_supply > MAX_SUPPLY {
            return Err(ReserveError::SupplyExceeded {
                supply: self.total_supply,
                requested: Amount::ZERO,
                cap: MAX_SUPPLY,
            });
        }

        let mut sum = Amount::ZERO;
        for (account, balance) in &self.balances {
            if balance.is_zero() {
                return Err(ReserveError::invalid(format!(
                    "snapshot stores a zero balance for {account}"
                )));
            }
            sum = sum
                .checked_add(*balance)
                .ok_or_else(|| ReserveError::invalid("snapshot balances overflow"))?;
        }

        if sum != self.total_supply {
            return Err(ReserveError::invalid(format!(
                "snapshot balances sum to {sum} but total supply is {}",
                self.total_supply
            )));
        }
        Ok(())
    }
}
