//! Capped fungible-token ledger
//!
//! Every mutation computes its complete post-state first and only then writes
//! it, so a failed call leaves balances and supply untouched.

use crate::snapshot::LedgerSnapshot;
use reserve_core::{AccountId, Amount, Ledger, ReserveError, ReserveResult, MAX_SUPPLY};
use std::collections::BTreeMap;

/// In-memory token ledger under the fixed [`MAX_SUPPLY`] cap
///
/// Zero balances are not stored; an absent entry reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenLedger {
    balances: BTreeMap<AccountId, Amount>,
    total_supply: Amount,
}

impl TokenLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-zero balances in account order
    pub fn holders(&self) -> impl Iterator<Item = (&AccountId, &Amount)> {
        self.balances.iter()
    }

    /// Number of accounts with a non-zero balance
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Point-in-time copy of every balance and the supply
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            balances: self.balances.clone(),
            total_supply: self.total_supply,
        }
    }

    /// Rebuild a ledger from a snapshot, re-checking every invariant
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> ReserveResult<Self> {
        snapshot.validate()?;
        Ok(Self {
            balances: snapshot.balances,
            total_supply: snapshot.total_supply,
        })
    }

    fn set_balance(&mut self, account: AccountId, balance: Amount) {
        if balance.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, balance);
        }
    }

    fn debited(&self, from: &AccountId, amount: Amount) -> ReserveResult<Amount> {
        if amount.is_zero() {
            return Err(ReserveError::invalid_amount("amount must be positive"));
        }
        let balance = self.balance_of(from);
        balance
            .checked_sub(amount)
            .ok_or(ReserveError::InsufficientBalance {
                account: *from,
                balance,
                requested: amount,
            })
    }
}

impl Ledger for TokenLedger {
    fn mint(&mut self, to: &AccountId, amount: Amount) -> ReserveResult<()> {
        let exceeded = || ReserveError::SupplyExceeded {
            supply: self.total_supply,
            requested: amount,
            cap: MAX_SUPPLY,
        };
        let supply = self
            .total_supply
            .checked_add(amount)
            .filter(|supply| *supply <= MAX_SUPPLY)
            .ok_or_else(exceeded)?;
        // A balance never exceeds supply, so this only fails on a corrupt ledger
        let balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or_else(exceeded)?;

        self.set_balance(*to, balance);
        self.total_supply = supply;
        tracing::trace!(account = %to, %amount, supply = %supply, "ledger mint");
        Ok(())
    }

    fn burn(&mut self, from: &AccountId, amount: Amount) -> ReserveResult<()> {
        let balance = self.debited(from, amount)?;
        let supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or_else(|| ReserveError::invalid("ledger supply is below a holder balance"))?;

        self.set_balance(*from, balance);
        self.total_supply = supply;
        tracing::trace!(account = %from, %amount, supply = %supply, "ledger burn");
        Ok(())
    }

    fn transfer(&mut self, from: &AccountId, to: &AccountId, amount: Amount) -> ReserveResult<()> {
        let sender_balance = self.debited(from, amount)?;
        if from == to {
            return Ok(());
        }
        let recipient_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or_else(|| ReserveError::invalid("recipient balance overflows"))?;

        self.set_balance(*from, sender_balance);
        self.set_balance(*to, recipient_balance);
        tracing::trace!(%from, %to, %amount, "ledger transfer");
        Ok(())
    }

    fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }
}
