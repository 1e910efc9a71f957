//! Whole-gateway snapshots

use reserve_core::{AccountId, ReservePublicKey};
use reserve_ledger::LedgerSnapshot;
use serde::{Deserialize, Serialize};

/// Every persisted entity of a gateway: controller, reserve key, ledger.
///
/// Metadata and the verifier are supplied again on restore; they are
/// genesis inputs, not state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceSnapshot {
    /// Controller at snapshot time
    pub controller: AccountId,
    /// Reserve wallet key metadata
    pub reserve_public_key: Option<ReservePublicKey>,
    /// Balances and supply
    pub ledger: LedgerSnapshot,
}
