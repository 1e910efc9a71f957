//! Replay scripts
//!
//! A script is a JSON document naming the reserve-chain headers the operator
//! trusts and an ordered list of gateway operations:
//!
//! ```json
//! {
//!   "headers": [{ "height": 840000, "header": "<160 hex chars>" }],
//!   "operations": [
//!     { "op": "mint", "caller": "controller", "amount": "5", "to": "alice", "claim": { ... } },
//!     { "op": "transfer", "caller": "controller", "amount": "1.5", "from": "alice", "to": "bob", "memo": "cafe" }
//!   ]
//! }
//! ```
//!
//! Accounts are UUIDs or names; a name always maps to the same account.
//! Amounts are decimal token strings with up to eight fractional digits.

use reserve_core::{
    AccountId, Amount, BlockHeader, InclusionClaim, Memo, ReserveError, ReserveResult,
    ReservePublicKey,
};
use reserve_verify::InMemoryHeaderSource;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Header the operator has already validated out of band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedHeader {
    pub height: u64,
    pub header: BlockHeader,
}

/// One gateway call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Operation {
    Mint {
        caller: String,
        amount: Amount,
        to: String,
        claim: InclusionClaim,
    },
    Burn {
        caller: String,
        amount: Amount,
        from: String,
        claim: InclusionClaim,
    },
    Transfer {
        caller: String,
        amount: Amount,
        from: String,
        to: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        memo: Option<Memo>,
    },
    RotateOwner {
        caller: String,
        new_owner: String,
    },
    SetReserveKey {
        caller: String,
        key: ReservePublicKey,
    },
}

impl Operation {
    /// Tag as written in the script
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Mint { .. } => "mint",
            Operation::Burn { .. } => "burn",
            Operation::Transfer { .. } => "transfer",
            Operation::RotateOwner { .. } => "rotate-owner",
            Operation::SetReserveKey { .. } => "set-reserve-key",
        }
    }

    /// Identity the operation is submitted as
    pub fn caller(&self) -> AccountId {
        let caller = match self {
            Operation::Mint { caller, .. }
            | Operation::Burn { caller, .. }
            | Operation::Transfer { caller, .. }
            | Operation::RotateOwner { caller, .. }
            | Operation::SetReserveKey { caller, .. } => caller,
        };
        account(caller)
    }
}

/// Trusted headers plus the operations to replay in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub headers: Vec<TrustedHeader>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl ReplayScript {
    pub fn from_json(content: &str) -> ReserveResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a script file
    pub fn load(path: &Path) -> ReserveResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReserveError::invalid(format!("Failed to read script {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Header oracle recognizing exactly the script's trusted headers
    pub fn header_source(&self) -> InMemoryHeaderSource {
        self.headers
            .iter()
            .map(|trusted| (trusted.height, trusted.header))
            .collect()
    }
}

/// Resolve a script account reference
pub fn account(reference: &str) -> AccountId {
    AccountId::parse_or_named(reference.trim())
}
