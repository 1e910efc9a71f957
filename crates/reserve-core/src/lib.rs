//! Reserve Core - shared foundation for reserve-backed token issuance
//!
//! This crate holds the vocabulary every other crate speaks and nothing that
//! mutates state:
//!
//! - `AccountId`, fixed-point `Amount`, and the `MAX_SUPPLY` constant
//! - Reserve-chain primitives: `Txid`, `BlockHeader`, `MerklePath`, `InclusionClaim`
//! - The three interfaces the gateway composes: `AccessControl`, `Ledger`,
//!   `InclusionVerifier`
//! - Audit notifications and the `AuditSink` interface
//! - The unified `ReserveError`
//! - Token metadata and layered configuration

#![allow(missing_docs)]
#![forbid(unsafe_code)]

/// Fixed-point amounts and the supply cap
pub mod amount;

/// Audit notifications and memos
pub mod audit;

/// Reserve-chain primitives
pub mod chain;

/// Genesis and operator configuration
pub mod config;

/// Pure interfaces (no implementations)
pub mod effects;

/// Unified error handling
pub mod errors;

/// Double SHA-256 helpers
pub mod hash;

/// Account identifiers
pub mod identifiers;

/// Token metadata and reserve wallet key
pub mod metadata;

pub use amount::{Amount, ParseAmountError, BASE_UNITS_PER_TOKEN, DECIMALS, MAX_SUPPLY};
pub use audit::{AuditEvent, AuditSink, Memo, MAX_MEMO_LEN};
pub use chain::{
    BlockHeader, InclusionClaim, MerklePath, Txid, BLOCK_HEADER_LENGTH, MAX_MERKLE_PATH_LEN,
    TXID_LENGTH,
};
pub use config::ReserveConfig;
pub use effects::{AccessControl, InclusionVerifier, Ledger, VerificationError};
pub use errors::{ErrorKind, ReserveError, Result as ReserveResult};
pub use identifiers::AccountId;
pub use metadata::{ReservePublicKey, TokenMetadata};
