//! Reserve Issuance
//!
//! The issuance gateway: the only mutation surface of the wrapped token.
//! It composes an `AccessControl`, an `InclusionVerifier` and a `Ledger`,
//! and reports committed mints, burns and memo transfers to an `AuditSink`.
//!
//! Check order per entry point:
//! - mint: authorization, proof, ledger
//! - burn: authorization, positive amount, proof, ledger
//! - transfer: authorization, positive amount, ledger
//!
//! ```rust,ignore
//! let mut gateway = IssuanceGateway::genesis(controller, TokenMetadata::default(), verifier);
//! gateway.request_mint(&controller, amount, &alice, &claim)?;
//! ```

#![allow(missing_docs)]
#![forbid(unsafe_code)]

/// Proof-gated issuance gateway
pub mod gateway;

/// Audit sink implementations
pub mod sinks;

/// Whole-gateway snapshots
pub mod snapshot;

pub use gateway::IssuanceGateway;
pub use sinks::{AuditLog, Tee, TracingAuditSink};
pub use snapshot::IssuanceSnapshot;
