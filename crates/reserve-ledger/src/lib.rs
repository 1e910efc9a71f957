//! Reserve Ledger
//!
//! State-holding implementations of two of the three gateway interfaces:
//! - `AccessGate` implements `AccessControl` for a single controller
//! - `TokenLedger` implements `Ledger` under the fixed `MAX_SUPPLY` cap
//!
//! Neither type locks. Callers are expected to serialize mutations; every
//! method runs to completion without yielding.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

/// Single-controller access gate
pub mod gate;

/// Capped token ledger
pub mod ledger;

/// Serializable ledger snapshots
pub mod snapshot;

pub use gate::AccessGate;
pub use ledger::TokenLedger;
pub use snapshot::LedgerSnapshot;
