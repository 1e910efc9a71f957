//! Reserve Testing Infrastructure
//!
//! Shared fixtures so no test hand-rolls a verifier or a Merkle tree.
//!
//! ```toml
//! [dev-dependencies]
//! reserve-testkit = { workspace = true }
//! ```

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod accounts;
pub mod blocks;
pub mod logging;
pub mod verifiers;

pub use accounts::*;
pub use blocks::SyntheticBlock;
pub use logging::init_test_tracing;
pub use verifiers::{CountingVerifier, ScriptedVerifier, Verdict};
