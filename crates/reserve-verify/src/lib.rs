//! Reserve Verify
//!
//! Reference implementation of `InclusionVerifier`:
//! - `tree`: reserve-chain Merkle roots and sibling paths
//! - `headers`: the `HeaderSource` oracle for recognized blocks
//! - `verifier`: `MerkleInclusionVerifier`, which ties the two together
//!
//! A verdict of `Ok(false)` means "well-formed claim, not proven"; `Err`
//! means the claim could not be evaluated at all. The gateway treats both as
//! a rejected proof.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

/// Recognized-header oracle
pub mod headers;

/// Merkle tree construction and path folding
pub mod tree;

/// Merkle inclusion verifier
pub mod verifier;

pub use headers::{HeaderSource, InMemoryHeaderSource};
pub use verifier::MerkleInclusionVerifier;
