//! Merkle inclusion verifier

use crate::headers::HeaderSource;
use crate::tree::root_from_path;
use reserve_core::{InclusionClaim, InclusionVerifier, VerificationError};

/// Verifies a claim's Merkle path against its header, then asks a
/// [`HeaderSource`] whether that header is on the recognized chain.
///
/// Stateless: the same valid claim verifies every time it is presented.
#[derive(Debug, Clone)]
pub struct MerkleInclusionVerifier<H> {
    headers: H,
}

impl<H: HeaderSource> MerkleInclusionVerifier<H> {
    pub fn new(headers: H) -> Self {
        Self { headers }
    }

    pub fn headers(&self) -> &H {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut H {
        &mut self.headers
    }

    fn check_shape(claim: &InclusionClaim) -> Result<(), VerificationError> {
        let path_len = claim.merkle_path.len();
        if claim.tree_depth as usize != path_len {
            return Err(VerificationError::malformed(format!(
                "tree depth {} does not match path length {path_len}",
                claim.tree_depth
            )));
        }
        // Path length is bounded well below 32, so the shift cannot overflow
        let leaves = 1u64 << claim.tree_depth;
        if u64::from(claim.tx_index) >= leaves {
            return Err(VerificationError::malformed(format!(
                "tx index {} exceeds a tree of depth {}",
                claim.tx_index, claim.tree_depth
            )));
        }
        Ok(())
    }
}

impl<H: HeaderSource> InclusionVerifier for MerkleInclusionVerifier<H> {
    fn verify(&self, claim: &InclusionClaim) -> Result<bool, VerificationError> {
        Self::check_shape(claim)?;

        let root = root_from_path(&claim.txid, claim.tx_index, &claim.merkle_path);
        if root != claim.block_header.merkle_root() {
            tracing::debug!(txid = %claim.txid, "merkle path does not reach header root");
            return Ok(false);
        }

        let recognized = self.headers.block_hash_at(claim.claimed_height)?;
        match recognized {
            Some(hash) if hash == claim.block_header.block_hash() => Ok(true),
            Some(_) => {
                tracing::debug!(
                    txid = %claim.txid,
                    height = claim.claimed_height,
                    "header is not the recognized block at claimed height"
                );
                Ok(false)
            }
            None => {
                tracing::debug!(height = claim.claimed_height, "no recognized block at height");
                Ok(false)
            }
        }
    }
}
