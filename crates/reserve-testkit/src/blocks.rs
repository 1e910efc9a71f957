//! Synthetic reserve-chain blocks
//!
//! Headers carry a genuine Merkle root over their txids, so claims built
//! here pass `MerkleInclusionVerifier` once the header is recognized.

use reserve_core::{BlockHeader, InclusionClaim, ReserveError, ReserveResult, Txid};
use reserve_verify::tree::{merkle_path, merkle_root};
use reserve_verify::InMemoryHeaderSource;

/// Difficulty bits of the reserve chain's minimum difficulty
const MIN_DIFFICULTY_BITS: u32 = 0x1d00_ffff;

/// A block with a real Merkle root and no proof of work
#[derive(Debug, Clone)]
pub struct SyntheticBlock {
    pub height: u64,
    pub header: BlockHeader,
    pub txids: Vec<Txid>,
}

impl SyntheticBlock {
    /// Build a block over explicit txids
    pub fn with_txids(height: u64, txids: Vec<Txid>) -> Self {
        let root = merkle_root(&txids).unwrap_or_default();
        let header = BlockHeader::from_parts(
            0x2000_0000,
            [0u8; 32],
            root,
            1_700_000_000u32.wrapping_add(height as u32),
            MIN_DIFFICULTY_BITS,
            height as u32,
        );
        Self {
            height,
            header,
            txids,
        }
    }

    /// Build a block of `count` distinct filler transactions
    pub fn with_transactions(height: u64, count: usize) -> Self {
        let txids = (0..count)
            .map(|i| {
                let mut raw = height.to_le_bytes().to_vec();
                raw.extend_from_slice(&(i as u64).to_le_bytes());
                Txid::of_transaction(&raw)
            })
            .collect();
        Self::with_txids(height, txids)
    }

    /// Block whose transactions include `txid` among a few fillers
    pub fn containing(height: u64, txid: Txid) -> Self {
        let mut block = Self::with_transactions(height, 5);
        block.txids[3] = txid;
        Self::with_txids(height, block.txids)
    }

    /// Inclusion claim for the transaction at `index`
    pub fn claim(&self, index: usize) -> ReserveResult<InclusionClaim> {
        let (path, depth) = merkle_path(&self.txids, index)?;
        Ok(InclusionClaim {
            txid: self.txids[index],
            claimed_height: self.height,
            merkle_path: path,
            tx_index: index as u32,
            tree_depth: depth,
            block_header: self.header,
        })
    }

    /// Inclusion claim for `txid`, which must be in the block
    pub fn claim_for(&self, txid: &Txid) -> ReserveResult<InclusionClaim> {
        let index = self
            .txids
            .iter()
            .position(|candidate| candidate == txid)
            .ok_or_else(|| ReserveError::invalid(format!("{txid} is not in block {}", self.height)))?;
        self.claim(index)
    }

    /// Header source recognizing just this block
    pub fn header_source(&self) -> InMemoryHeaderSource {
        InMemoryHeaderSource::new().with_header(self.height, &self.header)
    }
}
