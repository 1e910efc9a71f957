//! Reserve-chain transaction Merkle trees
//!
//! Leaves are txids in internal byte order and interior nodes are
//! `sha256d(left || right)`. A level with an odd count pairs its last node
//! with itself.

use reserve_core::hash::merkle_parent;
use reserve_core::{MerklePath, ReserveError, ReserveResult, Txid, MAX_MERKLE_PATH_LEN};

/// Root of the tree over `txids`, or `None` for an empty block
pub fn merkle_root(txids: &[Txid]) -> Option<[u8; 32]> {
    let mut level: Vec<[u8; 32]> = txids.iter().map(|txid| *txid.as_bytes()).collect();
    if level.is_empty() {
        return None;
    }
    while level.len() > 1 {
        level = next_level(&level);
    }
    level.first().copied()
}

/// Sibling path for the transaction at `index`, and the tree depth
pub fn merkle_path(txids: &[Txid], index: usize) -> ReserveResult<(MerklePath, u32)> {
    if index >= txids.len() {
        return Err(ReserveError::invalid(format!(
            "tx index {index} out of range for {} transactions",
            txids.len()
        )));
    }

    let mut level: Vec<[u8; 32]> = txids.iter().map(|txid| *txid.as_bytes()).collect();
    let mut siblings = Vec::with_capacity(MAX_MERKLE_PATH_LEN);
    let mut position = index;

    while level.len() > 1 {
        let sibling = position ^ 1;
        // Odd level: the last node is its own sibling
        siblings.push(level.get(sibling).copied().unwrap_or(level[position]));
        level = next_level(&level);
        position /= 2;
    }

    let depth = siblings.len() as u32;
    Ok((MerklePath::new(siblings)?, depth))
}

/// Fold a leaf up a sibling path, using the bits of `index` for direction
pub fn root_from_path(txid: &Txid, index: u32, path: &MerklePath) -> [u8; 32] {
    let mut current = *txid.as_bytes();
    let mut position = index;
    for sibling in path.siblings() {
        current = if position & 1 == 0 {
            merkle_parent(&current, sibling)
        } else {
            merkle_parent(sibling, &current)
        };
        position >>= 1;
    }
    current
}

fn next_level(level: &[[u8; 32]]) -> Vec<[u8; 32]> {
    level
        .chunks(2)
        .map(|pair| {
            let left = &pair[0];
            merkle_parent(left, pair.get(1).unwrap_or(left))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txids(n: u8) -> Vec<Txid> {
        (0..n).map(|i| Txid::of_transaction(&[i])).collect()
    }

    #[test]
    fn single_transaction_root_is_the_txid() {
        let txs = txids(1);
        assert_eq!(merkle_root(&txs), Some(*txs[0].as_bytes()));
        let (path, depth) = merkle_path(&txs, 0).unwrap();
        assert!(path.is_empty());
        assert_eq!(depth, 0);
    }

    #[test]
    fn every_leaf_folds_to_the_root() {
        for n in 1..=9u8 {
            let txs = txids(n);
            let root = merkle_root(&txs).unwrap();
            for (i, txid) in txs.iter().enumerate() {
                let (path, _) = merkle_path(&txs, i).unwrap();
                assert_eq!(root_from_path(txid, i as u32, &path), root, "n={n} i={i}");
            }
        }
    }

    #[test]
    fn odd_level_duplicates_last_node() {
        let txs = txids(3);
        let left = merkle_parent(txs[0].as_bytes(), txs[1].as_bytes());
        let right = merkle_parent(txs[2].as_bytes(), txs[2].as_bytes());
        assert_eq!(merkle_root(&txs), Some(merkle_parent(&left, &right)));
    }

    #[test]
    fn wrong_index_does_not_fold_to_root() {
        let txs = txids(4);
        let root = merkle_root(&txs).unwrap();
        let (path, _) = merkle_path(&txs, 1).unwrap();
        assert_ne!(root_from_path(&txs[1], 0, &path), root);
    }

    #[test]
    fn empty_block_has_no_root() {
        assert_eq!(merkle_root(&[]), None);
        assert!(merkle_path(&[], 0).is_err());
    }
}
