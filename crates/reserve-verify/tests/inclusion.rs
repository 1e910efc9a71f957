//! End-to-end checks of the Merkle inclusion verifier against synthetic blocks

use assert_matches::assert_matches;
use proptest::prelude::*;
use reserve_core::{InclusionVerifier, MerklePath, Txid, VerificationError};
use reserve_testkit::SyntheticBlock;
use reserve_verify::{InMemoryHeaderSource, MerkleInclusionVerifier};

fn verifier_for(blocks: &[&SyntheticBlock]) -> MerkleInclusionVerifier<InMemoryHeaderSource> {
    MerkleInclusionVerifier::new(
        blocks
            .iter()
            .map(|block| (block.height, block.header))
            .collect(),
    )
}

#[test]
fn accepts_every_transaction_of_a_recognized_block() {
    let block = SyntheticBlock::with_transactions(800_000, 7);
    let verifier = verifier_for(&[&block]);

    for index in 0..block.txids.len() {
        let claim = block.claim(index).unwrap();
        assert_eq!(verifier.verify(&claim), Ok(true), "index {index}");
    }
}

#[test]
fn rejects_transaction_not_in_block() {
    let block = SyntheticBlock::with_transactions(800_000, 4);
    let verifier = verifier_for(&[&block]);

    let mut claim = block.claim(2).unwrap();
    claim.txid = Txid::of_transaction(b"never broadcast");
    assert_eq!(verifier.verify(&claim), Ok(false));
}

#[test]
fn rejects_unrecognized_header() {
    let block = SyntheticBlock::with_transactions(800_000, 4);
    let verifier = verifier_for(&[]);
    assert_eq!(verifier.verify(&block.claim(0).unwrap()), Ok(false));
}

#[test]
fn rejects_header_claimed_at_wrong_height() {
    let block = SyntheticBlock::with_transactions(800_000, 4);
    let other = SyntheticBlock::with_transactions(800_001, 2);
    let verifier = verifier_for(&[&block, &other]);

    let mut claim = block.claim(1).unwrap();
    claim.claimed_height = other.height;
    assert_eq!(verifier.verify(&claim), Ok(false));
}

#[test]
fn rejects_tampered_path() {
    let block = SyntheticBlock::with_transactions(800_000, 8);
    let verifier = verifier_for(&[&block]);

    let mut claim = block.claim(3).unwrap();
    let mut siblings = claim.merkle_path.siblings().to_vec();
    siblings[1][0] ^= 0x01;
    claim.merkle_path = MerklePath::new(siblings).unwrap();
    assert_eq!(verifier.verify(&claim), Ok(false));
}

#[test]
fn depth_mismatch_is_malformed() {
    let block = SyntheticBlock::with_transactions(800_000, 4);
    let verifier = verifier_for(&[&block]);

    let mut claim = block.claim(0).unwrap();
    claim.tree_depth += 1;
    assert_matches!(
        verifier.verify(&claim),
        Err(VerificationError::MalformedClaim { .. })
    );
}

#[test]
fn index_beyond_tree_is_malformed() {
    let block = SyntheticBlock::with_transactions(800_000, 4);
    let verifier = verifier_for(&[&block]);

    let mut claim = block.claim(0).unwrap();
    claim.tx_index = 4;
    assert_matches!(
        verifier.verify(&claim),
        Err(VerificationError::MalformedClaim { .. })
    );
}

#[test]
fn same_claim_verifies_repeatedly() {
    let block = SyntheticBlock::with_transactions(800_000, 3);
    let verifier = verifier_for(&[&block]);
    let claim = block.claim(2).unwrap();
    assert_eq!(verifier.verify(&claim), Ok(true));
    assert_eq!(verifier.verify(&claim), Ok(true));
}

proptest! {
    #[test]
    fn swapped_index_never_verifies(size in 2usize..64, pick in any::<prop::sample::Index>()) {
        let block = SyntheticBlock::with_transactions(1, size);
        let verifier = verifier_for(&[&block]);
        let index = pick.index(size);

        let mut claim = block.claim(index).unwrap();
        prop_assert_eq!(verifier.verify(&claim), Ok(true));

        // A duplicated last node is its own sibling, so direction is moot
        let self_paired = claim.merkle_path.siblings()[0] == *claim.txid.as_bytes();
        claim.tx_index ^= 1;
        if !self_paired {
            prop_assert_eq!(verifier.verify(&claim), Ok(false));
        }
    }
}
