//! Reserve-chain hashing
//!
//! The reserve chain commits to transactions and headers with double SHA-256.
//! All callers go through these helpers so the algorithm lives in one place.

use sha2::{Digest, Sha256};

/// Length of every digest produced here
pub const HASH_LENGTH: usize = 32;

/// Single SHA-256
pub fn sha256(data: &[u8]) -> [u8; HASH_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Double SHA-256, `SHA256(SHA256(data))`
pub fn sha256d(data: &[u8]) -> [u8; HASH_LENGTH] {
    sha256(&sha256(data))
}

/// Interior Merkle node: `sha256d(left || right)`
pub fn merkle_parent(left: &[u8; HASH_LENGTH], right: &[u8; HASH_LENGTH]) -> [u8; HASH_LENGTH] {
    let mut combined = [0u8; HASH_LENGTH * 2];
    combined[..HASH_LENGTH].copy_from_slice(left);
    combined[HASH_LENGTH..].copy_from_slice(right);
    sha256d(&combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256d_of_empty_input() {
        assert_eq!(
            hex::encode(sha256d(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn merkle_parent_is_order_sensitive() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        assert_ne!(merkle_parent(&a, &b), merkle_parent(&b, &a));
    }
}
