//! Reserve-chain primitives
//!
//! Size invariants (32-byte txids, 80-byte headers, bounded Merkle paths) are
//! enforced at construction, so an [`InclusionClaim`] that exists is always
//! structurally well-formed. Whether it is *true* is the verifier's call.

use crate::errors::{ReserveError, Result};
use crate::hash::{sha256d, HASH_LENGTH};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of a transaction id in bytes
pub const TXID_LENGTH: usize = HASH_LENGTH;

/// Length of a serialized block header in bytes
pub const BLOCK_HEADER_LENGTH: usize = 80;

/// Maximum number of sibling hashes in a Merkle path.
///
/// Bounds verification cost; 14 levels covers blocks of up to 16384
/// transactions.
pub const MAX_MERKLE_PATH_LEN: usize = 14;

fn decode_fixed<const N: usize>(s: &str, what: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(s)?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        ReserveError::invalid(format!("{what} must be {N} bytes, got {}", bytes.len()))
    })
}

/// Reserve-chain transaction id, stored in internal byte order.
///
/// `Display`/`FromStr` use the reversed byte order that block explorers and
/// node RPCs show.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Txid([u8; TXID_LENGTH]);

impl Txid {
    /// Wrap raw bytes in internal byte order
    pub const fn from_bytes(bytes: [u8; TXID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Raw bytes in internal byte order
    pub fn as_bytes(&self) -> &[u8; TXID_LENGTH] {
        &self.0
    }

    /// Txid of a serialized transaction
    pub fn of_transaction(raw_tx: &[u8]) -> Self {
        Self(sha256d(raw_tx))
    }
}

impl fmt::Display for Txid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&hex::encode(reversed))
    }
}

impl fmt::Debug for Txid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Txid({self})")
    }
}

impl FromStr for Txid {
    type Err = ReserveError;

    fn from_str(s: &str) -> Result<Self> {
        let mut bytes = decode_fixed::<TXID_LENGTH>(s, "txid")?;
        bytes.reverse();
        Ok(Self(bytes))
    }
}

impl Serialize for Txid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Txid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Serialized 80-byte reserve-chain block header.
///
/// Layout: version (4, LE) | previous block hash (32) | Merkle root (32) |
/// time (4, LE) | bits (4, LE) | nonce (4, LE).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHeader([u8; BLOCK_HEADER_LENGTH]);

impl BlockHeader {
    /// Parse from exactly [`BLOCK_HEADER_LENGTH`] bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; BLOCK_HEADER_LENGTH] = bytes.try_into().map_err(|_| {
            ReserveError::invalid(format!(
                "block header must be {BLOCK_HEADER_LENGTH} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(raw))
    }

    /// Assemble a header from its fields
    pub fn from_parts(
        version: i32,
        prev_block_hash: [u8; 32],
        merkle_root: [u8; 32],
        time: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        let mut raw = [0u8; BLOCK_HEADER_LENGTH];
        raw[0..4].copy_from_slice(&version.to_le_bytes());
        raw[4..36].copy_from_slice(&prev_block_hash);
        raw[36..68].copy_from_slice(&merkle_root);
        raw[68..72].copy_from_slice(&time.to_le_bytes());
        raw[72..76].copy_from_slice(&bits.to_le_bytes());
        raw[76..80].copy_from_slice(&nonce.to_le_bytes());
        Self(raw)
    }

    /// Raw serialized header
    pub fn as_bytes(&self) -> &[u8; BLOCK_HEADER_LENGTH] {
        &self.0
    }

    fn word(&self, offset: usize) -> [u8; 4] {
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.0[offset..offset + 4]);
        word
    }

    fn hash_field(&self, offset: usize) -> [u8; 32] {
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&self.0[offset..offset + 32]);
        hash
    }

    pub fn version(&self) -> i32 {
        i32::from_le_bytes(self.word(0))
    }

    pub fn prev_block_hash(&self) -> [u8; 32] {
        self.hash_field(4)
    }

    /// Merkle root committed to by this header, internal byte order
    pub fn merkle_root(&self) -> [u8; 32] {
        self.hash_field(36)
    }

    pub fn time(&self) -> u32 {
        u32::from_le_bytes(self.word(68))
    }

    pub fn bits(&self) -> u32 {
        u32::from_le_bytes(self.word(72))
    }

    pub fn nonce(&self) -> u32 {
        u32::from_le_bytes(self.word(76))
    }

    /// Block hash (`sha256d` of the header), internal byte order
    pub fn block_hash(&self) -> [u8; 32] {
        sha256d(&self.0)
    }
}

impl fmt::Debug for BlockHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hash = self.block_hash();
        hash.reverse();
        write!(f, "BlockHeader({})", hex::encode(hash))
    }
}

impl FromStr for BlockHeader {
    type Err = ReserveError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(s)?)
    }
}

impl Serialize for BlockHeader {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for BlockHeader {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Ordered sibling hashes from leaf to root, internal byte order.
///
/// Never longer than [`MAX_MERKLE_PATH_LEN`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MerklePath(Vec<[u8; HASH_LENGTH]>);

impl MerklePath {
    /// Create a path, rejecting anything longer than [`MAX_MERKLE_PATH_LEN`]
    pub fn new(siblings: Vec<[u8; HASH_LENGTH]>) -> Result<Self> {
        if siblings.len() > MAX_MERKLE_PATH_LEN {
            return Err(ReserveError::invalid(format!(
                "merkle path has {} hashes, maximum is {MAX_MERKLE_PATH_LEN}",
                siblings.len()
            )));
        }
        Ok(Self(siblings))
    }

    pub fn siblings(&self) -> &[[u8; HASH_LENGTH]] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for MerklePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(hex::encode))
    }
}

impl<'de> Deserialize<'de> for MerklePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let encoded = Vec::<String>::deserialize(deserializer)?;
        let siblings = encoded
            .iter()
            .map(|s| decode_fixed::<HASH_LENGTH>(s, "merkle sibling"))
            .collect::<Result<Vec<_>>>()
            .map_err(de::Error::custom)?;
        Self::new(siblings).map_err(de::Error::custom)
    }
}

/// Claim that a reserve-chain transaction is included in a block.
///
/// Ephemeral: built per mint/burn request, consumed by the verifier, never
/// stored by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionClaim {
    /// Transaction claimed to be included
    pub txid: Txid,
    /// Height of the block the claim points at
    pub claimed_height: u64,
    /// Sibling hashes from the transaction leaf to the root
    pub merkle_path: MerklePath,
    /// Position of the transaction within the block
    pub tx_index: u32,
    /// Depth of the block's transaction tree
    pub tree_depth: u32,
    /// Header of the block the transaction is claimed to be in
    pub block_header: BlockHeader,
}
