//! Recognized reserve-chain headers
//!
//! The verifier does not validate headers itself. It asks a [`HeaderSource`]
//! which block hash the recognized chain has at a height; whoever implements
//! the source owns proof-of-work, difficulty and chain linkage.

use reserve_core::{BlockHeader, VerificationError};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Oracle for the recognized reserve chain
pub trait HeaderSource {
    /// Block hash (internal byte order) at `height`, `None` if unknown
    fn block_hash_at(&self, height: u64) -> Result<Option<[u8; 32]>, VerificationError>;
}

impl<H: HeaderSource + ?Sized> HeaderSource for &H {
    fn block_hash_at(&self, height: u64) -> Result<Option<[u8; 32]>, VerificationError> {
        (**self).block_hash_at(height)
    }
}

impl<H: HeaderSource + ?Sized> HeaderSource for Arc<H> {
    fn block_hash_at(&self, height: u64) -> Result<Option<[u8; 32]>, VerificationError> {
        (**self).block_hash_at(height)
    }
}

/// Trusted header set held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryHeaderSource {
    hashes: BTreeMap<u64, [u8; 32]>,
}

impl InMemoryHeaderSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognize `header` at `height`, replacing any previous entry
    pub fn insert(&mut self, height: u64, header: &BlockHeader) {
        self.hashes.insert(height, header.block_hash());
    }

    /// Builder form of [`InMemoryHeaderSource::insert`]
    pub fn with_header(mut self, height: u64, header: &BlockHeader) -> Self {
        self.insert(height, header);
        self
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

impl FromIterator<(u64, BlockHeader)> for InMemoryHeaderSource {
    fn from_iter<I: IntoIterator<Item = (u64, BlockHeader)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (height, header) in iter {
            source.insert(height, &header);
        }
        source
    }
}

impl HeaderSource for InMemoryHeaderSource {
    fn block_hash_at(&self, height: u64) -> Result<Option<[u8; 32]>, VerificationError> {
        Ok(self.hashes.get(&height).copied())
    }
}
