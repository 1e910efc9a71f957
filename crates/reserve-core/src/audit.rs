//! Audit notifications
//!
//! Notifications are the only observable effect of a committed operation
//! beyond state queries. They are emitted after the ledger commits and are
//! never persisted by the ledger itself.

use crate::chain::Txid;
use crate::errors::{ReserveError, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum memo length in bytes
pub const MAX_MEMO_LEN: usize = 34;

/// Opaque transfer memo, at most [`MAX_MEMO_LEN`] bytes
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Memo(Vec<u8>);

impl Memo {
    /// Create a memo, rejecting anything longer than [`MAX_MEMO_LEN`]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.len() > MAX_MEMO_LEN {
            return Err(ReserveError::invalid(format!(
                "memo is {} bytes, maximum is {MAX_MEMO_LEN}",
                bytes.len()
            )));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Memo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Memo({})", hex::encode(&self.0))
    }
}

impl Serialize for Memo {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Memo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(s).map_err(de::Error::custom)?;
        Self::new(bytes).map_err(de::Error::custom)
    }
}

/// Structured audit notification
///
/// Serializes as `{ "kind": "mint" | "burn" | "transfer-memo", "payload": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "kebab-case")]
pub enum AuditEvent {
    /// Supply increased against a reserve deposit
    Mint(Txid),
    /// Supply decreased against a reserve withdrawal
    Burn(Txid),
    /// Memo attached to a transfer, verbatim
    TransferMemo(Memo),
}

impl AuditEvent {
    /// Notification tag as it appears on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            AuditEvent::Mint(_) => "mint",
            AuditEvent::Burn(_) => "burn",
            AuditEvent::TransferMemo(_) => "transfer-memo",
        }
    }
}

/// Receiver of audit notifications
pub trait AuditSink {
    /// Record a notification. Infallible: a committed operation cannot be
    /// undone because its notification could not be delivered.
    fn emit(&mut self, event: AuditEvent);
}

impl<S: AuditSink + ?Sized> AuditSink for &mut S {
    fn emit(&mut self, event: AuditEvent) {
        (**self).emit(event);
    }
}

impl<S: AuditSink + ?Sized> AuditSink for Box<S> {
    fn emit(&mut self, event: AuditEvent) {
        (**self).emit(event);
    }
}
