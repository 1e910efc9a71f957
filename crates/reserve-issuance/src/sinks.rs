//! Audit sink implementations

use reserve_core::{AuditEvent, AuditSink};

/// Ordered in-memory record of every notification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditLog {
    events: Vec<AuditEvent>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications in emission order
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Most recent notification
    pub fn last(&self) -> Option<&AuditEvent> {
        self.events.last()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&mut self) -> Vec<AuditEvent> {
        std::mem::take(&mut self.events)
    }
}

impl AuditSink for AuditLog {
    fn emit(&mut self, event: AuditEvent) {
        self.events.push(event);
    }
}

/// Mirrors notifications into the `tracing` stream at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn emit(&mut self, event: AuditEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => tracing::info!(kind = event.kind(), payload = %json, "audit"),
            Err(err) => tracing::warn!(kind = event.kind(), error = %err, "audit event not encodable"),
        }
    }
}

/// Delivers every notification to two sinks, first `A` then `B`
#[derive(Debug, Clone, Default)]
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: AuditSink, B: AuditSink> AuditSink for Tee<A, B> {
    fn emit(&mut self, event: AuditEvent) {
        self.first.emit(event.clone());
        self.second.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reserve_core::Txid;

    #[test]
    fn tee_delivers_to_both() {
        let mut tee = Tee::new(AuditLog::new(), AuditLog::new());
        tee.emit(AuditEvent::Burn(Txid::from_bytes([4u8; 32])));
        assert_eq!(tee.first.len(), 1);
        assert_eq!(tee.first, tee.second);
    }

    #[test]
    fn drain_empties_the_log() {
        let mut log = AuditLog::new();
        log.emit(AuditEvent::Mint(Txid::from_bytes([1u8; 32])));
        assert_eq!(log.drain().len(), 1);
        assert!(log.is_empty());
    }
}
