//! Single-controller access gate

use reserve_core::{AccessControl, AccountId, ReserveError, ReserveResult};
use serde::{Deserialize, Serialize};

/// Holds the one identity allowed to mutate the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGate {
    controller: AccountId,
}

impl AccessGate {
    /// Create a gate controlled by the deploying identity
    pub fn new(controller: AccountId) -> Self {
        Self { controller }
    }
}

impl AccessControl for AccessGate {
    fn controller(&self) -> AccountId {
        self.controller
    }

    fn rotate(&mut self, caller: &AccountId, new_controller: AccountId) -> ReserveResult<()> {
        if !self.is_authorized(caller) {
            return Err(ReserveError::forbidden(*caller));
        }
        tracing::debug!(from = %self.controller, to = %new_controller, "controller rotated");
        self.controller = new_controller;
        Ok(())
    }
}
