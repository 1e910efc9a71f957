//! Proof-gated issuance gateway
//!
//! Each entry point is all-or-nothing: authorization and proof checks run
//! before the single ledger mutation, and the audit notification is emitted
//! only after that mutation commits. A failure at any step leaves balances,
//! supply and controller exactly as they were.
//!
//! The gateway does no locking. The host serializes calls, which `&mut self`
//! on every mutating entry point makes explicit.

use crate::sinks::AuditLog;
use crate::snapshot::IssuanceSnapshot;
use reserve_core::{
    AccessControl, AccountId, Amount, AuditEvent, AuditSink, InclusionClaim, InclusionVerifier,
    Ledger, Memo, ReserveConfig, ReserveError, ReserveResult, ReservePublicKey, TokenMetadata,
};
use reserve_ledger::{AccessGate, TokenLedger};

/// Composes access control, inclusion verification and the token ledger
#[derive(Debug)]
pub struct IssuanceGateway<V, G = AccessGate, L = TokenLedger, S = AuditLog> {
    metadata: TokenMetadata,
    gate: G,
    ledger: L,
    verifier: V,
    audit: S,
    reserve_public_key: Option<ReservePublicKey>,
}

impl<V: InclusionVerifier> IssuanceGateway<V> {
    /// Fresh gateway: empty ledger, `controller` as the deploying identity
    pub fn genesis(controller: AccountId, metadata: TokenMetadata, verifier: V) -> Self {
        Self::from_parts(
            metadata,
            AccessGate::new(controller),
            TokenLedger::new(),
            verifier,
            AuditLog::new(),
        )
    }

    /// Fresh gateway from validated configuration
    pub fn from_config(config: &ReserveConfig, verifier: V) -> ReserveResult<Self> {
        config.validate()?;
        let mut gateway = Self::genesis(config.controller(), config.token_metadata(), verifier);
        gateway.reserve_public_key = config.reserve_public_key()?;
        Ok(gateway)
    }

    /// Rebuild a gateway from a snapshot, re-checking ledger invariants
    pub fn restore(
        snapshot: IssuanceSnapshot,
        metadata: TokenMetadata,
        verifier: V,
    ) -> ReserveResult<Self> {
        let ledger = TokenLedger::from_snapshot(snapshot.ledger)?;
        let mut gateway = Self::from_parts(
            metadata,
            AccessGate::new(snapshot.controller),
            ledger,
            verifier,
            AuditLog::new(),
        );
        gateway.reserve_public_key = snapshot.reserve_public_key;
        Ok(gateway)
    }
}

impl<V, S> IssuanceGateway<V, AccessGate, TokenLedger, S> {
    /// Point-in-time copy of every persisted entity
    pub fn snapshot(&self) -> IssuanceSnapshot {
        IssuanceSnapshot {
            controller: self.gate.controller(),
            reserve_public_key: self.reserve_public_key,
            ledger: self.ledger.snapshot(),
        }
    }
}

impl<V, G, L, S> IssuanceGateway<V, G, L, S>
where
    V: InclusionVerifier,
    G: AccessControl,
    L: Ledger,
    S: AuditSink,
{
    /// Assemble a gateway from explicit collaborators
    pub fn from_parts(metadata: TokenMetadata, gate: G, ledger: L, verifier: V, audit: S) -> Self {
        Self {
            metadata,
            gate,
            ledger,
            verifier,
            audit,
            reserve_public_key: None,
        }
    }

    /// Swap the audit sink, keeping all state
    pub fn with_audit_sink<S2: AuditSink>(self, audit: S2) -> IssuanceGateway<V, G, L, S2> {
        IssuanceGateway {
            metadata: self.metadata,
            gate: self.gate,
            ledger: self.ledger,
            verifier: self.verifier,
            audit,
            reserve_public_key: self.reserve_public_key,
        }
    }

    // === Mutation surface ===

    /// Mint `amount` to `destination` against a verified reserve deposit.
    ///
    /// A zero amount is accepted and still emits a `mint` notification.
    pub fn request_mint(
        &mut self,
        caller: &AccountId,
        amount: Amount,
        destination: &AccountId,
        claim: &InclusionClaim,
    ) -> ReserveResult<()> {
        tracing::debug!(%caller, %amount, %destination, txid = %claim.txid, "mint requested");
        self.authorize(caller)?;
        self.check_proof(claim)?;
        self.ledger.mint(destination, amount)?;

        tracing::info!(%destination, %amount, txid = %claim.txid, "minted");
        self.audit.emit(AuditEvent::Mint(claim.txid));
        Ok(())
    }

    /// Burn `amount` from `owner` against a verified reserve withdrawal.
    ///
    /// A zero amount is rejected before the verifier is consulted.
    pub fn request_burn(
        &mut self,
        caller: &AccountId,
        amount: Amount,
        owner: &AccountId,
        claim: &InclusionClaim,
    ) -> ReserveResult<()> {
        tracing::debug!(%caller, %amount, %owner, txid = %claim.txid, "burn requested");
        self.authorize(caller)?;
        ensure_positive(amount)?;
        self.check_proof(claim)?;
        self.ledger.burn(owner, amount)?;

        tracing::info!(%owner, %amount, txid = %claim.txid, "burned");
        self.audit.emit(AuditEvent::Burn(claim.txid));
        Ok(())
    }

    /// Move `amount` from `sender` to `recipient`. No proof is involved.
    ///
    /// A present memo is emitted verbatim as a `transfer-memo` notification.
    pub fn request_transfer(
        &mut self,
        caller: &AccountId,
        amount: Amount,
        sender: &AccountId,
        recipient: &AccountId,
        memo: Option<Memo>,
    ) -> ReserveResult<()> {
        tracing::debug!(%caller, %amount, %sender, %recipient, "transfer requested");
        self.authorize(caller)?;
        ensure_positive(amount)?;
        self.ledger.transfer(sender, recipient, amount)?;

        tracing::info!(%sender, %recipient, %amount, "transferred");
        if let Some(memo) = memo {
            self.audit.emit(AuditEvent::TransferMemo(memo));
        }
        Ok(())
    }

    /// Hand control to `new_owner`
    pub fn rotate_owner(&mut self, caller: &AccountId, new_owner: AccountId) -> ReserveResult<()> {
        self.gate.rotate(caller, new_owner).map_err(|err| {
            tracing::warn!(%caller, "rejected controller rotation");
            err
        })?;
        tracing::info!(%new_owner, "controller rotated");
        Ok(())
    }

    /// Record the custodial reserve wallet key
    pub fn set_reserve_public_key(
        &mut self,
        caller: &AccountId,
        key: ReservePublicKey,
    ) -> ReserveResult<()> {
        self.authorize(caller)?;
        tracing::info!(%key, "reserve public key set");
        self.reserve_public_key = Some(key);
        Ok(())
    }

    // === Query surface ===

    pub fn controller(&self) -> AccountId {
        self.gate.controller()
    }

    pub fn reserve_public_key(&self) -> Option<&ReservePublicKey> {
        self.reserve_public_key.as_ref()
    }

    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.ledger.balance_of(account)
    }

    pub fn total_supply(&self) -> Amount {
        self.ledger.total_supply()
    }

    pub fn max_supply(&self) -> Amount {
        self.ledger.max_supply()
    }

    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn token_uri(&self) -> Option<&str> {
        self.metadata.uri.as_deref()
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Mutable access for verifiers that track recognized headers
    pub fn verifier_mut(&mut self) -> &mut V {
        &mut self.verifier
    }

    pub fn audit(&self) -> &S {
        &self.audit
    }

    pub fn audit_mut(&mut self) -> &mut S {
        &mut self.audit
    }

    // === Checks ===

    fn authorize(&self, caller: &AccountId) -> ReserveResult<()> {
        if self.gate.is_authorized(caller) {
            Ok(())
        } else {
            tracing::warn!(%caller, "rejected call from non-controller");
            Err(ReserveError::forbidden(*caller))
        }
    }

    fn check_proof(&self, claim: &InclusionClaim) -> ReserveResult<()> {
        match self.verifier.verify(claim) {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::warn!(txid = %claim.txid, height = claim.claimed_height, "inclusion proof rejected");
                Err(ReserveError::invalid_proof(format!(
                    "inclusion of {} at height {} not proven",
                    claim.txid, claim.claimed_height
                )))
            }
            Err(err) => {
                tracing::warn!(txid = %claim.txid, error = %err, "inclusion verifier failed");
                Err(ReserveError::invalid_proof(err.to_string()))
            }
        }
    }
}

fn ensure_positive(amount: Amount) -> ReserveResult<()> {
    if amount.is_zero() {
        Err(ReserveError::invalid_amount("amount must be positive"))
    } else {
        Ok(())
    }
}
