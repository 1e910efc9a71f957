//! `reserve replay`: run a script of gateway operations
//!
//! Output is JSON lines on the given writer, in order:
//! - `{"step", "op", "outcome": "ok"}` or `{"step", "op", "outcome": "error", "kind", "message"}`
//! - `{"step", "audit": {"kind", "payload"}}` for each notification the step emitted
//! - a closing `{"report": {...}}` with controller, supply and holder balances
//!
//! A rejected operation is an outcome, not a failure of the command.

use super::common::emit_line;
use crate::script::{account, Operation, ReplayScript};
use anyhow::{Context, Result};
use reserve_core::{ReserveConfig, ReserveResult};
use reserve_issuance::{AuditLog, IssuanceGateway, IssuanceSnapshot, Tee, TracingAuditSink};
use reserve_ledger::{AccessGate, TokenLedger};
use reserve_verify::{InMemoryHeaderSource, MerkleInclusionVerifier};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;

/// Gateway as wired by the CLI
pub type CliGateway = IssuanceGateway<
    MerkleInclusionVerifier<InMemoryHeaderSource>,
    AccessGate,
    TokenLedger,
    Tee<AuditLog, TracingAuditSink>,
>;

/// Counts of applied and rejected operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

/// Where replay starts and what it leaves behind
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions<'a> {
    /// Resume from a saved gateway snapshot instead of genesis
    pub from_snapshot: Option<&'a Path>,
    /// Write the final gateway snapshot here
    pub save_snapshot: Option<&'a Path>,
}

pub fn run(
    config: &ReserveConfig,
    script: &ReplayScript,
    options: ReplayOptions<'_>,
    out: &mut impl std::io::Write,
) -> Result<ReplaySummary> {
    let mut gateway = build_gateway(config, script, options.from_snapshot)?;
    let mut summary = ReplaySummary::default();

    tracing::info!(
        operations = script.operations.len(),
        headers = script.headers.len(),
        "replaying script"
    );

    for (step, operation) in script.operations.iter().enumerate() {
        match apply(&mut gateway, operation) {
            Ok(()) => {
                summary.applied += 1;
                emit_line(out, &json!({ "step": step, "op": operation.name(), "outcome": "ok" }))?;
            }
            Err(err) => {
                summary.rejected += 1;
                emit_line(
                    out,
                    &json!({
                        "step": step,
                        "op": operation.name(),
                        "outcome": "error",
                        "kind": err.kind(),
                        "message": err.to_string(),
                    }),
                )?;
            }
        }
        for event in gateway.audit_mut().first.drain() {
            emit_line(out, &json!({ "step": step, "audit": event }))?;
        }
    }

    emit_line(out, &json!({ "report": report(&gateway) }))?;

    if let Some(path) = options.save_snapshot {
        let snapshot = serde_json::to_string_pretty(&gateway.snapshot())?;
        std::fs::write(path, snapshot)
            .with_context(|| format!("writing snapshot to {}", path.display()))?;
        tracing::info!(path = %path.display(), "snapshot saved");
    }

    tracing::info!(
        applied = summary.applied,
        rejected = summary.rejected,
        "replay finished"
    );
    Ok(summary)
}

fn build_gateway(
    config: &ReserveConfig,
    script: &ReplayScript,
    from_snapshot: Option<&Path>,
) -> Result<CliGateway> {
    let verifier = MerkleInclusionVerifier::new(script.header_source());
    let gateway = match from_snapshot {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading snapshot {}", path.display()))?;
            let snapshot: IssuanceSnapshot = serde_json::from_str(&content)
                .with_context(|| format!("parsing snapshot {}", path.display()))?;
            IssuanceGateway::restore(snapshot, config.token_metadata(), verifier)?
        }
        None => IssuanceGateway::from_config(config, verifier)?,
    };
    Ok(gateway.with_audit_sink(Tee::new(AuditLog::new(), TracingAuditSink)))
}

fn apply(gateway: &mut CliGateway, operation: &Operation) -> ReserveResult<()> {
    let caller = operation.caller();
    match operation {
        Operation::Mint {
            amount, to, claim, ..
        } => gateway.request_mint(&caller, *amount, &account(to), claim),
        Operation::Burn {
            amount,
            from,
            claim,
            ..
        } => gateway.request_burn(&caller, *amount, &account(from), claim),
        Operation::Transfer {
            amount,
            from,
            to,
            memo,
            ..
        } => gateway.request_transfer(&caller, *amount, &account(from), &account(to), memo.clone()),
        Operation::RotateOwner { new_owner, .. } => {
            gateway.rotate_owner(&caller, account(new_owner))
        }
        Operation::SetReserveKey { key, .. } => gateway.set_reserve_public_key(&caller, *key),
    }
}

fn report(gateway: &CliGateway) -> serde_json::Value {
    let holders: BTreeMap<String, String> = gateway
        .ledger()
        .holders()
        .map(|(account, balance)| (account.to_string(), balance.to_string()))
        .collect();
    json!({
        "controller": gateway.controller(),
        "reserve_public_key": gateway.reserve_public_key(),
        "total_supply": gateway.total_supply(),
        "max_supply": gateway.max_supply(),
        "holders": holders,
    })
}
