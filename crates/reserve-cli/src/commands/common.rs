//! Shared command plumbing

use anyhow::{Context, Result};
use reserve_core::ReserveConfig;
use std::path::Path;

/// Defaults, then the file if given, then `RESERVE_*` overrides, then validation
pub fn load_config(path: Option<&Path>) -> Result<ReserveConfig> {
    let mut config = match path {
        Some(path) => ReserveConfig::load_from_file(path)?,
        None => ReserveConfig::default(),
    };
    config
        .merge_with_env()
        .context("applying RESERVE_* environment overrides")?;
    config.validate()?;
    Ok(config)
}

/// Write one compact JSON value per line
pub fn emit_line(out: &mut impl std::io::Write, value: &serde_json::Value) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
