//! `reserve info`: genesis metadata of the configured token

use super::common::emit_line;
use anyhow::Result;
use reserve_core::{ReserveConfig, MAX_SUPPLY};
use serde_json::json;

pub fn run(config: &ReserveConfig, out: &mut impl std::io::Write) -> Result<()> {
    let metadata = config.token_metadata();
    let reserve_public_key = config.reserve_public_key()?;

    tracing::debug!(symbol = %metadata.symbol, "printing token info");
    emit_line(
        out,
        &json!({
            "name": metadata.name,
            "symbol": metadata.symbol,
            "decimals": metadata.decimals,
            "uri": metadata.uri,
            "max_supply": MAX_SUPPLY,
            "controller": config.controller(),
            "reserve_public_key": reserve_public_key,
        }),
    )
}
