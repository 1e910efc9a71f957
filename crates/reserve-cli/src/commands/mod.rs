//! CLI command handlers

pub mod common;
pub mod info;
pub mod replay;
