//! Reserve CLI Library
//!
//! Command handlers behind the `reserve` binary. Handlers write JSON lines to
//! any `std::io::Write`, so tests drive them without spawning a process.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

pub mod commands;
pub mod script;

pub use commands::common::load_config;
pub use commands::replay::{CliGateway, ReplayOptions, ReplaySummary};
pub use script::{Operation, ReplayScript, TrustedHeader};
