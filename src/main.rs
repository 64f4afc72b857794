//! shorturl - Fixed-width base-62 short codes for integer ids
//!
//! shorturl provides:
//! - A 7 character, URL-safe code for every id below 62^7
//! - A dynamically typed call boundary with arity/type checks
//! - Batch and range encoding
//! - Unified output format (jsonl/json/md/raw)

use anyhow::Result;
use clap::Parser;

mod cli;
mod codec;
mod commands;
mod core;
mod telemetry;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.quiet, cli.verbose);
    cli::run(cli)
}
