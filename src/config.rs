//! Command-line configuration for the `interest-ledger` binary.

use clap::Parser;
use std::path::PathBuf;

/// Loads accounts from a CSV file and prints the interest owed on each one.
#[derive(Debug, Parser)]
#[command(name = "interest-ledger", version)]
pub struct Config {
    /// Accounts CSV with an `id,balance` header.
    pub input: PathBuf,

    /// Interest rate as a multiplier (0.05 is 5%).
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Use the async runner instead of the sync one.
    #[arg(long = "async")]
    pub async_mode: bool,
}
