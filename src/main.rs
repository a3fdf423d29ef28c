use std::io;
use std::process;

use clap::Parser;
use interest_ledger::{run, run_async, Config, Error};
use tokio::runtime::Runtime;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    if let Err(err) = run_app(config) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_app(config: Config) -> Result<(), Error> {
    info!(input = %config.input.display(), rate = config.rate, "processing accounts");
    if config.async_mode {
        let rt = Runtime::new()?;
        rt.block_on(run_async(&config.input, config.rate, io::stdout()))
    } else {
        run(&config.input, config.rate, io::stdout())
    }
}
