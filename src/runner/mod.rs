//! The runner is responsible for loading accounts from CSV into an
//! [`AccountStore`], computing interest at a single rate, and writing the
//! report to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner implementations.
//!
mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::run;

use std::io::Write;

use tracing::info;

use crate::{csv_utils::write_csv, dto::InterestRow, stores::AccountStore, Error};

/// Writes one report row per stored account, sorted by id for deterministic output.
/// An empty store still produces the header row.
fn write_report<W: Write>(store: &AccountStore, rate: f64, writer: W) -> Result<(), Error> {
    let mut rows: Vec<_> = store
        .iter()
        .map(|account| InterestRow::new(account, rate))
        .collect();
    rows.sort_by(|a, b| a.id.cmp(&b.id));

    let count = rows.len();
    if rows.is_empty() {
        // csv::Writer only emits the header alongside the first record
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(InterestRow::HEADER)?;
        wtr.flush()?;
    } else {
        write_csv(writer, rows.into_iter())?;
    }
    info!(rows = count, rate, "wrote interest report");
    Ok(())
}
