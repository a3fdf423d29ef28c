use std::io::Write;
use std::path::Path;

use tracing::info;

use super::write_report;
use crate::{csv_utils::read_csv, stores::Account, stores::AccountStore, Error};

/// Loads the accounts in `input_path` into a fresh store and writes the interest
/// report for `rate` to the provided writer.
///
/// Rows sharing an id overwrite each other, so the last one in the file wins.
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, rate: f64, writer: W) -> Result<(), Error>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut store = AccountStore::new();

    for account in read_csv::<Account, _>(input_path)? {
        store.save_account(account?);
    }
    info!(accounts = store.len(), "loaded accounts");

    write_report(&store, rate, writer)
}
