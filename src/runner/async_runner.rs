use std::io::Write;
use std::path::Path;

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::info;

use super::write_report;
use crate::{stores::Account, stores::AccountStore, Error};

const BUFFER_SIZE: usize = 1024;

/// Runs the ledger async on the given input file and writes the interest report to the provided writer.
/// Spawns two tasks:
/// * CSV reader - streams accounts from the input file, deserializes them and sends them to the store via channel.
/// * Store - receives accounts from the channel and saves them until the channel is closed.
///
/// The store is owned by the second task alone and handed back when it finishes.
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
/// * Either task panics
pub async fn run<P, W>(input_path: P, rate: f64, writer: W) -> Result<(), Error>
where
    P: AsRef<Path>,
    W: Write,
{
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_accounts(input_path, tx));
    let store_handle = tokio::spawn(store_accounts(rx));

    // Reader errors take priority over the store result
    reader_handle.await??;

    let store = store_handle.await?;
    info!(accounts = store.len(), "loaded accounts");

    write_report(&store, rate, writer)
}

/// Reads and deserializes accounts from a CSV file.
/// Returns them through the provided channel.
async fn read_accounts(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<Account>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<Account>();
    while let Some(result) = records.next().await {
        let account = result?;
        if tx.send(account).await.is_err() {
            // Receiver dropped
            break;
        }
    }
    Ok(())
}

/// Saves accounts received through the channel.
/// Returns the populated store once the channel is closed by the reader.
async fn store_accounts(mut rx: mpsc::Receiver<Account>) -> AccountStore {
    let mut store = AccountStore::new();
    while let Some(account) = rx.recv().await {
        store.save_account(account);
    }
    store
}
