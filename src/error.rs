//! Errors for the batch surface of the ledger.
//!
//! The store and the interest calculation are total and never fail. Only
//! loading accounts from CSV and writing the report can go wrong:
//! - CSV parsing or writing (sync and async readers)
//! - file I/O
//! - a runner task that panicked or was cancelled

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV error: {0}")]
    CsvAsync(#[from] csv_async::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("runner task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
