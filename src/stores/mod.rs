//! Storage layer for the ledger. Provides the in-memory [`AccountStore`]
//! keyed by account id.
//!
//! State lives for the lifetime of the store instance only and the store
//! does no locking of its own.

mod accounts;

pub use accounts::{Account, AccountStore};
