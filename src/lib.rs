mod config;
mod csv_utils;
mod dto;
mod error;
mod interest;
mod runner;
mod stores;

pub use config::Config;
pub use dto::InterestRow;
pub use error::Error;
pub use interest::calculate_interest;
pub use runner::{run, run_async};
pub use stores::{Account, AccountStore};
