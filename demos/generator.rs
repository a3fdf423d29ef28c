//! This example generates an accounts CSV file for a number of accounts
//! supplied as a command-line argument.
//!
//! The CSV file can then be used to test and benchmark the `interest-ledger` crate.
//!
//! Example (10K accounts, the file used by the tests and benches):
//! ```bash
//! cargo run --example generator 10000 > data/10K_accounts.csv
//! ```
//! ### Maths
//! Account `i` (1-based) gets the id `acc-{i:05}` and a balance of
//! `BASE_BALANCE·i`. Ids are zero-padded so lexical order matches numeric order,
//! which keeps the report's sort order predictable.
//!
//! At rate `r` the report row for account `i` is therefore
//! `acc-{i:05}, BASE_BALANCE·i, BASE_BALANCE·i·r`.
//! With `r = 0.5` every interest value is an exact `50·i`.
//!
//! If `DUPLICATE_EVERY` is non-zero, every n-th account is written twice, the second
//! time with a zero balance; since saves overwrite, those accounts report zero interest.

use csv::Writer;
use interest_ledger::Account;
use std::{env, error::Error};

// Base balance; scaled by the account number.
const BASE_BALANCE: f64 = 100.0;
// Set to n > 0 to rewrite every n-th account with a zero balance.
const DUPLICATE_EVERY: u32 = 0;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_accounts>");
        std::process::exit(1);
    }

    let num_accounts: u32 = match args[1].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: <num_accounts> must be a positive integer.");
            std::process::exit(1);
        }
    };

    let mut wtr = Writer::from_writer(std::io::stdout());

    for i in 1..=num_accounts {
        let id = format!("acc-{:05}", i);
        wtr.serialize(Account::new(id.clone(), BASE_BALANCE * f64::from(i)))?;
        if DUPLICATE_EVERY > 0 && i % DUPLICATE_EVERY == 0 {
            wtr.serialize(Account::new(id, 0.0))?;
        }
    }
    wtr.flush()?;
    Ok(())
}
