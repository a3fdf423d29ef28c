use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// An account record. `id` is an opaque lookup key and `balance` may be
/// negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub balance: f64,
}

impl Account {
    pub fn new(id: impl Into<String>, balance: f64) -> Self {
        Self {
            id: id.into(),
            balance,
        }
    }
}

#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<String, Account>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Looks up an account by id. Missing accounts are `None`, not an error.
    pub fn get_account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Saves an account under its id.
    /// An existing account with the same id is replaced wholesale.
    pub fn save_account(&mut self, account: Account) {
        match self.accounts.insert(account.id.clone(), account) {
            Some(previous) => debug!(id = %previous.id, "replaced account"),
            None => debug!("inserted account"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
