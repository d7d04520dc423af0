//! Transaction log repository.

use std::sync::RwLock;

use ecodrop_core::Transaction;

/// Append-only drop-off log. Starts empty.
pub struct TransactionStore {
    inner: RwLock<Vec<Transaction>>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    pub fn append(&self, transaction: Transaction) {
        self.inner
            .write()
            .expect("transaction log lock poisoned")
            .push(transaction);
    }

    pub fn list(&self) -> Vec<Transaction> {
        self.inner
            .read()
            .expect("transaction log lock poisoned")
            .clone()
    }

    pub fn for_user(&self, user_id: &str) -> Vec<Transaction> {
        self.inner
            .read()
            .expect("transaction log lock poisoned")
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}
