use taskbalance_core::errors::{Result, StorageError};
use taskbalance_core::transactions::{LedgerScope, Transaction, TransactionRepositoryTrait};

use super::model::{migrate, TransactionRecord};
use crate::store::JsonStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TransactionRepository {
    store: Arc<JsonStore>,
}

impl TransactionRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        TransactionRepository { store }
    }

    fn ledger_key(scope: &LedgerScope) -> String {
        match scope {
            LedgerScope::Personal { user_id } => format!("transactions_{user_id}"),
            LedgerScope::Household { household_id } => {
                format!("household_transactions_{household_id}")
            }
        }
    }

    fn load_records(&self, scope: &LedgerScope) -> Result<Vec<TransactionRecord>> {
        Ok(self
            .store
            .load(&Self::ledger_key(scope))?
            .unwrap_or_default())
    }

    fn save_records(&self, scope: &LedgerScope, records: &[TransactionRecord]) -> Result<()> {
        self.store.save(&Self::ledger_key(scope), &records)
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn load(&self, scope: &LedgerScope) -> Result<Vec<Transaction>> {
        Ok(self
            .load_records(scope)?
            .into_iter()
            .map(migrate)
            .collect())
    }

    async fn insert(&self, transaction: Transaction) -> Result<Transaction> {
        let scope = transaction.scope();
        let mut records = self.load_records(&scope)?;
        records.push(TransactionRecord::from(transaction.clone()));
        self.save_records(&scope, &records)?;
        Ok(transaction)
    }

    async fn update(&self, transaction: Transaction) -> Result<Transaction> {
        let scope = transaction.scope();
        let mut records = self.load_records(&scope)?;
        let position = records
            .iter()
            .position(|r| r.id == transaction.id)
            .ok_or_else(|| StorageError::NotFound(format!("transaction {}", transaction.id)))?;
        records[position] = TransactionRecord::from(transaction.clone());
        self.save_records(&scope, &records)?;
        Ok(transaction)
    }

    async fn delete(&self, scope: &LedgerScope, transaction_id: &str) -> Result<usize> {
        let mut records = self.load_records(scope)?;
        let before = records.len();
        records.retain(|r| r.id != transaction_id);
        let removed = before - records.len();
        if removed > 0 {
            self.save_records(scope, &records)?;
        }
        Ok(removed)
    }
}
