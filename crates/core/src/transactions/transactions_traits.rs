use super::transactions_model::{
    LedgerScope, NewTransaction, Transaction, TransactionPatch, TransactionType,
};
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for transaction ledger persistence.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn load(&self, scope: &LedgerScope) -> Result<Vec<Transaction>>;
    /// Appends to the ledger derived from the transaction's own scope.
    async fn insert(&self, transaction: Transaction) -> Result<Transaction>;
    async fn update(&self, transaction: Transaction) -> Result<Transaction>;
    /// Removes by id, returning the number of records removed. Absent ids
    /// remove nothing.
    async fn delete(&self, scope: &LedgerScope, transaction_id: &str) -> Result<usize>;
}

/// Trait for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn list_transactions(&self, scope: &LedgerScope) -> Result<Vec<Transaction>>;
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    async fn update_transaction(
        &self,
        scope: &LedgerScope,
        transaction_id: &str,
        patch: TransactionPatch,
    ) -> Result<Transaction>;
    /// Idempotent: deleting an id that is not present succeeds.
    async fn delete_transaction(&self, scope: &LedgerScope, transaction_id: &str) -> Result<()>;
    fn monthly_aggregate(
        &self,
        scope: &LedgerScope,
        transaction_type: TransactionType,
        month: u32,
        year: i32,
    ) -> Result<Decimal>;
    fn yearly_aggregate(
        &self,
        scope: &LedgerScope,
        transaction_type: TransactionType,
        year: i32,
    ) -> Result<Decimal>;
    fn monthly_savings(&self, scope: &LedgerScope, month: u32, year: i32) -> Result<Decimal>;
    fn annual_savings(&self, scope: &LedgerScope, year: i32) -> Result<Decimal>;
}
