use super::transactions_errors::TransactionError;
use super::transactions_model::{
    LedgerScope, NewTransaction, Transaction, TransactionPatch, TransactionType,
};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    fx_service: Arc<dyn FxServiceTrait>,
}

impl TransactionService {
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        fx_service: Arc<dyn FxServiceTrait>,
    ) -> Self {
        TransactionService {
            repository,
            fx_service,
        }
    }

    fn sum_filtered(
        &self,
        scope: &LedgerScope,
        transaction_type: TransactionType,
        filter: impl Fn(&Transaction) -> bool,
    ) -> Result<Decimal> {
        let transactions = self.repository.load(scope)?;
        Ok(transactions
            .iter()
            .filter(|t| t.transaction_type == transaction_type && filter(t))
            .fold(Decimal::zero(), |acc, t| acc + t.normalized_amount))
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn list_transactions(&self, scope: &LedgerScope) -> Result<Vec<Transaction>> {
        self.repository.load(scope)
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;

        let (normalized_amount, normalized_currency) = self
            .fx_service
            .convert_to_base(new_transaction.amount, new_transaction.currency)?;

        let now = Utc::now();
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            transaction_type: new_transaction.transaction_type,
            normalized_amount,
            normalized_currency,
            original_amount: new_transaction.amount,
            original_currency: new_transaction.currency,
            category: new_transaction.category,
            description: new_transaction.description,
            date: new_transaction.date,
            owner_user_id: new_transaction.owner_user_id,
            owner_name: new_transaction.owner_name,
            is_shared: new_transaction.is_shared,
            household_id: new_transaction.household_id,
            created_at: now,
            updated_at: now,
        };

        debug!(
            "creating {:?} transaction of {} {} in {:?}",
            transaction.transaction_type,
            transaction.original_amount,
            transaction.original_currency,
            transaction.scope()
        );
        self.repository.insert(transaction).await
    }

    async fn update_transaction(
        &self,
        scope: &LedgerScope,
        transaction_id: &str,
        patch: TransactionPatch,
    ) -> Result<Transaction> {
        patch.validate()?;

        let mut transaction = self
            .repository
            .load(scope)?
            .into_iter()
            .find(|t| t.id == transaction_id)
            .ok_or_else(|| TransactionError::NotFound(transaction_id.to_string()))?;

        let resnapshot = patch.requires_resnapshot();

        if let Some(transaction_type) = patch.transaction_type {
            transaction.transaction_type = transaction_type;
        }
        if let Some(amount) = patch.amount {
            transaction.original_amount = amount;
        }
        if let Some(currency) = patch.currency {
            transaction.original_currency = currency;
        }
        if let Some(category) = patch.category {
            transaction.category = category;
        }
        if let Some(description) = patch.description {
            transaction.description = Some(description);
        }
        if let Some(date) = patch.date {
            transaction.date = date;
        }

        if resnapshot {
            let (normalized_amount, normalized_currency) = self
                .fx_service
                .convert_to_base(transaction.original_amount, transaction.original_currency)?;
            transaction.normalized_amount = normalized_amount;
            transaction.normalized_currency = normalized_currency;
        }

        transaction.updated_at = Utc::now();
        self.repository.update(transaction).await
    }

    async fn delete_transaction(&self, scope: &LedgerScope, transaction_id: &str) -> Result<()> {
        let removed = self.repository.delete(scope, transaction_id).await?;
        if removed == 0 {
            debug!("delete of absent transaction {} ignored", transaction_id);
        }
        Ok(())
    }

    fn monthly_aggregate(
        &self,
        scope: &LedgerScope,
        transaction_type: TransactionType,
        month: u32,
        year: i32,
    ) -> Result<Decimal> {
        self.sum_filtered(scope, transaction_type, |t| {
            t.date.month() == month && t.date.year() == year
        })
    }

    fn yearly_aggregate(
        &self,
        scope: &LedgerScope,
        transaction_type: TransactionType,
        year: i32,
    ) -> Result<Decimal> {
        self.sum_filtered(scope, transaction_type, |t| t.date.year() == year)
    }

    fn monthly_savings(&self, scope: &LedgerScope, month: u32, year: i32) -> Result<Decimal> {
        let income = self.monthly_aggregate(scope, TransactionType::Income, month, year)?;
        let expenses = self.monthly_aggregate(scope, TransactionType::Expense, month, year)?;
        Ok(income - expenses)
    }

    fn annual_savings(&self, scope: &LedgerScope, year: i32) -> Result<Decimal> {
        let income = self.yearly_aggregate(scope, TransactionType::Income, year)?;
        let expenses = self.yearly_aggregate(scope, TransactionType::Expense, year)?;
        Ok(income - expenses)
    }
}
