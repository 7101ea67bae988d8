//! Transaction ledger domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transactions_errors::TransactionError;
use crate::fx::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// Ledger a transaction belongs to.
///
/// Personal and household ledgers are mutually exclusive storage: a
/// transaction lives in exactly one of them, chosen by its shared flag at
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum LedgerScope {
    #[serde(rename_all = "camelCase")]
    Personal { user_id: String },
    #[serde(rename_all = "camelCase")]
    Household { household_id: String },
}

/// Domain model representing an income or expense record.
///
/// `normalized_amount` is a creation-time snapshot of `original_amount`
/// converted into the base currency in force at that moment. Later rate
/// changes never rewrite it; only an explicit edit of amount or currency
/// re-snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub transaction_type: TransactionType,
    pub normalized_amount: Decimal,
    pub normalized_currency: Currency,
    pub original_amount: Decimal,
    pub original_currency: Currency,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub owner_user_id: String,
    pub owner_name: String,
    pub is_shared: bool,
    pub household_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// The ledger this transaction is stored in.
    pub fn scope(&self) -> LedgerScope {
        match &self.household_id {
            Some(household_id) if self.is_shared => LedgerScope::Household {
                household_id: household_id.clone(),
            },
            _ => LedgerScope::Personal {
                user_id: self.owner_user_id.clone(),
            },
        }
    }
}

/// Input model for creating a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub currency: Currency,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub owner_user_id: String,
    pub owner_name: String,
    pub is_shared: bool,
    pub household_id: Option<String>,
}

impl NewTransaction {
    /// Validates the new transaction data.
    pub fn validate(&self) -> Result<(), TransactionError> {
        if self.amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount);
        }
        if self.category.trim().is_empty() {
            return Err(TransactionError::InvalidData(
                "category cannot be empty".to_string(),
            ));
        }
        if self.owner_user_id.trim().is_empty() {
            return Err(TransactionError::InvalidData(
                "owner user id cannot be empty".to_string(),
            ));
        }
        if self.is_shared && self.household_id.is_none() {
            return Err(TransactionError::InvalidData(
                "shared transactions require a household id".to_string(),
            ));
        }
        Ok(())
    }
}

/// Patch listing only the fields an edit is allowed to change.
///
/// Absent fields are left untouched. An amount or currency change makes the
/// service re-snapshot the normalized value at current rates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    pub transaction_type: Option<TransactionType>,
    pub amount: Option<Decimal>,
    pub currency: Option<Currency>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl TransactionPatch {
    pub fn requires_resnapshot(&self) -> bool {
        self.amount.is_some() || self.currency.is_some()
    }

    /// Validates the patch before it is merged.
    pub fn validate(&self) -> Result<(), TransactionError> {
        if let Some(amount) = self.amount {
            if amount <= Decimal::ZERO {
                return Err(TransactionError::InvalidAmount);
            }
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err(TransactionError::InvalidData(
                    "category cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_transaction() -> NewTransaction {
        NewTransaction {
            transaction_type: TransactionType::Expense,
            amount: dec!(100),
            currency: Currency::Uyu,
            category: "groceries".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            owner_user_id: "user-1".to_string(),
            owner_name: "Ana".to_string(),
            is_shared: false,
            household_id: None,
        }
    }

    #[test]
    fn rejects_non_positive_amounts() {
        let mut tx = new_transaction();
        tx.amount = dec!(0);
        assert!(matches!(
            tx.validate(),
            Err(TransactionError::InvalidAmount)
        ));

        tx.amount = dec!(-5);
        assert!(matches!(
            tx.validate(),
            Err(TransactionError::InvalidAmount)
        ));
    }

    #[test]
    fn shared_transactions_need_a_household() {
        let mut tx = new_transaction();
        tx.is_shared = true;
        assert!(tx.validate().is_err());

        tx.household_id = Some("household-1".to_string());
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn patch_resnapshot_only_on_amount_or_currency() {
        let patch = TransactionPatch {
            category: Some("transport".to_string()),
            ..Default::default()
        };
        assert!(!patch.requires_resnapshot());

        let patch = TransactionPatch {
            amount: Some(dec!(12)),
            ..Default::default()
        };
        assert!(patch.requires_resnapshot());

        let patch = TransactionPatch {
            currency: Some(Currency::Usd),
            ..Default::default()
        };
        assert!(patch.requires_resnapshot());
    }
}
