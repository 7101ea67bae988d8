//! Stored transaction records and the legacy currency migration.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use taskbalance_core::fx::Currency;
use taskbalance_core::transactions::{Transaction, TransactionType};

/// Default currency assigned to records written before currencies were
/// stored. All legacy amounts were entered in Uruguayan pesos.
pub const LEGACY_DEFAULT_CURRENCY: Currency = Currency::Uyu;

/// On-disk transaction record.
///
/// Early releases stored a single amount with no currency information.
/// Those fields are optional here and resolved by [`migrate`] in one place
/// when a ledger is loaded, instead of inline fallbacks on every read path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub transaction_type: TransactionType,
    pub normalized_amount: Decimal,
    pub normalized_currency: Option<Currency>,
    pub original_amount: Option<Decimal>,
    pub original_currency: Option<Currency>,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub owner_user_id: String,
    pub owner_name: String,
    #[serde(default)]
    pub is_shared: bool,
    pub household_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Converts a stored record into the domain model, resolving missing
/// currency fields to [`LEGACY_DEFAULT_CURRENCY`].
pub fn migrate(record: TransactionRecord) -> Transaction {
    let normalized_currency = match record.normalized_currency {
        Some(currency) => currency,
        None => {
            log::info!(
                "transaction {}: no stored currency, migrating to {}",
                record.id,
                LEGACY_DEFAULT_CURRENCY
            );
            LEGACY_DEFAULT_CURRENCY
        }
    };
    // Legacy records stored only the normalized amount; treat it as the
    // original entry.
    let original_currency = record.original_currency.unwrap_or(normalized_currency);
    let original_amount = record.original_amount.unwrap_or(record.normalized_amount);

    Transaction {
        id: record.id,
        transaction_type: record.transaction_type,
        normalized_amount: record.normalized_amount,
        normalized_currency,
        original_amount,
        original_currency,
        category: record.category,
        description: record.description,
        date: record.date,
        owner_user_id: record.owner_user_id,
        owner_name: record.owner_name,
        is_shared: record.is_shared,
        household_id: record.household_id,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

impl From<Transaction> for TransactionRecord {
    fn from(transaction: Transaction) -> Self {
        TransactionRecord {
            id: transaction.id,
            transaction_type: transaction.transaction_type,
            normalized_amount: transaction.normalized_amount,
            normalized_currency: Some(transaction.normalized_currency),
            original_amount: Some(transaction.original_amount),
            original_currency: Some(transaction.original_currency),
            category: transaction.category,
            description: transaction.description,
            date: transaction.date,
            owner_user_id: transaction.owner_user_id,
            owner_name: transaction.owner_name,
            is_shared: transaction.is_shared,
            household_id: transaction.household_id,
            created_at: transaction.created_at,
            updated_at: transaction.updated_at,
        }
    }
}
