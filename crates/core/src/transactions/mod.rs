//! Transactions module - the personal and household ledgers.

mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;


pub use transactions_errors::TransactionError;
pub use transactions_model::{
    LedgerScope, NewTransaction, Transaction, TransactionPatch, TransactionType,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
