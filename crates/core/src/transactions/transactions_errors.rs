use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Transaction amount must be greater than zero")]
    InvalidAmount,

    #[error("Transaction not found: {0}")]
    NotFound(String),

    #[error("Invalid transaction data: {0}")]
    InvalidData(String),
}
