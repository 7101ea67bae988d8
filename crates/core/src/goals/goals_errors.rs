use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoalError {
    #[error("Goal not found: {0}")]
    NotFound(String),

    #[error("Contribution percentage must be greater than zero")]
    InvalidPercentage,

    #[error("Contribution of {requested}% exceeds remaining headroom of {available}%")]
    AllocationExceedsHeadroom {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Invalid goal data: {0}")]
    InvalidData(String),
}
