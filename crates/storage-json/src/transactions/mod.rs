mod model;
mod repository;

pub use model::{migrate, TransactionRecord, LEGACY_DEFAULT_CURRENCY};
pub use repository::TransactionRepository;
