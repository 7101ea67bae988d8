//! TaskBalance Core - domain entities, services, and traits.
//!
//! This crate contains the accounting logic for TaskBalance: currency
//! conversion through a fixed pivot, the personal and household transaction
//! ledgers with their calendar aggregates, percentage-of-savings goal
//! contributions, and household financial summaries. It is storage-agnostic
//! and defines traits that are implemented by the `storage-json` crate.

pub mod constants;
pub mod context;
pub mod errors;
pub mod fx;
pub mod goals;
pub mod household;
pub mod transactions;

pub use context::ServiceContext;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
