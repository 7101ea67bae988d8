//! JSON-document storage implementation for TaskBalance.
//!
//! This crate is the persistence collaborator for `taskbalance-core`: the
//! only crate that touches the filesystem. Entity lists are stored as keyed
//! JSON documents — one document per user or household ledger — and the
//! repositories here implement the traits defined in the core crate.
//!
//! # Architecture
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-json (this crate)
//!       │
//!       ▼
//! JSON documents on disk
//! ```
//!
//! Saves are atomic from the core's perspective: documents are written to a
//! temporary file and renamed into place, so a reader never observes a
//! partial write.

pub mod store;

// Repository implementations
pub mod fx;
pub mod goals;
pub mod household;
pub mod transactions;

pub use store::JsonStore;

pub use fx::FxRepository;
pub use goals::GoalRepository;
pub use household::HouseholdRepository;
pub use transactions::TransactionRepository;

// Re-export from taskbalance-core for convenience
pub use taskbalance_core::errors::{Error, Result, StorageError};
