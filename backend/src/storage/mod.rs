//! # Storage Module
//!
//! Data access for the admin backend.
//!
//! The authoritative data lives in the managed document store and the
//! authentication service. This module hides them behind two traits:
//!
//! - [`FinancialStorage`]: per-user `transactions`, `budgets` and `goals`
//!   collections, plus enumeration of users that own data
//! - [`UserDirectory`]: account records and the disabled flag
//!
//! Raw documents are parsed and validated here. A document with a missing
//! or mistyped field fails with [`StorageError::MalformedRecord`] instead
//! of reaching the domain layer half-formed.
//!
//! ## Current Implementation
//!
//! - **json**: a directory snapshot laid out like the store's collections
//!   (`users/<uid>/<collection>.json`) with the account list in
//!   `users.yaml`

pub mod error;
pub mod json;
pub mod traits;

pub use error::StorageError;
pub use json::JsonConnection;
pub use traits::{Connection, FinancialStorage, UserDirectory};
