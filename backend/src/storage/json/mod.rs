//! Directory snapshot of the document store.
//!
//! ```text
//! <data_dir>/users.yaml                       account records
//! <data_dir>/users/<uid>/transactions.json    JSON array of documents
//! <data_dir>/users/<uid>/budgets.json
//! <data_dir>/users/<uid>/goals.json
//! ```

pub mod connection;
pub mod document;
pub mod financial_repository;
pub mod user_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use financial_repository::FinancialRepository;
pub use user_repository::UserRepository;
