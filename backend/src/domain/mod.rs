//! # Domain Module
//!
//! Business logic of the admin backend, independent of HTTP and of the
//! storage backend.
//!
//! - [`summary`]: the financial summary computation every caller shares
//! - [`listing`]: filtering, pagination and totals for the dashboard lists
//! - [`validation`]: parsing of raw request parameters into domain queries
//! - [`prompt`]: advisor prompt text
//! - services wiring storage and the model together:
//!   [`FinancialDataService`], [`UserService`], [`AdvisorService`]

pub mod advisor_service;
pub mod commands;
pub mod financial_data_service;
pub mod listing;
pub mod models;
pub mod prompt;
pub mod summary;
pub mod user_service;
pub mod validation;

#[cfg(test)]
pub mod test_utils;

pub use advisor_service::{AdvisorError, AdvisorService};
pub use financial_data_service::FinancialDataService;
pub use prompt::PromptBuilder;
pub use summary::{percentage_of, summarize, BudgetStatus, FinancialSummary};
pub use user_service::UserService;
