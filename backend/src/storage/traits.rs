//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::models::{Budget, FinancialGoal, Transaction, UserRecord};

/// Read access to the per-user financial collections.
///
/// Every record returned is stamped with the id of the user whose
/// collection it came from. Collections come back in store order.
#[async_trait]
pub trait FinancialStorage: Send + Sync {
    /// Ids of every user that has a document in the store
    async fn list_user_ids(&self) -> Result<Vec<String>, StorageError>;

    async fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, StorageError>;

    async fn list_budgets(&self, user_id: &str) -> Result<Vec<Budget>, StorageError>;

    async fn list_goals(&self, user_id: &str) -> Result<Vec<FinancialGoal>, StorageError>;
}

/// Account records held by the authentication service
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserRecord>, StorageError>;

    /// Set the disabled flag and return the updated record.
    /// Fails with `UserNotFound` for an unknown uid.
    async fn set_user_disabled(&self, uid: &str, disabled: bool)
        -> Result<UserRecord, StorageError>;
}

/// Trait defining the interface for storage connections
///
/// A connection is created once at startup and hands out the repositories
/// the services need, so the domain layer never sees the backend type.
pub trait Connection: Send + Sync + Clone {
    type FinancialRepository: FinancialStorage + 'static;
    type UserRepository: UserDirectory + 'static;

    fn create_financial_repository(&self) -> Self::FinancialRepository;

    fn create_user_repository(&self) -> Self::UserRepository;
}
