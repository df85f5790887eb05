//! # JSON Financial Repository
//!
//! Reads the `transactions`, `budgets` and `goals` collections of one
//! user directory and turns every raw document into a validated domain
//! record. The first malformed document fails the whole read.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::connection::JsonConnection;
use super::document::{self, Document, BUDGETS, GOALS, TRANSACTIONS};
use crate::domain::models::{Budget, FinancialGoal, Transaction};
use crate::storage::traits::FinancialStorage;
use crate::storage::StorageError;

#[derive(Clone)]
pub struct FinancialRepository {
    connection: JsonConnection,
}

impl FinancialRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn read_documents<T>(
        &self,
        user_id: &str,
        collection: &'static str,
        parse: fn(&str, &Document) -> Result<T, StorageError>,
    ) -> Result<Vec<T>, StorageError> {
        let raw: Vec<Value> = self.connection.read_collection(user_id, collection)?;
        debug!("Read {} {} documents for user {}", raw.len(), collection, user_id);

        raw.into_iter()
            .enumerate()
            .map(|(index, value)| {
                let doc = Document::new(collection, index, value)?;
                parse(user_id, &doc)
            })
            .collect()
    }
}

#[async_trait]
impl FinancialStorage for FinancialRepository {
    async fn list_user_ids(&self) -> Result<Vec<String>, StorageError> {
        self.connection.list_user_directories()
    }

    async fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, StorageError> {
        self.read_documents(user_id, TRANSACTIONS, document::parse_transaction)
    }

    async fn list_budgets(&self, user_id: &str) -> Result<Vec<Budget>, StorageError> {
        self.read_documents(user_id, BUDGETS, document::parse_budget)
    }

    async fn list_goals(&self, user_id: &str) -> Result<Vec<FinancialGoal>, StorageError> {
        self.read_documents(user_id, GOALS, document::parse_goal)
    }
}
