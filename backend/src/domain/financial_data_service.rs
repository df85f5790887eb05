//! Read-side service over the per-user financial collections.

use std::sync::Arc;

use tracing::info;

use super::commands::financial_data::{FinancialDataResult, UserFinancials};
use super::commands::listing::{
    BudgetListQuery, BudgetListResult, TransactionListQuery, TransactionListResult,
};
use super::listing;
use super::models::{Budget, Transaction};
use super::summary::summarize;
use crate::storage::{FinancialStorage, StorageError};

#[derive(Clone)]
pub struct FinancialDataService {
    storage: Arc<dyn FinancialStorage>,
}

impl FinancialDataService {
    pub fn new(storage: Arc<dyn FinancialStorage>) -> Self {
        Self { storage }
    }

    /// One user's transactions, budgets and goals in store order
    pub async fn fetch_user_financials(
        &self,
        user_id: &str,
    ) -> Result<UserFinancials, StorageError> {
        let transactions = self.storage.list_transactions(user_id).await?;
        let budgets = self.storage.list_budgets(user_id).await?;
        let goals = self.storage.list_goals(user_id).await?;

        Ok(UserFinancials {
            transactions,
            budgets,
            goals,
        })
    }

    /// Records of one user together with their summary
    pub async fn get_financial_data(
        &self,
        user_id: &str,
    ) -> Result<FinancialDataResult, StorageError> {
        info!("Loading financial data for user {}", user_id);
        let financials = self.fetch_user_financials(user_id).await?;
        let summary = summarize(&financials.transactions, &financials.budgets, &financials.goals);

        Ok(FinancialDataResult {
            financials,
            summary,
        })
    }

    /// Every user's transactions, newest first
    pub async fn fetch_all_transactions(&self) -> Result<Vec<Transaction>, StorageError> {
        let mut transactions = Vec::new();
        for user_id in self.storage.list_user_ids().await? {
            transactions.extend(self.storage.list_transactions(&user_id).await?);
        }
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Every user's budgets, most recent start date first
    pub async fn fetch_all_budgets(&self) -> Result<Vec<Budget>, StorageError> {
        let mut budgets = Vec::new();
        for user_id in self.storage.list_user_ids().await? {
            budgets.extend(self.storage.list_budgets(&user_id).await?);
        }
        budgets.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(budgets)
    }

    pub async fn list_transactions(
        &self,
        query: TransactionListQuery,
    ) -> Result<TransactionListResult, StorageError> {
        info!("Listing transactions with query: {:?}", query);
        let transactions = self.fetch_all_transactions().await?;
        Ok(listing::list_transactions(&transactions, &query))
    }

    pub async fn list_budgets(
        &self,
        query: BudgetListQuery,
    ) -> Result<BudgetListResult, StorageError> {
        info!("Listing budgets with query: {:?}", query);
        let budgets = self.fetch_all_budgets().await?;
        Ok(listing::list_budgets(&budgets, &query))
    }
}
