//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod financial_data {
    use crate::domain::models::{Budget, FinancialGoal, Transaction};
    use crate::domain::summary::FinancialSummary;

    /// One user's records, in the order the store returned them.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct UserFinancials {
        pub transactions: Vec<Transaction>,
        pub budgets: Vec<Budget>,
        pub goals: Vec<FinancialGoal>,
    }

    /// Records plus the summary computed from them.
    #[derive(Debug, Clone)]
    pub struct FinancialDataResult {
        pub financials: UserFinancials,
        pub summary: FinancialSummary,
    }
}

pub mod listing {
    use chrono::{DateTime, Utc};
    use shared::TransactionTypeFilter;

    use crate::domain::models::{Budget, Transaction};
    use crate::domain::summary::BudgetStatus;

    pub const DEFAULT_PER_PAGE: u32 = 20;
    pub const MAX_PER_PAGE: u32 = 500;

    /// Inclusive date bounds; either side may be open.
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    pub struct DateRange {
        pub start: Option<DateTime<Utc>>,
        pub end: Option<DateTime<Utc>>,
    }

    impl DateRange {
        pub fn contains(&self, date: &DateTime<Utc>) -> bool {
            self.start.map_or(true, |start| *date >= start)
                && self.end.map_or(true, |end| *date <= end)
        }
    }

    /// 1-based page selection
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PageRequest {
        pub page: u32,
        pub per_page: u32,
    }

    impl Default for PageRequest {
        fn default() -> Self {
            Self {
                page: 1,
                per_page: DEFAULT_PER_PAGE,
            }
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct TransactionListQuery {
        pub user_id: Option<String>,
        pub type_filter: TransactionTypeFilter,
        pub search: Option<String>,
        pub date_range: DateRange,
        pub page: PageRequest,
    }

    #[derive(Debug, Clone, Default)]
    pub struct BudgetListQuery {
        pub user_id: Option<String>,
        pub category: Option<String>,
        pub search: Option<String>,
        pub date_range: DateRange,
        pub page: PageRequest,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct PageInfo {
        pub page: u32,
        pub per_page: u32,
        pub total_items: usize,
        pub total_pages: usize,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct TransactionTotals {
        pub total_income: f64,
        pub total_expense: f64,
        pub net_income: f64,
    }

    #[derive(Debug, Clone)]
    pub struct TransactionListResult {
        pub transactions: Vec<Transaction>,
        pub pagination: PageInfo,
        pub totals: TransactionTotals,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct BudgetTotals {
        pub total_amount: f64,
        pub total_spent: f64,
        /// Negative when the set is overspent
        pub total_remaining: f64,
        /// NaN if any budget in the set has a zero amount
        pub average_percentage_used: f64,
    }

    #[derive(Debug, Clone)]
    pub struct BudgetListResult {
        pub budgets: Vec<(Budget, BudgetStatus)>,
        pub pagination: PageInfo,
        pub totals: BudgetTotals,
    }
}

pub mod users {
    /// Input for enabling or disabling an account.
    #[derive(Debug, Clone)]
    pub struct SetUserDisabledCommand {
        pub uid: String,
        pub disabled: bool,
    }
}

pub mod advisor {
    /// Question about one user's finances.
    #[derive(Debug, Clone)]
    pub struct FinancialAdviceCommand {
        pub user_id: String,
        pub message: String,
    }
}
