//! Filtering and pagination of the all-users transaction and budget lists.
//!
//! Totals are taken over the whole filtered set (not just the requested
//! page) and reuse the summary computation.

use super::commands::listing::{
    BudgetListQuery, BudgetListResult, BudgetTotals, PageInfo, PageRequest, TransactionListQuery,
    TransactionListResult, TransactionTotals,
};
use super::models::{Budget, Transaction};
use super::summary::{summarize, BudgetStatus};

pub fn filter_transactions(
    transactions: &[Transaction],
    query: &TransactionListQuery,
) -> Vec<Transaction> {
    let needle = query
        .search
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    transactions
        .iter()
        .filter(|t| query.type_filter.matches(t.is_income))
        .filter(|t| t.matches_search(&needle))
        .filter(|t| query.date_range.contains(&t.date))
        .filter(|t| query.user_id.as_deref().map_or(true, |uid| t.user_id == uid))
        .cloned()
        .collect()
}

pub fn filter_budgets(budgets: &[Budget], query: &BudgetListQuery) -> Vec<Budget> {
    let needle = query
        .search
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let range = query.date_range;

    budgets
        .iter()
        .filter(|b| query.category.as_deref().map_or(true, |c| b.category == c))
        .filter(|b| b.matches_search(&needle))
        // A budget stays in when either end of its period satisfies the bound
        .filter(|b| {
            range
                .start
                .map_or(true, |start| b.start_date >= start || b.end_date >= start)
        })
        .filter(|b| {
            range
                .end
                .map_or(true, |end| b.start_date <= end || b.end_date <= end)
        })
        .filter(|b| query.user_id.as_deref().map_or(true, |uid| b.user_id == uid))
        .cloned()
        .collect()
}

/// Slice out one page. A page past the end is empty, not an error.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> (Vec<T>, PageInfo) {
    let per_page = request.per_page.max(1) as usize;
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let start = (request.page.max(1) as usize - 1).saturating_mul(per_page);

    let page_items = items.iter().skip(start).take(per_page).cloned().collect();

    (
        page_items,
        PageInfo {
            page: request.page,
            per_page: request.per_page,
            total_items,
            total_pages,
        },
    )
}

pub fn budget_totals(budgets: &[Budget]) -> BudgetTotals {
    let summary = summarize(&[], budgets, &[]);
    let total_amount: f64 = budgets.iter().map(|b| b.amount).sum();
    let total_spent: f64 = budgets.iter().map(|b| b.spent).sum();
    let average_percentage_used = if summary.budget_status.is_empty() {
        0.0
    } else {
        let sum: f64 = summary.budget_status.iter().map(|s| s.percentage_used).sum();
        sum / summary.budget_status.len() as f64
    };

    BudgetTotals {
        total_amount,
        total_spent,
        total_remaining: total_amount - total_spent,
        average_percentage_used,
    }
}

pub fn list_transactions(
    transactions: &[Transaction],
    query: &TransactionListQuery,
) -> TransactionListResult {
    let filtered = filter_transactions(transactions, query);
    let summary = summarize(&filtered, &[], &[]);
    let (page, pagination) = paginate(&filtered, query.page);

    TransactionListResult {
        transactions: page,
        pagination,
        totals: TransactionTotals {
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            net_income: summary.net_income,
        },
    }
}

pub fn list_budgets(budgets: &[Budget], query: &BudgetListQuery) -> BudgetListResult {
    let filtered = filter_budgets(budgets, query);
    let totals = budget_totals(&filtered);
    let (page, pagination) = paginate(&filtered, query.page);

    BudgetListResult {
        budgets: page
            .into_iter()
            .map(|b| {
                let status = BudgetStatus::for_budget(&b);
                (b, status)
            })
            .collect(),
        pagination,
        totals,
    }
}
