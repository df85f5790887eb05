//! Financial summary computation.
//!
//! This is the single place where income/expense totals, per-category
//! expenses and budget usage are computed. The financial-data endpoint,
//! the listing totals and the advisor prompt all go through [`summarize`].
//!
//! The computation is pure: it reads the given slices, never mutates
//! them, and yields the same result for the same input.

use std::collections::BTreeMap;

use super::models::{Budget, FinancialGoal, Transaction};

/// Aggregated figures for a set of transactions and budgets
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_income: f64,
    /// Expense totals keyed by category; only categories with at least
    /// one expense transaction are present
    pub category_expenses: BTreeMap<String, f64>,
    /// One entry per budget, in input order
    pub budget_status: Vec<BudgetStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category: String,
    pub amount: f64,
    pub spent: f64,
    /// Negative when over budget
    pub remaining: f64,
    /// May exceed 100. NaN when `amount` is zero.
    pub percentage_used: f64,
}

impl BudgetStatus {
    pub fn for_budget(budget: &Budget) -> Self {
        Self {
            category: budget.category.clone(),
            amount: budget.amount,
            spent: budget.spent,
            remaining: budget.amount - budget.spent,
            percentage_used: percentage_of(budget.spent, budget.amount),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0.0
    }
}

/// `part / whole * 100`.
///
/// A zero `whole` yields NaN for every `part`, including zero. Callers
/// render NaN distinctly instead of reading it as 0%.
pub fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return f64::NAN;
    }
    part / whole * 100.0
}

/// Compute the summary for one snapshot of a user's records.
///
/// Goals do not contribute to any figure; they are accepted so every
/// call site hands over the same snapshot, and are passed through by the
/// caller next to the summary.
pub fn summarize(
    transactions: &[Transaction],
    budgets: &[Budget],
    _goals: &[FinancialGoal],
) -> FinancialSummary {
    let mut total_income = 0.0;
    let mut total_expense = 0.0;
    let mut category_expenses: BTreeMap<String, f64> = BTreeMap::new();

    for transaction in transactions {
        if transaction.is_income {
            total_income += transaction.amount;
        } else {
            total_expense += transaction.amount;
            *category_expenses
                .entry(transaction.category.clone())
                .or_insert(0.0) += transaction.amount;
        }
    }

    let budget_status = budgets.iter().map(BudgetStatus::for_budget).collect();

    FinancialSummary {
        total_income,
        total_expense,
        net_income: total_income - total_expense,
        category_expenses,
        budget_status,
    }
}
