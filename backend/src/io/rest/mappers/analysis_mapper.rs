use shared::{BudgetStatus as SharedBudgetStatus, FinancialAnalysis};

use crate::domain::summary::{BudgetStatus, FinancialSummary};

pub struct AnalysisMapper;

impl AnalysisMapper {
    /// The NaN sentinel has no JSON form; it goes out as `null`
    pub fn percentage_to_dto(value: f64) -> Option<f64> {
        if value.is_nan() {
            None
        } else {
            Some(value)
        }
    }

    pub fn budget_status_to_dto(status: BudgetStatus) -> SharedBudgetStatus {
        SharedBudgetStatus {
            category: status.category,
            amount: status.amount,
            spent: status.spent,
            remaining: status.remaining,
            percentage_used: Self::percentage_to_dto(status.percentage_used),
        }
    }

    pub fn to_dto(summary: FinancialSummary) -> FinancialAnalysis {
        FinancialAnalysis {
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            net_income: summary.net_income,
            category_expenses: summary.category_expenses,
            budget_status: summary
                .budget_status
                .into_iter()
                .map(Self::budget_status_to_dto)
                .collect(),
        }
    }
}
