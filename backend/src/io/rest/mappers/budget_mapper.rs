use shared::{Budget as SharedBudget, BudgetWithStatus};

use super::analysis_mapper::AnalysisMapper;
use crate::domain::models::Budget;
use crate::domain::summary::BudgetStatus;

pub struct BudgetMapper;

impl BudgetMapper {
    pub fn to_dto(domain: Budget) -> SharedBudget {
        SharedBudget {
            id: domain.id,
            local_id: domain.local_id,
            user_id: domain.user_id,
            category: domain.category,
            amount: domain.amount,
            spent: domain.spent,
            start_date: domain.start_date,
            end_date: domain.end_date,
            note: domain.note,
            notifications_enabled: domain.notifications_enabled,
            notification_threshold: domain.notification_threshold,
            notification_sent: domain.notification_sent,
        }
    }

    pub fn to_dto_list(domain_budgets: Vec<Budget>) -> Vec<SharedBudget> {
        domain_budgets.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_dto_with_status(domain: Budget, status: BudgetStatus) -> BudgetWithStatus {
        BudgetWithStatus {
            budget: Self::to_dto(domain),
            remaining: status.remaining,
            percentage_used: AnalysisMapper::percentage_to_dto(status.percentage_used),
        }
    }
}
