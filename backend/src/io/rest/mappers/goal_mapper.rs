use shared::FinancialGoal as SharedGoal;

use crate::domain::models::FinancialGoal;

pub struct GoalMapper;

impl GoalMapper {
    pub fn to_dto(domain: FinancialGoal) -> SharedGoal {
        SharedGoal {
            id: domain.id,
            local_id: domain.local_id,
            user_id: domain.user_id,
            name: domain.name,
            description: domain.description,
            category: domain.category,
            target_amount: domain.target_amount,
            current_amount: domain.current_amount,
            start_date: domain.start_date,
            end_date: domain.end_date,
            completed: domain.completed,
        }
    }

    pub fn to_dto_list(domain_goals: Vec<FinancialGoal>) -> Vec<SharedGoal> {
        domain_goals.into_iter().map(Self::to_dto).collect()
    }
}
