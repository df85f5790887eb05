use shared::Transaction as SharedTransaction;

use crate::domain::models::Transaction;

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_dto(domain: Transaction) -> SharedTransaction {
        SharedTransaction {
            id: domain.id,
            local_id: domain.local_id,
            user_id: domain.user_id,
            description: domain.description,
            category: domain.category,
            amount: domain.amount,
            date: domain.date,
            is_income: domain.is_income,
            note: domain.note,
            repeat: domain.repeat,
            repeat_type: domain.repeat_type,
            end_date: domain.end_date,
        }
    }

    pub fn to_dto_list(domain_transactions: Vec<Transaction>) -> Vec<SharedTransaction> {
        domain_transactions.into_iter().map(Self::to_dto).collect()
    }
}
