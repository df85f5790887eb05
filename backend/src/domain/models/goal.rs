use chrono::{DateTime, Utc};

use crate::domain::summary::percentage_of;

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialGoal {
    pub id: String,
    pub local_id: Option<i64>,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub target_amount: f64,
    /// May exceed the target
    pub current_amount: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub completed: bool,
}

impl FinancialGoal {
    /// Progress towards the target in percent. NaN when the target is zero.
    pub fn progress_percentage(&self) -> f64 {
        percentage_of(self.current_amount, self.target_amount)
    }
}
