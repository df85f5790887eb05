//! Record builders shared by the domain unit tests.

use chrono::{DateTime, TimeZone, Utc};

use super::models::{Budget, FinancialGoal, Transaction};

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn transaction(
    user_id: &str,
    amount: f64,
    category: &str,
    is_income: bool,
    date: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id: format!("{}-{}-{}", user_id, category, date.timestamp_millis()),
        local_id: None,
        user_id: user_id.to_string(),
        description: format!("{} {}", if is_income { "Income" } else { "Expense" }, category),
        category: category.to_string(),
        amount,
        date,
        is_income,
        note: None,
        repeat: false,
        repeat_type: None,
        end_date: None,
    }
}

pub fn income(amount: f64, category: &str) -> Transaction {
    transaction("user-1", amount, category, true, at(2024, 1, 15))
}

pub fn expense(amount: f64, category: &str) -> Transaction {
    transaction("user-1", amount, category, false, at(2024, 1, 15))
}

pub fn budget_for(
    user_id: &str,
    category: &str,
    amount: f64,
    spent: f64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Budget {
    Budget {
        id: format!("{}-{}-{}", user_id, category, start_date.timestamp_millis()),
        local_id: None,
        user_id: user_id.to_string(),
        category: category.to_string(),
        amount,
        spent,
        start_date,
        end_date,
        note: None,
        notifications_enabled: false,
        notification_threshold: 80.0,
        notification_sent: false,
    }
}

pub fn budget(category: &str, amount: f64, spent: f64) -> Budget {
    budget_for("user-1", category, amount, spent, at(2024, 1, 1), at(2024, 1, 31))
}

pub fn goal(name: &str, target_amount: f64, current_amount: f64) -> FinancialGoal {
    FinancialGoal {
        id: format!("goal-{}", name.to_lowercase()),
        local_id: None,
        user_id: "user-1".to_string(),
        name: name.to_string(),
        description: String::new(),
        category: "savings".to_string(),
        target_amount,
        current_amount,
        start_date: at(2024, 1, 1),
        end_date: at(2024, 12, 31),
        completed: current_amount >= target_amount && target_amount > 0.0,
    }
}

/// Model stub that records every prompt and answers with a fixed reply
#[derive(Default)]
pub struct RecordingModel {
    pub prompts: std::sync::Mutex<Vec<String>>,
}

impl RecordingModel {
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl crate::genai::GenerativeModel for RecordingModel {
    async fn generate(&self, prompt: &str) -> Result<String, crate::genai::GenAiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("generated advice".to_string())
    }
}
