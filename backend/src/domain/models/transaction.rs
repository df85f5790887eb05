use chrono::{DateTime, Utc};
use shared::RepeatType;

/// Domain representation of a transaction document.
///
/// `amount` is never negative; `is_income` alone decides whether the
/// amount counts as income or expense.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub local_id: Option<i64>,
    pub user_id: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub is_income: bool,
    pub note: Option<String>,
    pub repeat: bool,
    pub repeat_type: Option<RepeatType>,
    pub end_date: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Case-insensitive substring match over description, category and note
    pub fn matches_search(&self, needle_lowercase: &str) -> bool {
        if needle_lowercase.is_empty() {
            return true;
        }
        self.description.to_lowercase().contains(needle_lowercase)
            || self.category.to_lowercase().contains(needle_lowercase)
            || self
                .note
                .as_deref()
                .map(|note| note.to_lowercase().contains(needle_lowercase))
                .unwrap_or(false)
    }
}
