use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    pub id: String,
    pub local_id: Option<i64>,
    pub user_id: String,
    pub category: String,
    pub amount: f64,
    /// Over-budget is a valid state: `spent` may exceed `amount`
    pub spent: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub note: Option<String>,
    pub notifications_enabled: bool,
    pub notification_threshold: f64,
    pub notification_sent: bool,
}

impl Budget {
    pub fn matches_search(&self, needle_lowercase: &str) -> bool {
        if needle_lowercase.is_empty() {
            return true;
        }
        self.category.to_lowercase().contains(needle_lowercase)
            || self
                .note
                .as_deref()
                .map(|note| note.to_lowercase().contains(needle_lowercase))
                .unwrap_or(false)
    }
}
