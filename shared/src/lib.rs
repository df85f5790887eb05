use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A single income or expense record owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Document identifier in the user's `transactions` collection
    pub id: String,
    /// Numeric id assigned by the mobile client, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_id: Option<i64>,
    pub user_id: String,
    pub description: String,
    pub category: String,
    /// Always non-negative; `is_income` decides the direction
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub is_income: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub repeat: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_type: Option<RepeatType>,
    /// Last occurrence of a repeating transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

/// Recurrence of a repeating transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RepeatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatType::Daily => "daily",
            RepeatType::Weekly => "weekly",
            RepeatType::Monthly => "monthly",
            RepeatType::Yearly => "yearly",
        }
    }
}

impl fmt::Display for RepeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepeatType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(RepeatType::Daily),
            "weekly" => Ok(RepeatType::Weekly),
            "monthly" => Ok(RepeatType::Monthly),
            "yearly" => Ok(RepeatType::Yearly),
            _ => Err(UnknownVariantError {
                kind: "repeat type",
                value: s.to_string(),
            }),
        }
    }
}

/// Budgets notify by default, at this percentage of the amount
pub const DEFAULT_NOTIFICATIONS_ENABLED: bool = true;
pub const DEFAULT_NOTIFICATION_THRESHOLD: f64 = 80.0;

fn default_notifications_enabled() -> bool {
    DEFAULT_NOTIFICATIONS_ENABLED
}

fn default_notification_threshold() -> f64 {
    DEFAULT_NOTIFICATION_THRESHOLD
}

/// Spending limit for one category over a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_id: Option<i64>,
    pub user_id: String,
    pub category: String,
    pub amount: f64,
    /// Spent so far; may exceed `amount`
    pub spent: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default = "default_notifications_enabled")]
    pub notifications_enabled: bool,
    /// Percentage of the budget at which the mobile client notifies
    #[serde(default = "default_notification_threshold")]
    pub notification_threshold: f64,
    #[serde(default)]
    pub notification_sent: bool,
}

/// Savings goal tracked by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoal {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_id: Option<i64>,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
}

/// Usage of a single budget.
///
/// `percentage_used` is `None` when the budget amount is zero, so the
/// dashboard can tell "no allotment" apart from "0% used".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub category: String,
    pub amount: f64,
    pub spent: f64,
    pub remaining: f64,
    pub percentage_used: Option<f64>,
}

/// Aggregated figures for one user's records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAnalysis {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_income: f64,
    pub category_expenses: BTreeMap<String, f64>,
    pub budget_status: Vec<BudgetStatus>,
}

/// Response of GET /api/financial-data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDataResponse {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<FinancialGoal>,
    pub analysis: FinancialAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDataRequest {
    pub user_id: Option<String>,
}

/// Query string of GET /api/transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListRequest {
    pub user_id: Option<String>,
    /// `all`, `income` or `expense`
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub search: Option<String>,
    /// RFC 3339 or `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// RFC 3339 or `YYYY-MM-DD` (whole day, inclusive)
    pub end_date: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: u32,
    pub per_page: u32,
    pub total_items: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTotals {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
    pub pagination: PaginationInfo,
    /// Totals over every transaction matching the filters, not just this page
    pub totals: TransactionTotals,
}

/// Query string of GET /api/budgets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetListRequest {
    pub user_id: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetWithStatus {
    #[serde(flatten)]
    pub budget: Budget,
    pub remaining: f64,
    pub percentage_used: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTotals {
    pub total_amount: f64,
    pub total_spent: f64,
    pub total_remaining: f64,
    pub average_percentage_used: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetListResponse {
    pub budgets: Vec<BudgetWithStatus>,
    pub pagination: PaginationInfo,
    pub totals: BudgetTotals,
}

/// Account as known to the authentication service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

/// Body of PATCH /api/users
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserStatusRequest {
    pub uid: Option<String>,
    pub disabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Body of POST /api/ai
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "kebab-case")]
pub enum AiRequest {
    /// Free-form chat message
    Chat(String),
    /// Advice grounded in the user's own financial data
    FinancialAdvice(FinancialAdviceContent),
    /// Expense data pasted by the operator
    Analyze(String),
}

impl AiRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            AiRequest::Chat(_) => "chat",
            AiRequest::FinancialAdvice(_) => "financial-advice",
            AiRequest::Analyze(_) => "analyze",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAdviceContent {
    pub user_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResponse {
    pub response: String,
}

/// Body returned with every non-success status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Which side of the ledger a transaction listing should include
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionTypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TransactionTypeFilter {
    pub fn matches(&self, is_income: bool) -> bool {
        match self {
            TransactionTypeFilter::All => true,
            TransactionTypeFilter::Income => is_income,
            TransactionTypeFilter::Expense => !is_income,
        }
    }
}

impl FromStr for TransactionTypeFilter {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(TransactionTypeFilter::All),
            "income" => Ok(TransactionTypeFilter::Income),
            "expense" => Ok(TransactionTypeFilter::Expense),
            _ => Err(UnknownVariantError {
                kind: "transaction type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariantError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariantError {}
