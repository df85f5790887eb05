//! Conversions between domain types and the `shared` DTOs.

pub mod analysis_mapper;
pub mod budget_mapper;
pub mod goal_mapper;
pub mod listing_mapper;
pub mod transaction_mapper;
pub mod user_mapper;

pub use analysis_mapper::AnalysisMapper;
pub use budget_mapper::BudgetMapper;
pub use goal_mapper::GoalMapper;
pub use listing_mapper::ListingMapper;
pub use transaction_mapper::TransactionMapper;
pub use user_mapper::UserMapper;
