pub mod budget;
pub mod goal;
pub mod transaction;
pub mod user;

pub use budget::Budget;
pub use goal::FinancialGoal;
pub use transaction::Transaction;
pub use user::UserRecord;
