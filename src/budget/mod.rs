pub mod models;
pub mod persistence;
pub mod storage;

pub use models::{Budget, BudgetSnapshot, ParseYearMonthError, YearMonth};
pub use persistence::JsonBudgetStore;
pub use storage::{BudgetRepo, BudgetStore};
