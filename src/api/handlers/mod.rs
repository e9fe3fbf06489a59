pub mod budgets;
pub mod health;
pub mod mutation;
pub mod query;
