// Public library interface for budget-proration
pub mod accounting;
pub mod action_router;
pub mod api;
pub mod budget;
pub mod cli_helper;
pub mod cli_utils;
pub mod utils;
