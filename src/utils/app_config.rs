use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;

use crate::accounting::config::AccountingConfig;
use crate::budget::persistence::JsonBudgetStore;
use crate::budget::storage::{BudgetRepo, BudgetStore};

#[derive(Clone)]
pub struct AppConfig {
    pub budgets: Arc<dyn BudgetRepo>,
    pub accounting: AccountingConfig,
}

impl AppConfig {
    pub fn new(budgets: Arc<dyn BudgetRepo>, accounting: AccountingConfig) -> Self {
        Self {
            budgets,
            accounting
        }
    }

    /// Volatile budgets, lost when the process exits
    pub fn in_memory(accounting: AccountingConfig) -> Self {
        Self::new(Arc::new(BudgetStore::new()), accounting)
    }

    /// BUDGET_STORE_PATH selects a JSON file store, otherwise budgets live in memory
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let accounting = AccountingConfig::from_env()?;

        match std::env::var("BUDGET_STORE_PATH") {
            Ok(path) if !path.trim().is_empty() => Self::with_store_path(path, accounting),
            _ => {
                tracing::warn!("BUDGET_STORE_PATH not set, budgets will be kept in memory");
                Ok(Self::in_memory(accounting))
            }
        }
    }

    pub fn with_store_path(path: impl AsRef<std::path::Path>, accounting: AccountingConfig) -> Result<Self> {
        let store = JsonBudgetStore::new(path)?;
        tracing::info!("Using budget file {}", store.file_path().display());
        Ok(Self::new(Arc::new(store), accounting))
    }
}
