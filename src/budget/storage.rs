use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::RwLock;
use super::models::{Budget, YearMonth};

/// Source of monthly budgets.
///
/// Proration only ever needs `get_all`; `save` exists for the outer surfaces
/// that manage budgets.
pub trait BudgetRepo: Send + Sync {
    /// Every known budget, in no particular order
    fn get_all(&self) -> Result<Vec<Budget>>;

    /// Insert or replace the budget for its month
    fn save(&self, budget: Budget) -> Result<()>;
}

/// In-memory storage for monthly budgets
/// Maps year_month -> Budget
#[derive(Debug, Default)]
pub struct BudgetStore {
    budgets: RwLock<HashMap<YearMonth, Budget>>,
}

impl BudgetStore {
    /// Create a new empty budget store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with budgets, later entries replace earlier ones
    pub fn with_budgets(budgets: Vec<Budget>) -> Self {
        let map = budgets
            .into_iter()
            .map(|b| (b.year_month, b))
            .collect();
        Self {
            budgets: RwLock::new(map),
        }
    }
}

impl BudgetRepo for BudgetStore {
    fn get_all(&self) -> Result<Vec<Budget>> {
        let budgets = self
            .budgets
            .read()
            .map_err(|_| anyhow!("budget store lock poisoned"))?;
        Ok(budgets.values().cloned().collect())
    }

    fn save(&self, budget: Budget) -> Result<()> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|_| anyhow!("budget store lock poisoned"))?;
        budgets.insert(budget.year_month, budget);
        Ok(())
    }
}
