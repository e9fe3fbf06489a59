use anyhow::{Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use super::models::Budget;
use super::storage::BudgetRepo;

/// Budgets persisted as a single JSON document on disk.
///
/// Writes go to a sibling temp file which is then renamed over the original,
/// so the document on disk is always either the old or the new version.
pub struct JsonBudgetStore {
    file_path: PathBuf,
    lock: RwLock<()>,
}

impl JsonBudgetStore {
    /// Create a file-backed store, creating the parent directory if needed
    pub fn new<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let file_path = file_path.as_ref().to_path_buf();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            file_path,
            lock: RwLock::new(()),
        })
    }

    /// Load budgets from disk. Only a missing file is an empty set, an empty
    /// or malformed file is an error.
    fn load(&self) -> Result<Vec<Budget>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.file_path)?;
        if json.trim().is_empty() {
            return Err(anyhow!(
                "budget file {} is empty",
                self.file_path.display()
            ));
        }
        let budgets = serde_json::from_str(&json)?;
        Ok(budgets)
    }

    fn write(&self, budgets: &[Budget]) -> Result<()> {
        let json = serde_json::to_string_pretty(budgets)?;
        let tmp_path = self.temp_path();
        fs::write(&tmp_path, json)?;
        if let Err(e) = fs::rename(&tmp_path, &self.file_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.tmp", std::process::id()));
        self.file_path.with_file_name(name)
    }

    /// Get file path
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl BudgetRepo for JsonBudgetStore {
    fn get_all(&self) -> Result<Vec<Budget>> {
        let _guard = self
            .lock
            .read()
            .map_err(|_| anyhow!("budget file lock poisoned"))?;
        self.load()
    }

    fn save(&self, budget: Budget) -> Result<()> {
        let _guard = self
            .lock
            .write()
            .map_err(|_| anyhow!("budget file lock poisoned"))?;

        let mut budgets = self.load()?;
        budgets.retain(|b| b.year_month != budget.year_month);
        budgets.push(budget);
        budgets.sort_by_key(|b| b.year_month);
        self.write(&budgets)
    }
}
