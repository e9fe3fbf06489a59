use crate::cli_utils::CliResult;
use dialoguer::Select;

/// Interactive menu builder
pub struct Menu {
    title: String,
    items: Vec<String>,
}

impl Menu {
    /// Create a new menu with a title
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    /// Add multiple items
    pub fn items(mut self, items: Vec<&str>) -> Self {
        self.items.extend(items.iter().map(|s| s.to_string()));
        self
    }

    /// Show the menu and get the selected index
    pub fn interact(&self) -> CliResult<usize> {
        let item_refs: Vec<&str> = self.items.iter().map(|s| s.as_str()).collect();
        Ok(Select::new()
            .with_prompt(&self.title)
            .items(&item_refs)
            .default(0)
            .interact()?)
    }
}

/// Budget CLI operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    ListBudgets,
    SetBudget,
    Query,
    Breakdown,
    Exit,
}

impl Operation {
    const ALL: [Operation; 5] = [
        Operation::ListBudgets,
        Operation::SetBudget,
        Operation::Query,
        Operation::Breakdown,
        Operation::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Operation::ListBudgets => "List budgets",
            Operation::SetBudget => "Set budget",
            Operation::Query => "Query amount",
            Operation::Breakdown => "Query breakdown",
            Operation::Exit => "Exit",
        }
    }

    /// Show operation selection menu
    pub fn select() -> CliResult<Self> {
        let menu = Menu::new("Select operation")
            .items(Self::ALL.iter().map(|op| op.label()).collect());

        let idx = menu.interact()?;
        Ok(Self::ALL.get(idx).copied().unwrap_or(Operation::Exit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_builder() {
        let menu = Menu::new("Pick").items(vec!["a", "b"]).items(vec!["c"]);
        assert_eq!(menu.items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_operation_labels_are_unique() {
        let mut labels: Vec<&str> = Operation::ALL.iter().map(|op| op.label()).collect();
        labels.dedup();
        assert_eq!(labels.len(), Operation::ALL.len());
    }
}
