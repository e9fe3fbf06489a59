use crate::accounting::processor_enums::{AccountingProcessorInput, AccountingProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum ActionRouterInput {
    Accounting(AccountingProcessorInput),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum ActionRouterOutput {
    Accounting(AccountingProcessorOutput),
}

impl ActionRouterInput {

    pub async fn process(&self, app_config: AppConfig)-> Result<ActionRouterOutput> {
        match self {
            ActionRouterInput::Accounting(processor) => {
                let mut config = app_config.accounting.clone();

                let res = processor.process(&mut app_config.clone(), &mut config).await?;

                Ok(ActionRouterOutput::Accounting(res))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounting::config::AccountingConfig;

    #[test]
    fn test_input_json_shape() {
        let input: ActionRouterInput =
            serde_json::from_str(r#"{ "Accounting": { "GetBudget": "2022-10" } }"#).unwrap();
        assert!(matches!(
            input,
            ActionRouterInput::Accounting(AccountingProcessorInput::GetBudget(_))
        ));

        let input: ActionRouterInput = serde_json::from_str(
            r#"{ "Accounting": { "Query": { "start": "2022-10-15", "end": "2022-10-16" } } }"#,
        )
        .unwrap();
        assert!(matches!(
            input,
            ActionRouterInput::Accounting(AccountingProcessorInput::Query(_))
        ));
    }

    #[tokio::test]
    async fn test_routes_to_accounting() {
        let app_config = AppConfig::in_memory(AccountingConfig::default());

        let res = ActionRouterInput::Accounting(AccountingProcessorInput::ListBudgets)
            .process(app_config)
            .await
            .unwrap();

        match res {
            ActionRouterOutput::Accounting(AccountingProcessorOutput::ListBudgets(budgets)) => {
                assert!(budgets.is_empty())
            }
            other => panic!("unexpected output: {:?}", other),
        }
    }
}
