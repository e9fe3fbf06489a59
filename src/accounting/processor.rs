use crate::accounting::config::AccountingConfig;
use crate::accounting::operations::*;
use crate::{
    accounting::processor_enums::{AccountingProcessorInput, AccountingProcessorOutput},
    utils::{app_config::AppConfig, traits::ActionProcessor},
};
use anyhow::Result;

impl ActionProcessor<AccountingConfig, AccountingProcessorOutput> for AccountingProcessorInput {
    async fn process(
        &self,
        app_config: &mut AppConfig,
        local_config: &mut AccountingConfig,
    ) -> Result<AccountingProcessorOutput> {
        let repo = app_config.budgets.as_ref();
        match self {
            AccountingProcessorInput::Query(args) => {
                let res = query_amount(repo, local_config, args)?;
                Ok(AccountingProcessorOutput::Query(res))
            }
            AccountingProcessorInput::Breakdown(args) => {
                let res = query_breakdown(repo, local_config, args)?;
                Ok(AccountingProcessorOutput::Breakdown(res))
            }
            AccountingProcessorInput::ListBudgets => {
                let res = list_budgets(repo)?;
                Ok(AccountingProcessorOutput::ListBudgets(res))
            }
            AccountingProcessorInput::GetBudget(year_month) => {
                let res = get_budget(repo, *year_month)?;
                Ok(AccountingProcessorOutput::GetBudget(res))
            }
            AccountingProcessorInput::SetBudget(budget) => {
                set_budget(repo, budget.clone())?;
                Ok(AccountingProcessorOutput::SetBudget)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounting::config::DailyRatePolicy;
    use crate::accounting::processor_enums::QueryInputArgs;
    use crate::budget::models::{Budget, YearMonth};
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_set_then_query() {
        let mut app_config = AppConfig::in_memory(AccountingConfig::default());
        let mut config = app_config.accounting.clone();
        let october = YearMonth::new(2022, 10).unwrap();

        let res = AccountingProcessorInput::SetBudget(Budget::new(october, BigDecimal::from(31000)))
            .process(&mut app_config, &mut config)
            .await
            .unwrap();
        assert!(matches!(res, AccountingProcessorOutput::SetBudget));

        let res = AccountingProcessorInput::Query(QueryInputArgs {
            start: date(2022, 10, 15),
            end: date(2022, 10, 16),
        })
        .process(&mut app_config, &mut config)
        .await
        .unwrap();

        match res {
            AccountingProcessorOutput::Query(total) => assert_eq!(total, BigDecimal::from(2000)),
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_missing_budget() {
        let mut app_config = AppConfig::in_memory(AccountingConfig::new(DailyRatePolicy::Exact));
        let mut config = app_config.accounting.clone();

        let res = AccountingProcessorInput::GetBudget(YearMonth::new(2022, 10).unwrap())
            .process(&mut app_config, &mut config)
            .await
            .unwrap();

        assert!(matches!(res, AccountingProcessorOutput::GetBudget(None)));
    }
}
