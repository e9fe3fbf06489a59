use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::{
    accounting::processor_enums::{AccountingProcessorInput, AccountingProcessorOutput},
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{
        error::ApiError,
        extractors::ApiJson,
        response::ApiResponse,
        validation::{validate_amount, validate_year_month},
    },
    budget::models::Budget,
    utils::app_config::AppConfig,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct SetBudgetBody {
    pub amount: BigDecimal,
}

async fn run(app_config: AppConfig, input: AccountingProcessorInput) -> Result<AccountingProcessorOutput, ApiError> {
    match ActionRouterInput::Accounting(input).process(app_config).await {
        Ok(ActionRouterOutput::Accounting(output)) => Ok(output),
        Err(e) => Err(ApiError::from_action("Budget storage failed", e)),
    }
}

/// GET /budgets - All budgets, oldest month first
pub async fn get_budgets(
    State(app_config): State<AppConfig>,
) -> Result<Json<ApiResponse<Vec<Budget>>>, ApiError> {
    match run(app_config, AccountingProcessorInput::ListBudgets).await? {
        AccountingProcessorOutput::ListBudgets(budgets) => Ok(Json(ApiResponse::success(budgets))),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /budgets/:year_month
pub async fn get_budget(
    State(app_config): State<AppConfig>,
    Path(year_month): Path<String>,
) -> Result<Json<ApiResponse<Budget>>, ApiError> {
    let year_month = validate_year_month(&year_month)?;

    match run(app_config, AccountingProcessorInput::GetBudget(year_month)).await? {
        AccountingProcessorOutput::GetBudget(Some(budget)) => Ok(Json(ApiResponse::success(budget))),
        AccountingProcessorOutput::GetBudget(None) => {
            Err(ApiError::not_found(format!("Budget {}", year_month)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// PUT /budgets/:year_month - Create or replace a month's budget
pub async fn put_budget(
    State(app_config): State<AppConfig>,
    Path(year_month): Path<String>,
    ApiJson(body): ApiJson<SetBudgetBody>,
) -> Result<(StatusCode, Json<ApiResponse<Budget>>), ApiError> {
    let year_month = validate_year_month(&year_month)?;
    validate_amount(&body.amount)?;

    let budget = Budget::new(year_month, body.amount);

    match run(app_config, AccountingProcessorInput::SetBudget(budget.clone())).await? {
        AccountingProcessorOutput::SetBudget => {
            Ok((StatusCode::OK, Json(ApiResponse::success(budget))))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounting::config::AccountingConfig;
    use crate::budget::models::YearMonth;

    #[tokio::test]
    async fn test_put_then_get_budget() {
        let app_config = AppConfig::in_memory(AccountingConfig::default());

        let (status, _) = put_budget(
            State(app_config.clone()),
            Path("202210".to_string()),
            ApiJson(SetBudgetBody {
                amount: BigDecimal::from(31000),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::OK);

        let Json(response) = get_budget(State(app_config.clone()), Path("2022-10".to_string()))
            .await
            .unwrap();
        let budget = response.data.unwrap();
        assert_eq!(budget.year_month, YearMonth::new(2022, 10).unwrap());
        assert_eq!(budget.amount, BigDecimal::from(31000));

        let Json(response) = get_budgets(State(app_config)).await.unwrap();
        assert_eq!(response.data.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_budget_is_not_found() {
        let app_config = AppConfig::in_memory(AccountingConfig::default());

        let err = get_budget(State(app_config), Path("2022-10".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_put_rejects_bad_input() {
        let app_config = AppConfig::in_memory(AccountingConfig::default());

        let err = put_budget(
            State(app_config.clone()),
            Path("2022-10".to_string()),
            ApiJson(SetBudgetBody {
                amount: BigDecimal::from(-1),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = put_budget(
            State(app_config),
            Path("2022-00".to_string()),
            ApiJson(SetBudgetBody {
                amount: BigDecimal::from(1),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
