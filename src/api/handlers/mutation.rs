use axum::{extract::State, Json};
use serde_json::Value;
use crate::{
    action_router::ActionRouterInput,
    api::{error::ApiError, extractors::ActionRouterExtractor, response::ApiResponse},
    utils::app_config::AppConfig,
};

/// POST /process - Generic action endpoint
/// Accepts ActionRouterInput enum in nested JSON format
///
/// Expected JSON structure:
/// { "Accounting": { "Query": { "start": "2022-10-30", "end": "2022-12-05" } } }
/// or any other valid ActionRouterInput variant
pub async fn process_mutation(
    State(app_config): State<AppConfig>,
    ActionRouterExtractor(payload): ActionRouterExtractor,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let action_input: ActionRouterInput = serde_json::from_value(payload)
        .map_err(|e| {
            ApiError::bad_request(format!(
                "Failed to deserialize request into valid action: {}",
                e
            ))
        })?;

    let result = action_input
        .process(app_config)
        .await
        .map_err(|e| ApiError::from_action("Action processing failed", e))?;

    let result_json = serde_json::to_value(&result)
        .map_err(|e| ApiError::internal_error(format!("Failed to serialize response: {}", e)))?;

    Ok(Json(ApiResponse::success(result_json)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounting::config::AccountingConfig;
    use bigdecimal::BigDecimal;
    use serde_json::json;

    #[tokio::test]
    async fn test_process_query_action() {
        let app_config = AppConfig::in_memory(AccountingConfig::default());
        let payload = json!({ "Accounting": { "Query": { "start": "2022-10-15", "end": "2022-10-15" } } });

        let Json(response) = process_mutation(State(app_config), ActionRouterExtractor(payload))
            .await
            .unwrap();

        assert!(response.success);
        let data = response.data.unwrap();
        let total: BigDecimal = serde_json::from_value(data["Accounting"]["Query"].clone()).unwrap();
        assert_eq!(total, BigDecimal::from(0));
    }

    #[tokio::test]
    async fn test_rejects_unknown_action() {
        let app_config = AppConfig::in_memory(AccountingConfig::default());
        let payload = json!({ "Payroll": {} });

        let err = process_mutation(State(app_config), ActionRouterExtractor(payload))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_negative_set_budget_is_bad_request() {
        let app_config = AppConfig::in_memory(AccountingConfig::default());
        let payload = json!({ "Accounting": { "SetBudget": { "year_month": "2022-10", "amount": "-5" } } });

        let err = process_mutation(State(app_config.clone()), ActionRouterExtractor(payload))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert!(app_config.budgets.get_all().unwrap().is_empty());
    }
}
