use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    accounting::{
        config::DailyRatePolicy,
        processor_enums::{AccountingProcessorInput, AccountingProcessorOutput, QueryInputArgs},
        proration::QueryBreakdown,
    },
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{error::ApiError, response::ApiResponse, validation::validate_date},
    utils::app_config::AppConfig,
};

/// Query parameters for a prorated amount
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub start: String,
    pub end: String,
}

impl QueryParams {
    fn to_input_args(&self) -> Result<QueryInputArgs, ApiError> {
        Ok(QueryInputArgs {
            start: validate_date(&self.start, "start")?,
            end: validate_date(&self.end, "end")?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResult {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub policy: DailyRatePolicy,
    pub amount: BigDecimal,
}

/// GET /query?start=YYYY-MM-DD&end=YYYY-MM-DD - Prorated amount over the inclusive range
pub async fn get_query(
    State(app_config): State<AppConfig>,
    Query(params): Query<QueryParams>,
) -> Result<(StatusCode, Json<ApiResponse<QueryResult>>), ApiError> {
    let args = params.to_input_args()?;
    let policy = app_config.accounting.daily_rate_policy;

    let action = ActionRouterInput::Accounting(AccountingProcessorInput::Query(args.clone()));

    let result = action
        .process(app_config)
        .await
        .map_err(|e| ApiError::from_action("Failed to query budgets", e))?;

    match result {
        ActionRouterOutput::Accounting(AccountingProcessorOutput::Query(amount)) => Ok((
            StatusCode::OK,
            Json(ApiResponse::success(QueryResult {
                start: args.start,
                end: args.end,
                policy,
                amount,
            })),
        )),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /query/breakdown?start=YYYY-MM-DD&end=YYYY-MM-DD - Per-month segments of a query
pub async fn get_query_breakdown(
    State(app_config): State<AppConfig>,
    Query(params): Query<QueryParams>,
) -> Result<(StatusCode, Json<ApiResponse<QueryBreakdown>>), ApiError> {
    let args = params.to_input_args()?;

    let action = ActionRouterInput::Accounting(AccountingProcessorInput::Breakdown(args));

    let result = action
        .process(app_config)
        .await
        .map_err(|e| ApiError::from_action("Failed to query budgets", e))?;

    match result {
        ActionRouterOutput::Accounting(AccountingProcessorOutput::Breakdown(breakdown)) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(breakdown))))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounting::config::AccountingConfig;
    use crate::budget::models::{Budget, YearMonth};
    use crate::budget::storage::BudgetStore;
    use std::sync::Arc;

    fn seeded_config() -> AppConfig {
        let store = BudgetStore::with_budgets(vec![
            Budget::new(YearMonth::new(2022, 10).unwrap(), BigDecimal::from(31000)),
            Budget::new(YearMonth::new(2022, 11).unwrap(), BigDecimal::from(3000)),
        ]);
        AppConfig::new(Arc::new(store), AccountingConfig::default())
    }

    fn params(start: &str, end: &str) -> Query<QueryParams> {
        Query(QueryParams {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    #[tokio::test]
    async fn test_get_query() {
        let (status, Json(response)) =
            get_query(State(seeded_config()), params("2022-10-31", "2022-11-02"))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::OK);
        let result = response.data.unwrap();
        assert_eq!(result.amount, BigDecimal::from(1200));
        assert_eq!(result.policy, DailyRatePolicy::Truncate);
    }

    #[tokio::test]
    async fn test_inverted_range_is_not_an_error() {
        let (status, Json(response)) =
            get_query(State(seeded_config()), params("2022-11-02", "2022-10-31"))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.data.unwrap().amount, BigDecimal::from(0));
    }

    #[tokio::test]
    async fn test_malformed_date_is_bad_request() {
        let err = get_query(State(seeded_config()), params("2022-10-32", "2022-11-02"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_query_breakdown() {
        let (_, Json(response)) =
            get_query_breakdown(State(seeded_config()), params("2022-10-30", "2022-12-05"))
                .await
                .unwrap();

        let breakdown = response.data.unwrap();
        assert_eq!(breakdown.segments.len(), 3);
        assert_eq!(breakdown.total, BigDecimal::from(5000));
        assert!(!breakdown.segments[2].budget_defined);
    }
}
