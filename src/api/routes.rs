use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    budgets::{get_budget, get_budgets, put_budget},
    health,
    mutation::process_mutation,
    query::{get_query, get_query_breakdown},
};
use crate::utils::app_config::AppConfig;

/// Build the HTTP router with all routes bound to the shared state
pub fn router(app_config: AppConfig) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Generic action endpoint
        .route("/process", post(process_mutation))
        // Budgets
        .route("/budgets", get(get_budgets))
        .route("/budgets/:year_month", get(get_budget).put(put_budget))
        // Proration
        .route("/query", get(get_query))
        .route("/query/breakdown", get(get_query_breakdown))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_config)
}
