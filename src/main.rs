use dotenvy::dotenv;
use std::env;

use budget_proration::api::{config::ApiConfig, routes::router};
use budget_proration::utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    // Load API configuration
    let api_config = ApiConfig::from_env();

    tracing::info!("API configuration loaded successfully");

    // Budget source and proration policy
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        "Application configuration loaded, daily rate policy: {}",
        app_config.accounting.daily_rate_policy
    );

    let router = router(app_config);

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting budget proration server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
