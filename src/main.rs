//! Customers API server: loads config, opens the store, applies migrations, serves.

use customers_api::{
    apply_migrations, build_router, repository, store, AppConfig, AppState, CustomerService,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("customers_api=info,tower_http=info")),
        )
        .init();

    let pool = store::connect(&config.database_url, config.max_connections).await?;
    let applied = apply_migrations(&pool).await?;
    tracing::info!(applied, "migrations up to date");

    let repo = repository::build(config.data_access, pool.clone());
    let customers = Arc::new(CustomerService::new(repo, config.validation));
    tracing::info!(
        data_access = %config.data_access,
        validation = %config.validation,
        environment = ?config.environment,
        "customer service ready"
    );

    let state = AppState { pool, customers };
    let app = build_router(state, config.environment);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
