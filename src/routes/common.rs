//! Liveness, schema-aware readiness and build version endpoints.

use crate::migration::{applied_version, latest_version};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

/// Ready only when the store answers and every known migration is applied.
#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema_version: Option<i64>,
    expected_schema_version: i64,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let expected = latest_version();
    let (status, database, schema_version) = match applied_version(&state.pool).await {
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            ("degraded", "unavailable", None)
        }
        Ok(Some(v)) if v >= expected => ("ok", "ok", Some(v)),
        Ok(v) => ("degraded", "migrations_pending", v),
    };
    let code = if status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        code,
        Json(ReadyBody {
            status,
            database,
            schema_version,
            expected_schema_version: expected,
        }),
    )
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "schemaVersion": latest_version()
    }))
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
