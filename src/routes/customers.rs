//! Customer routes, mounted under `/api`.

use crate::handlers::customers::{create_customer, get_customer};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn customer_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", post(create_customer))
        .route("/customers/:id", get(get_customer))
        .with_state(state)
}
