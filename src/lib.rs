//! Customers API: customer records over SQLite behind an axum REST surface.

pub mod case;
pub mod config;
pub mod error;
pub mod handlers;
pub mod mapping;
pub mod migration;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DataAccess, Environment, ValidationPolicy};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Address, Customer, NewCustomer};
pub use repository::CustomerRepository;
pub use routes::{common_routes_with_ready, customer_routes, docs_routes};
pub use service::CustomerService;
pub use state::AppState;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies above this many bytes are rejected with 413.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application router: health endpoints, `/api/customers`, and docs in development.
pub fn build_router(state: AppState, environment: Environment) -> Router {
    let mut app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api", customer_routes(state));
    if environment.serves_docs() {
        app = app.merge(docs_routes());
    }
    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
    )
}
