//! Shared application state, built once in `main` and handed to the routers.

use crate::service::CustomerService;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Kept for readiness checks; customer access goes through `customers`.
    pub pool: SqlitePool,
    pub customers: Arc<CustomerService>,
}
