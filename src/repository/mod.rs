//! Customer storage access. One implementation is chosen at startup.

mod direct;
mod mapped;

pub use direct::SqlCustomerRepository;
pub use mapped::{customer_entity, MappedCustomerRepository};

use crate::config::DataAccess;
use crate::error::AppError;
use crate::model::{Customer, NewCustomer};
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Fetch one customer by id. `None` when no row matches.
    async fn get(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Insert a customer and return the store-assigned id.
    async fn create(&self, customer: &NewCustomer) -> Result<i64, AppError>;
}

/// Build the repository selected by `kind` over `pool`.
pub fn build(kind: DataAccess, pool: SqlitePool) -> Arc<dyn CustomerRepository> {
    match kind {
        DataAccess::Mapped => Arc::new(MappedCustomerRepository::new(pool)),
        DataAccess::Sql => Arc::new(SqlCustomerRepository::new(pool)),
    }
}
