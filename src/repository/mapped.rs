//! Repository driven by the customer entity map and the query builder.

use super::CustomerRepository;
use crate::error::AppError;
use crate::mapping::{CustomerRow, ADDRESS_FIELDS, CUSTOMER_TABLE};
use crate::model::{Customer, NewCustomer};
use crate::sql::{insert, select_by_key, EntityMap};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Mapping of `Customer` onto its table, addresses flattened as owned groups.
pub fn customer_entity() -> EntityMap {
    EntityMap::new(CUSTOMER_TABLE, "id")
        .property("first_name")
        .property("last_name")
        .owns_one("billing_address", &ADDRESS_FIELDS)
        .owns_one("shipping_address", &ADDRESS_FIELDS)
}

pub struct MappedCustomerRepository {
    pool: SqlitePool,
    entity: EntityMap,
}

impl MappedCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        MappedCustomerRepository {
            pool,
            entity: customer_entity(),
        }
    }
}

#[async_trait]
impl CustomerRepository for MappedCustomerRepository {
    async fn get(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let q = select_by_key(&self.entity);
        tracing::debug!(sql = %q.sql, id, "query");
        let row = sqlx::query_as::<_, CustomerRow>(&q.sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(CustomerRow::into_customer))
    }

    async fn create(&self, customer: &NewCustomer) -> Result<i64, AppError> {
        let values = CustomerRow::from_new(0, customer).column_values();
        let q = insert(&self.entity, &values);
        tracing::debug!(sql = %q.sql, "query");
        let mut query = sqlx::query_scalar::<_, i64>(&q.sql);
        for p in q.params {
            query = query.bind(p);
        }
        let id = query.fetch_one(&self.pool).await?;
        Ok(id)
    }
}
