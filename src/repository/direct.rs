//! Repository using hand-written SQL and positional row marshaling.

use super::CustomerRepository;
use crate::error::AppError;
use crate::mapping::CustomerRow;
use crate::model::{Customer, NewCustomer};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_BY_ID: &str = r#"
    SELECT Id, FirstName, LastName,
           BillingAddressLine1, BillingAddressLine2, BillingAddressLine3, BillingAddressLine4,
           BillingAddressCity, BillingAddressPostCode, BillingAddressCountry,
           ShippingAddressLine1, ShippingAddressLine2, ShippingAddressLine3, ShippingAddressLine4,
           ShippingAddressCity, ShippingAddressPostCode, ShippingAddressCountry
    FROM Customer
    WHERE Id = ?
"#;

const INSERT: &str = r#"
    INSERT INTO Customer (
        FirstName, LastName,
        BillingAddressLine1, BillingAddressLine2, BillingAddressLine3, BillingAddressLine4,
        BillingAddressCity, BillingAddressPostCode, BillingAddressCountry,
        ShippingAddressLine1, ShippingAddressLine2, ShippingAddressLine3, ShippingAddressLine4,
        ShippingAddressCity, ShippingAddressPostCode, ShippingAddressCountry
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

const LAST_ID: &str = "SELECT last_insert_rowid()";

pub struct SqlCustomerRepository {
    pool: SqlitePool,
}

impl SqlCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SqlCustomerRepository { pool }
    }
}

/// Columns are read by position in `SELECT_BY_ID` order.
fn row_at(row: &SqliteRow) -> Result<CustomerRow, sqlx::Error> {
    Ok(CustomerRow {
        id: row.try_get(0)?,
        first_name: row.try_get(1)?,
        last_name: row.try_get(2)?,
        billing_address_line1: row.try_get(3)?,
        billing_address_line2: row.try_get(4)?,
        billing_address_line3: row.try_get(5)?,
        billing_address_line4: row.try_get(6)?,
        billing_address_city: row.try_get(7)?,
        billing_address_post_code: row.try_get(8)?,
        billing_address_country: row.try_get(9)?,
        shipping_address_line1: row.try_get(10)?,
        shipping_address_line2: row.try_get(11)?,
        shipping_address_line3: row.try_get(12)?,
        shipping_address_line4: row.try_get(13)?,
        shipping_address_city: row.try_get(14)?,
        shipping_address_post_code: row.try_get(15)?,
        shipping_address_country: row.try_get(16)?,
    })
}

#[async_trait]
impl CustomerRepository for SqlCustomerRepository {
    async fn get(&self, id: i64) -> Result<Option<Customer>, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(r) => Ok(Some(row_at(&r)?.into_customer())),
            None => Ok(None),
        }
    }

    async fn create(&self, customer: &NewCustomer) -> Result<i64, AppError> {
        let row = CustomerRow::from_new(0, customer);
        // last_insert_rowid is per connection
        let mut conn = self.pool.acquire().await?;
        tracing::debug!(sql = %INSERT, "query");
        sqlx::query(INSERT)
            .bind(&row.first_name)
            .bind(&row.last_name)
            .bind(&row.billing_address_line1)
            .bind(&row.billing_address_line2)
            .bind(&row.billing_address_line3)
            .bind(&row.billing_address_line4)
            .bind(&row.billing_address_city)
            .bind(&row.billing_address_post_code)
            .bind(&row.billing_address_country)
            .bind(&row.shipping_address_line1)
            .bind(&row.shipping_address_line2)
            .bind(&row.shipping_address_line3)
            .bind(&row.shipping_address_line4)
            .bind(&row.shipping_address_city)
            .bind(&row.shipping_address_post_code)
            .bind(&row.shipping_address_country)
            .execute(&mut *conn)
            .await?;
        tracing::debug!(sql = %LAST_ID, "query");
        let id: i64 = sqlx::query_scalar(LAST_ID).fetch_one(&mut *conn).await?;
        Ok(id)
    }
}
