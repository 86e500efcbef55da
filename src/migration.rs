//! Ordered, additive schema migrations tracked in a `VersionInfo` table.

use crate::error::AppError;
use sqlx::SqlitePool;
use std::collections::HashSet;

pub struct Migration {
    pub version: i64,
    pub description: &'static str,
    pub sql: &'static str,
}

/// All migrations, ascending by version. Append only.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 202402132026,
    description: "create Customer table",
    sql: r#"
        CREATE TABLE "Customer" (
            "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "FirstName" VARCHAR(50),
            "LastName" VARCHAR(50),
            "BillingAddressLine1" VARCHAR(50),
            "BillingAddressLine2" VARCHAR(50),
            "BillingAddressLine3" VARCHAR(50),
            "BillingAddressLine4" VARCHAR(50),
            "BillingAddressCity" VARCHAR(50),
            "BillingAddressPostCode" VARCHAR(50),
            "BillingAddressCountry" VARCHAR(50),
            "ShippingAddressLine1" VARCHAR(50),
            "ShippingAddressLine2" VARCHAR(50),
            "ShippingAddressLine3" VARCHAR(50),
            "ShippingAddressLine4" VARCHAR(50),
            "ShippingAddressCity" VARCHAR(50),
            "ShippingAddressPostCode" VARCHAR(50),
            "ShippingAddressCountry" VARCHAR(50)
        )
    "#,
}];

const VERSION_TABLE_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS "VersionInfo" (
        "Version" INTEGER PRIMARY KEY,
        "Description" TEXT,
        "AppliedOn" TEXT NOT NULL
    )
"#;

/// Apply every migration not yet recorded in `VersionInfo`, each in its own transaction.
/// Returns how many were applied.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<usize, AppError> {
    apply(pool, MIGRATIONS).await
}

/// Highest version this build knows about.
pub fn latest_version() -> i64 {
    MIGRATIONS.iter().map(|m| m.version).max().unwrap_or(0)
}

/// Highest version recorded in `VersionInfo`; `None` before the first run.
pub async fn applied_version(pool: &SqlitePool) -> Result<Option<i64>, AppError> {
    let has_table: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'VersionInfo'",
    )
    .fetch_one(pool)
    .await?;
    if has_table == 0 {
        return Ok(None);
    }
    let version: Option<i64> = sqlx::query_scalar(r#"SELECT MAX("Version") FROM "VersionInfo""#)
        .fetch_one(pool)
        .await?;
    Ok(version)
}

async fn apply(pool: &SqlitePool, migrations: &[Migration]) -> Result<usize, AppError> {
    sqlx::query(VERSION_TABLE_DDL).execute(pool).await?;

    let applied: HashSet<i64> = sqlx::query_scalar::<_, i64>(r#"SELECT "Version" FROM "VersionInfo""#)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

    let mut pending: Vec<&Migration> = migrations
        .iter()
        .filter(|m| !applied.contains(&m.version))
        .collect();
    pending.sort_by_key(|m| m.version);

    for m in &pending {
        let mut tx = pool.begin().await?;
        sqlx::query(m.sql).execute(&mut *tx).await?;
        sqlx::query(r#"INSERT INTO "VersionInfo" ("Version", "Description", "AppliedOn") VALUES (?, ?, ?)"#)
            .bind(m.version)
            .bind(m.description)
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(version = m.version, description = m.description, "migration applied");
    }
    Ok(pending.len())
}
