//! Load `AppConfig` from environment variables (with `.env` support).

use super::types::AppConfig;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://customers.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);

impl AppConfig {
    /// Read config from the process environment after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build config from any variable source. Unset variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(AppConfig {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            bind_addr: parse_or(&lookup, "BIND_ADDR", SocketAddr::from(DEFAULT_BIND_ADDR))?,
            environment: parse_or(&lookup, "APP_ENVIRONMENT", Default::default())?,
            data_access: parse_or(&lookup, "CUSTOMERS_DATA_ACCESS", Default::default())?,
            validation: parse_or(&lookup, "CUSTOMERS_VALIDATION", Default::default())?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: ToString,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => parse_var(name, raw),
        _ => Ok(default),
    }
}

fn parse_var<T>(name: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match raw.trim().parse::<T>() {
        Ok(v) => Ok(v),
        Err(e) => Err(ConfigError::InvalidVar {
            name,
            reason: e.to_string(),
            value: raw,
        }),
    }
}
