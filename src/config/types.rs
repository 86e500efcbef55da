//! Runtime settings read at startup.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Which repository implementation serves customer reads and writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataAccess {
    /// Entity map + query builder, rows decoded through a derived row type.
    #[default]
    Mapped,
    /// Hand-written SQL with positional row marshaling.
    Sql,
}

impl FromStr for DataAccess {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mapped" => Ok(DataAccess::Mapped),
            "sql" => Ok(DataAccess::Sql),
            _ => Err("expected 'mapped' or 'sql'".into()),
        }
    }
}

impl fmt::Display for DataAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataAccess::Mapped => "mapped",
            DataAccess::Sql => "sql",
        })
    }
}

/// How much checking `create` does beyond type binding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    #[default]
    Permissive,
    /// Required fields non-blank, all text within the column bound.
    Strict,
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(ValidationPolicy::Permissive),
            "strict" => Ok(ValidationPolicy::Strict),
            _ => Err("expected 'permissive' or 'strict'".into()),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValidationPolicy::Permissive => "permissive",
            ValidationPolicy::Strict => "strict",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Interactive API docs are only mounted in development.
    pub fn serves_docs(self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err("expected 'Development' or 'Production'".into()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub environment: Environment,
    pub data_access: DataAccess,
    pub validation: ValidationPolicy,
}
