//! Service configuration: types and environment loading.

mod loader;
mod types;

pub use loader::DEFAULT_DATABASE_URL;
pub use types::{AppConfig, DataAccess, Environment, ValidationPolicy};
