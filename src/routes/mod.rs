//! Routers: customers, health endpoints, and development docs.

mod common;
mod customers;
mod docs;

pub use common::common_routes_with_ready;
pub use customers::customer_routes;
pub use docs::{docs_routes, ApiDoc};
