//! HTTP handlers for customer reads and writes.

pub mod customers;
pub use customers::*;
