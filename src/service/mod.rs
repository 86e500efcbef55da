//! CustomerService: validation policy plus repository delegation.

mod customers;
mod validation;
pub use customers::CustomerService;
pub use validation::{RequestValidator, MAX_TEXT_LENGTH};
