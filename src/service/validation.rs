//! Create-time validation under the configured policy.

use crate::config::ValidationPolicy;
use crate::error::AppError;
use crate::model::{Address, NewCustomer};

/// Upper bound of every text column.
pub const MAX_TEXT_LENGTH: usize = 50;

pub struct RequestValidator;

impl RequestValidator {
    /// Permissive accepts anything that bound; strict requires non-blank
    /// required fields and every value within `MAX_TEXT_LENGTH` characters.
    pub fn validate(customer: &NewCustomer, policy: ValidationPolicy) -> Result<(), AppError> {
        match policy {
            ValidationPolicy::Permissive => Ok(()),
            ValidationPolicy::Strict => {
                required("firstName", &customer.first_name)?;
                required("lastName", &customer.last_name)?;
                validate_address("billingAddress", &customer.billing_address)?;
                validate_address("shippingAddress", &customer.shipping_address)
            }
        }
    }
}

fn validate_address(prefix: &str, address: &Address) -> Result<(), AppError> {
    required(&format!("{}.line1", prefix), &address.line1)?;
    for (name, line) in [
        ("line2", &address.line2),
        ("line3", &address.line3),
        ("line4", &address.line4),
    ] {
        if let Some(v) = line {
            bounded(&format!("{}.{}", prefix, name), v)?;
        }
    }
    required(&format!("{}.city", prefix), &address.city)?;
    required(&format!("{}.postCode", prefix), &address.post_code)?;
    required(&format!("{}.country", prefix), &address.country)
}

fn required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    bounded(field, value)
}

fn bounded(field: &str, value: &str) -> Result<(), AppError> {
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, MAX_TEXT_LENGTH
        )));
    }
    Ok(())
}
