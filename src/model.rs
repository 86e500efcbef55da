//! Customer domain types and the create request/response shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Postal address owned by exactly one customer (billing or shipping role).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    pub line2: Option<String>,
    pub line3: Option<String>,
    pub line4: Option<String>,
    pub city: String,
    pub post_code: String,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub billing_address: Address,
    pub shipping_address: Address,
}

/// A customer that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub billing_address: Address,
    pub shipping_address: Address,
}

impl NewCustomer {
    pub fn with_id(self, id: i64) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            billing_address: self.billing_address,
            shipping_address: self.shipping_address,
        }
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub billing_address: CustomerRequestAddress,
    pub shipping_address: CustomerRequestAddress,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequestAddress {
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub line3: Option<String>,
    #[serde(default)]
    pub line4: Option<String>,
    pub city: String,
    pub post_code: String,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i64,
}

impl From<CustomerRequestAddress> for Address {
    fn from(req: CustomerRequestAddress) -> Self {
        Address {
            line1: req.line1,
            line2: req.line2,
            line3: req.line3,
            line4: req.line4,
            city: req.city,
            post_code: req.post_code,
            country: req.country,
        }
    }
}

impl From<CustomerRequest> for NewCustomer {
    fn from(req: CustomerRequest) -> Self {
        NewCustomer {
            first_name: req.first_name,
            last_name: req.last_name,
            billing_address: req.billing_address.into(),
            shipping_address: req.shipping_address.into(),
        }
    }
}
