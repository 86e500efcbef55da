//! Flattening between `Customer` and its storage row.
//!
//! Each address is stored as seven prefixed columns on the customer row
//! (`BillingAddressLine1` .. `ShippingAddressCountry`). Both repositories go
//! through this module so they read and write identical rows.

use crate::case::owned_column_name;
use crate::model::{Address, Customer, NewCustomer};

pub const CUSTOMER_TABLE: &str = "Customer";

/// Owned address groups, in column order.
pub const ADDRESS_OWNERS: [&str; 2] = ["billing_address", "shipping_address"];

/// Address properties, in column order.
pub const ADDRESS_FIELDS: [&str; 7] = [
    "line1", "line2", "line3", "line4", "city", "post_code", "country",
];

/// One `Customer` row as stored.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct CustomerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub billing_address_line1: String,
    pub billing_address_line2: Option<String>,
    pub billing_address_line3: Option<String>,
    pub billing_address_line4: Option<String>,
    pub billing_address_city: String,
    pub billing_address_post_code: String,
    pub billing_address_country: String,
    pub shipping_address_line1: String,
    pub shipping_address_line2: Option<String>,
    pub shipping_address_line3: Option<String>,
    pub shipping_address_line4: Option<String>,
    pub shipping_address_city: String,
    pub shipping_address_post_code: String,
    pub shipping_address_country: String,
}

/// Seven address columns in `ADDRESS_FIELDS` order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressColumns {
    pub line1: String,
    pub line2: Option<String>,
    pub line3: Option<String>,
    pub line4: Option<String>,
    pub city: String,
    pub post_code: String,
    pub country: String,
}

impl AddressColumns {
    pub fn flatten(address: &Address) -> Self {
        AddressColumns {
            line1: address.line1.clone(),
            line2: address.line2.clone(),
            line3: address.line3.clone(),
            line4: address.line4.clone(),
            city: address.city.clone(),
            post_code: address.post_code.clone(),
            country: address.country.clone(),
        }
    }

    pub fn unflatten(self) -> Address {
        Address {
            line1: self.line1,
            line2: self.line2,
            line3: self.line3,
            line4: self.line4,
            city: self.city,
            post_code: self.post_code,
            country: self.country,
        }
    }

    fn values(&self) -> [Option<String>; 7] {
        [
            Some(self.line1.clone()),
            self.line2.clone(),
            self.line3.clone(),
            self.line4.clone(),
            Some(self.city.clone()),
            Some(self.post_code.clone()),
            Some(self.country.clone()),
        ]
    }
}

impl CustomerRow {
    /// Object -> row. `id` is whatever the store assigned (0 before insert).
    pub fn from_new(id: i64, customer: &NewCustomer) -> Self {
        let billing = AddressColumns::flatten(&customer.billing_address);
        let shipping = AddressColumns::flatten(&customer.shipping_address);
        CustomerRow {
            id,
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            billing_address_line1: billing.line1,
            billing_address_line2: billing.line2,
            billing_address_line3: billing.line3,
            billing_address_line4: billing.line4,
            billing_address_city: billing.city,
            billing_address_post_code: billing.post_code,
            billing_address_country: billing.country,
            shipping_address_line1: shipping.line1,
            shipping_address_line2: shipping.line2,
            shipping_address_line3: shipping.line3,
            shipping_address_line4: shipping.line4,
            shipping_address_city: shipping.city,
            shipping_address_post_code: shipping.post_code,
            shipping_address_country: shipping.country,
        }
    }

    /// Row -> object.
    pub fn into_customer(self) -> Customer {
        let (billing, shipping) = self.address_columns();
        Customer {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            billing_address: billing.unflatten(),
            shipping_address: shipping.unflatten(),
        }
    }

    pub fn address_columns(&self) -> (AddressColumns, AddressColumns) {
        (
            AddressColumns {
                line1: self.billing_address_line1.clone(),
                line2: self.billing_address_line2.clone(),
                line3: self.billing_address_line3.clone(),
                line4: self.billing_address_line4.clone(),
                city: self.billing_address_city.clone(),
                post_code: self.billing_address_post_code.clone(),
                country: self.billing_address_country.clone(),
            },
            AddressColumns {
                line1: self.shipping_address_line1.clone(),
                line2: self.shipping_address_line2.clone(),
                line3: self.shipping_address_line3.clone(),
                line4: self.shipping_address_line4.clone(),
                city: self.shipping_address_city.clone(),
                post_code: self.shipping_address_post_code.clone(),
                country: self.shipping_address_country.clone(),
            },
        )
    }

    /// Non-key columns as (column name, value), in storage order.
    pub fn column_values(&self) -> Vec<(String, Option<String>)> {
        let mut out = vec![
            ("FirstName".to_string(), Some(self.first_name.clone())),
            ("LastName".to_string(), Some(self.last_name.clone())),
        ];
        let (billing, shipping) = self.address_columns();
        for (owner, group) in ADDRESS_OWNERS.iter().zip([billing, shipping]) {
            for (field, value) in ADDRESS_FIELDS.iter().zip(group.values()) {
                out.push((owned_column_name(owner, field), value));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewCustomer {
        NewCustomer {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            billing_address: Address {
                line1: "10 Navy Yard".into(),
                line2: Some("Building 4".into()),
                line3: None,
                line4: None,
                city: "Arlington".into(),
                post_code: "22201".into(),
                country: "US".into(),
            },
            shipping_address: Address {
                line1: "PO Box 1".into(),
                line2: None,
                line3: None,
                line4: Some("Attn: Grace".into()),
                city: "New York".into(),
                post_code: "10001".into(),
                country: "US".into(),
            },
        }
    }

    #[test]
    fn row_round_trips_to_customer() {
        let new = sample();
        let customer = CustomerRow::from_new(42, &new).into_customer();
        assert_eq!(customer, new.with_id(42));
    }

    #[test]
    fn addresses_land_in_prefixed_columns() {
        let row = CustomerRow::from_new(1, &sample());
        assert_eq!(row.billing_address_line2.as_deref(), Some("Building 4"));
        assert_eq!(row.shipping_address_line4.as_deref(), Some("Attn: Grace"));
        assert_eq!(row.shipping_address_city, "New York");
    }

    #[test]
    fn column_values_cover_every_non_key_column() {
        let values = CustomerRow::from_new(1, &sample()).column_values();
        assert_eq!(values.len(), 16);
        assert_eq!(values[0], ("FirstName".to_string(), Some("Grace".to_string())));
        assert_eq!(values[2].0, "BillingAddressLine1");
        assert_eq!(values[7], ("BillingAddressPostCode".to_string(), Some("22201".to_string())));
        assert_eq!(values[9], ("ShippingAddressLine1".to_string(), Some("PO Box 1".to_string())));
        assert_eq!(values[10], ("ShippingAddressLine2".to_string(), None));
        assert_eq!(values[15].0, "ShippingAddressCountry");
    }
}
