//! Declarative table mapping: key, scalar properties and owned groups.

use crate::case::{owned_column_name, to_pascal_case};

/// Column layout of one mapped entity. Column names derive from property paths.
#[derive(Clone, Debug)]
pub struct EntityMap {
    pub table: String,
    pub key: String,
    /// All columns in storage order, key first.
    pub columns: Vec<String>,
}

impl EntityMap {
    /// Start a map for `table` keyed by `key_property`.
    pub fn new(table: &str, key_property: &str) -> Self {
        let key = to_pascal_case(key_property);
        EntityMap {
            table: table.to_string(),
            columns: vec![key.clone()],
            key,
        }
    }

    pub fn property(mut self, property: &str) -> Self {
        self.columns.push(to_pascal_case(property));
        self
    }

    /// Flatten an owned sub-object into `<Owner><Field>` columns.
    pub fn owns_one(mut self, owner: &str, fields: &[&str]) -> Self {
        self.columns
            .extend(fields.iter().map(|f| owned_column_name(owner, f)));
        self
    }

    pub fn non_key_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(move |c| *c != self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_prefixed_columns_in_order() {
        let map = EntityMap::new("Order", "id")
            .property("placed_by")
            .owns_one("delivery_address", &["line1", "post_code"]);
        assert_eq!(map.key, "Id");
        assert_eq!(
            map.columns,
            vec!["Id", "PlacedBy", "DeliveryAddressLine1", "DeliveryAddressPostCode"]
        );
        assert_eq!(
            map.non_key_columns().collect::<Vec<_>>(),
            vec!["PlacedBy", "DeliveryAddressLine1", "DeliveryAddressPostCode"]
        );
    }
}
