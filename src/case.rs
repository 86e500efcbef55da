//! Case conversion from Rust property paths (snake_case) to column names (PascalCase).

/// Convert a single identifier from snake_case to PascalCase.
/// e.g. "first_name" -> "FirstName", "line1" -> "Line1"
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Column name for a property nested under an owned group.
/// e.g. ("billing_address", "post_code") -> "BillingAddressPostCode"
pub fn owned_column_name(owner: &str, property: &str) -> String {
    let mut out = to_pascal_case(owner);
    out.push_str(&to_pascal_case(property));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case() {
        assert_eq!(to_pascal_case("id"), "Id");
        assert_eq!(to_pascal_case("first_name"), "FirstName");
        assert_eq!(to_pascal_case("line1"), "Line1");
        assert_eq!(to_pascal_case("Already"), "Already");
    }

    #[test]
    fn owned_columns_are_prefixed() {
        assert_eq!(owned_column_name("billing_address", "line1"), "BillingAddressLine1");
        assert_eq!(owned_column_name("shipping_address", "post_code"), "ShippingAddressPostCode");
    }
}
