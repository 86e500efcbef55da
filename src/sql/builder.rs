//! Builds parameterized SELECT and INSERT from an entity map.

use super::entity::EntityMap;

/// Quote identifier for SQLite (safe: only from entity maps).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Option<String>>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Option<String>) {
        self.params.push(v);
    }
}

fn select_column_list(entity: &EntityMap) -> String {
    entity
        .columns
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT by key. Caller binds the key as sole param.
pub fn select_by_key(entity: &EntityMap) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ?",
        select_column_list(entity),
        quoted(&entity.table),
        quoted(&entity.key)
    );
    q
}

/// INSERT every non-key column, taking values by column name; missing names bind NULL.
/// Names not in the map are ignored. Returns the store-assigned key.
pub fn insert(entity: &EntityMap, values: &[(String, Option<String>)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for col in entity.non_key_columns() {
        let val = values
            .iter()
            .find(|(name, _)| name == col)
            .and_then(|(_, v)| v.clone());
        q.push_param(val);
        cols.push(quoted(col));
        placeholders.push("?");
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(&entity.table),
        cols.join(", "),
        placeholders.join(", "),
        quoted(&entity.key)
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> EntityMap {
        EntityMap::new("Contact", "id")
            .property("name")
            .owns_one("home_address", &["city", "country"])
    }

    #[test]
    fn select_lists_every_column() {
        let q = select_by_key(&entity());
        assert_eq!(
            q.sql,
            r#"SELECT "Id", "Name", "HomeAddressCity", "HomeAddressCountry" FROM "Contact" WHERE "Id" = ?"#
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn insert_binds_in_column_order() {
        let values = vec![
            ("HomeAddressCountry".to_string(), Some("UK".to_string())),
            ("Name".to_string(), Some("Ada".to_string())),
            ("Unmapped".to_string(), Some("ignored".to_string())),
        ];
        let q = insert(&entity(), &values);
        assert_eq!(
            q.sql,
            r#"INSERT INTO "Contact" ("Name", "HomeAddressCity", "HomeAddressCountry") VALUES (?, ?, ?) RETURNING "Id""#
        );
        assert_eq!(
            q.params,
            vec![Some("Ada".to_string()), None, Some("UK".to_string())]
        );
    }

    #[test]
    fn identifiers_are_escaped() {
        assert_eq!(quoted(r#"we"ird"#), r#""we""ird""#);
    }
}
