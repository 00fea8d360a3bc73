// src/repositories/query.rs
//
// Filter composition for listing queries.
//
// Every present filter field adds one predicate; predicates are ANDed.
// Absent (or empty) fields add nothing, so an empty filter matches all rows.

use rusqlite::types::ToSql;
use serde::{Deserialize, Serialize};

/// Optional filters for listing supers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperFilter {
    /// Case-insensitive match on the discriminator
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Case-sensitive match on the name
    pub name: Option<String>,

    /// Case-insensitive match on the public UUID
    pub uuid: Option<String>,
}

impl SuperFilter {
    pub fn by_type(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn by_uuid(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            ..Self::default()
        }
    }

    /// Predicates over the supers table aliased as `alias`
    pub fn where_clause(&self, alias: &str) -> WhereClause {
        let mut clause = WhereClause::new();
        if let Some(kind) = present(&self.kind) {
            clause.push_case_insensitive(&format!("{}.type", alias), kind);
        }
        if let Some(name) = present(&self.name) {
            clause.push_eq(&format!("{}.name", alias), name);
        }
        if let Some(uuid) = present(&self.uuid) {
            clause.push_case_insensitive(&format!("{}.uuid", alias), uuid);
        }
        clause
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

/// An AND-combined predicate with its positional parameters.
#[derive(Default)]
pub struct WhereClause {
    sql: String,
    params: Vec<Box<dyn ToSql>>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// `column = ?` (exact, case-sensitive)
    pub fn push_eq(&mut self, column: &str, value: &str) {
        let idx = self.next_index();
        self.push_predicate(&format!("{} = ?{}", column, idx), value);
    }

    /// `upper(column) = upper(?)`
    pub fn push_case_insensitive(&mut self, column: &str, value: &str) {
        let idx = self.next_index();
        self.push_predicate(&format!("upper({}) = upper(?{})", column, idx), value);
    }

    fn next_index(&self) -> usize {
        self.params.len() + 1
    }

    fn push_predicate(&mut self, predicate: &str, value: &str) {
        let joiner = if self.sql.is_empty() { " WHERE " } else { " AND " };
        self.sql.push_str(joiner);
        self.sql.push_str(predicate);
        self.params.push(Box::new(value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// SQL fragment, either empty or starting with ` WHERE `
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(AsRef::as_ref).collect()
    }
}
