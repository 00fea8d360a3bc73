// src/repositories/group_repository.rs

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::{get_connection, ConnectionPool};
use crate::domain::groups::Group;
use crate::error::{classify_constraint, AppError, AppResult, ConstraintViolation};

#[cfg_attr(test, mockall::automock)]
pub trait GroupRepository: Send + Sync {
    /// Insert the group row only; members are linked separately.
    fn insert(&self, name: &str) -> AppResult<Group>;

    fn find_by_name(&self, name: &str) -> AppResult<Option<Group>>;

    fn list_by_member(&self, super_id: i64) -> AppResult<Vec<Group>>;
}

pub struct SqliteGroupRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteGroupRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_group(row: &Row) -> Result<Group, rusqlite::Error> {
        Ok(Group {
            id: row.get("id")?,
            name: row.get("name")?,
            supers: Vec::new(),
        })
    }
}

impl GroupRepository for SqliteGroupRepository {
    fn insert(&self, name: &str) -> AppResult<Group> {
        let conn = get_connection(&self.pool)?;

        let id = conn
            .query_row(
                "INSERT INTO superhero_groups (name) VALUES (?1) RETURNING id",
                params![name],
                |row| row.get::<_, i64>(0),
            )
            .map_err(|e| match classify_constraint(&e) {
                Some(ConstraintViolation::Unique) => AppError::AlreadyExists(e.to_string()),
                _ => AppError::Database(e),
            })?;

        Ok(Group {
            id,
            name: name.to_string(),
            supers: Vec::new(),
        })
    }

    fn find_by_name(&self, name: &str) -> AppResult<Option<Group>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare("SELECT id, name FROM superhero_groups WHERE name = ?1")?;

        match stmt.query_row(params![name], Self::row_to_group) {
            Ok(group) => Ok(Some(group)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_by_member(&self, super_id: i64) -> AppResult<Vec<Group>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare(
            "SELECT g.id, g.name
             FROM superhero_groups g
             JOIN superhero_group_supers gs ON gs.group_id = g.id
             WHERE gs.super_id = ?1
             ORDER BY g.id",
        )?;

        let groups: Vec<Group> = stmt
            .query_map(params![super_id], Self::row_to_group)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(groups)
    }
}
