// src/repositories/group_super_repository.rs
//
// Association store: the group <-> super link table.

use rusqlite::params;
use std::sync::Arc;

use crate::db::{get_connection, ConnectionPool};
use crate::domain::groups::GroupSuper;
use crate::error::{classify_constraint, AppError, AppResult, ConstraintViolation};

#[cfg_attr(test, mockall::automock)]
pub trait GroupSuperRepository: Send + Sync {
    /// Insert one link. Fails with `DuplicateLink` or `DanglingReference`
    /// when the store rejects it; any other failure is unexpected.
    fn link(&self, link: GroupSuper) -> AppResult<()>;

    /// Member names of a group, in link order
    fn super_names_of_group(&self, group_id: i64) -> AppResult<Vec<String>>;

    /// Names of the groups a super belongs to, in group creation order
    fn group_names_of_super(&self, super_id: i64) -> AppResult<Vec<String>>;

    /// Names of the distinct other supers sharing at least one group
    fn relatives_of_super(&self, super_id: i64) -> AppResult<Vec<String>>;
}

pub struct SqliteGroupSuperRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteGroupSuperRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn query_names(&self, sql: &str, id: i64) -> AppResult<Vec<String>> {
        let conn = get_connection(&self.pool)?;
        let mut stmt = conn.prepare(sql)?;

        let names = stmt
            .query_map(params![id], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;

        Ok(names)
    }
}

impl GroupSuperRepository for SqliteGroupSuperRepository {
    fn link(&self, link: GroupSuper) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        let GroupSuper { group_id, super_id } = link;

        match conn.execute(
            "INSERT INTO superhero_group_supers (group_id, super_id) VALUES (?1, ?2)",
            params![group_id, super_id],
        ) {
            Ok(_) => Ok(()),
            Err(e) => Err(match classify_constraint(&e) {
                Some(ConstraintViolation::Unique) => AppError::DuplicateLink { group_id, super_id },
                Some(ConstraintViolation::ForeignKey) => {
                    AppError::DanglingReference { group_id, super_id }
                }
                _ => AppError::Database(e),
            }),
        }
    }

    fn super_names_of_group(&self, group_id: i64) -> AppResult<Vec<String>> {
        self.query_names(
            "SELECT s.name
             FROM superhero_group_supers gs
             JOIN superhero_supers s ON s.id = gs.super_id
             WHERE gs.group_id = ?1
             ORDER BY gs.rowid",
            group_id,
        )
    }

    fn group_names_of_super(&self, super_id: i64) -> AppResult<Vec<String>> {
        self.query_names(
            "SELECT g.name
             FROM superhero_group_supers gs
             JOIN superhero_groups g ON g.id = gs.group_id
             WHERE gs.super_id = ?1
             ORDER BY g.id",
            super_id,
        )
    }

    fn relatives_of_super(&self, super_id: i64) -> AppResult<Vec<String>> {
        self.query_names(
            "SELECT relatives.name
             FROM superhero_group_supers s2g
             JOIN superhero_group_supers g2s ON g2s.group_id = s2g.group_id
             JOIN superhero_supers relatives ON relatives.id = g2s.super_id
             WHERE s2g.super_id = ?1 AND g2s.super_id != ?1
             GROUP BY relatives.id
             ORDER BY relatives.id",
            super_id,
        )
    }
}
