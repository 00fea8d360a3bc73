// src/repositories/super_repository.rs
//
// Super persistence.
//
// Reads carry the relatives aggregate computed in SQL; group names are
// left empty here and filled in by the service from the association store.

use rusqlite::types::Type;
use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use super::query::SuperFilter;
use crate::db::{get_connection, ConnectionPool};
use crate::domain::supers::{validate_super_type, NewSuper, Super, SuperType};
use crate::error::{classify_constraint, AppError, AppResult, ConstraintViolation};

/// Every read goes through this self-join: s -> its links -> every link of
/// the same groups -> the other supers on them. Rows for `s` itself are
/// dropped by the join condition, duplicates by COUNT(DISTINCT ...).
const SELECT_WITH_RELATIVES: &str = "
    SELECT s.id, s.uuid, s.type, s.name, s.full_name, s.intelligence, s.power,
           s.occupation, s.image_url,
           COUNT(DISTINCT relatives.id) AS relatives_count
    FROM superhero_supers s
    LEFT JOIN superhero_group_supers s2g ON s2g.super_id = s.id
    LEFT JOIN superhero_group_supers g2s ON g2s.group_id = s2g.group_id
    LEFT JOIN superhero_supers relatives
           ON relatives.id = g2s.super_id AND g2s.super_id != s.id";

const GROUP_AND_ORDER: &str = " GROUP BY s.id ORDER BY s.id";

const MATCH_NAME_OR_UUID: &str = " WHERE s.name = ?1 OR upper(s.uuid) = upper(?1)";

#[cfg_attr(test, mockall::automock)]
pub trait SuperRepository: Send + Sync {
    /// Persist an already validated candidate. Identity and (unless given)
    /// the UUID are assigned by the store.
    fn insert(&self, candidate: &NewSuper, kind: SuperType) -> AppResult<Super>;

    /// Name matches exactly, UUID matches ignoring case
    ///
    /// When `key` is one super's name and another's UUID, the oldest match
    /// is returned. Deletion with the same key removes both.
    fn find_by_name_or_uuid(&self, key: &str) -> AppResult<Option<Super>>;

    fn list(&self, filter: &SuperFilter) -> AppResult<Vec<Super>>;

    /// Returns the number of deleted rows; every row matching `key` by name
    /// or UUID goes.
    fn delete_by_name_or_uuid(&self, key: &str) -> AppResult<usize>;
}

pub struct SqliteSuperRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSuperRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_super(row: &Row) -> Result<Super, rusqlite::Error> {
        let uuid_str: String = row.get("uuid")?;
        let uuid = Uuid::parse_str(&uuid_str)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

        let type_str: String = row.get("type")?;
        let kind = validate_super_type(&type_str)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

        Ok(Super {
            id: row.get("id")?,
            uuid,
            kind,
            name: row.get("name")?,
            full_name: row.get("full_name")?,
            intelligence: row.get("intelligence")?,
            power: row.get("power")?,
            occupation: row.get("occupation")?,
            image_url: row.get("image_url")?,
            groups: Vec::new(),
            relatives_count: row.get("relatives_count")?,
        })
    }
}

impl SuperRepository for SqliteSuperRepository {
    fn insert(&self, candidate: &NewSuper, kind: SuperType) -> AppResult<Super> {
        let conn = get_connection(&self.pool)?;

        let inserted = match candidate.uuid {
            Some(uuid) => conn.query_row(
                "INSERT INTO superhero_supers (
                    uuid, type, name, full_name, intelligence, power, occupation, image_url
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                RETURNING id, uuid",
                params![
                    uuid.to_string(),
                    kind.as_str(),
                    candidate.name,
                    candidate.full_name,
                    candidate.intelligence,
                    candidate.power,
                    candidate.occupation,
                    candidate.image_url,
                ],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            ),
            None => conn.query_row(
                "INSERT INTO superhero_supers (
                    type, name, full_name, intelligence, power, occupation, image_url
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                RETURNING id, uuid",
                params![
                    kind.as_str(),
                    candidate.name,
                    candidate.full_name,
                    candidate.intelligence,
                    candidate.power,
                    candidate.occupation,
                    candidate.image_url,
                ],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            ),
        };

        let (id, uuid_str) = inserted.map_err(|e| match classify_constraint(&e) {
            Some(ConstraintViolation::Unique) => AppError::AlreadyExists(e.to_string()),
            _ => AppError::Database(e),
        })?;

        Ok(Super {
            id,
            uuid: Uuid::parse_str(&uuid_str)
                .map_err(|e| AppError::Other(format!("Store returned an invalid UUID: {}", e)))?,
            kind,
            name: candidate.name.clone(),
            full_name: candidate.full_name.clone(),
            intelligence: candidate.intelligence,
            power: candidate.power,
            occupation: candidate.occupation.clone(),
            image_url: candidate.image_url.clone(),
            groups: Vec::new(),
            relatives_count: 0,
        })
    }

    fn find_by_name_or_uuid(&self, key: &str) -> AppResult<Option<Super>> {
        let conn = get_connection(&self.pool)?;

        let sql = format!("{}{}{}", SELECT_WITH_RELATIVES, MATCH_NAME_OR_UUID, GROUP_AND_ORDER);
        let mut stmt = conn.prepare(&sql)?;

        match stmt.query_row(params![key], Self::row_to_super) {
            Ok(found) => Ok(Some(found)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list(&self, filter: &SuperFilter) -> AppResult<Vec<Super>> {
        let conn = get_connection(&self.pool)?;

        let clause = filter.where_clause("s");
        let sql = format!("{}{}{}", SELECT_WITH_RELATIVES, clause.sql(), GROUP_AND_ORDER);
        let mut stmt = conn.prepare(&sql)?;

        let supers: Vec<Super> = stmt
            .query_map(clause.params().as_slice(), Self::row_to_super)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(supers)
    }

    fn delete_by_name_or_uuid(&self, key: &str) -> AppResult<usize> {
        let conn = get_connection(&self.pool)?;

        let rows_affected = conn.execute(
            "DELETE FROM superhero_supers WHERE name = ?1 OR upper(uuid) = upper(?1)",
            params![key],
        )?;

        Ok(rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_pool;

    fn hero(name: &str) -> NewSuper {
        NewSuper::new("HERO", name)
    }

    #[test]
    fn test_insert_assigns_identity_and_uuid() {
        let (_dir, pool) = create_test_pool();
        let repo = SqliteSuperRepository::new(pool);

        let first = repo.insert(&hero("a"), SuperType::Hero).unwrap();
        let second = repo.insert(&hero("b"), SuperType::Hero).unwrap();

        assert!(first.id > 0);
        assert_ne!(first.id, second.id);
        assert!(!first.uuid.is_nil());
        assert_ne!(first.uuid, second.uuid);
        assert!(first.groups.is_empty());
    }

    #[test]
    fn test_insert_keeps_supplied_uuid() {
        let (_dir, pool) = create_test_pool();
        let repo = SqliteSuperRepository::new(pool);
        let uuid = Uuid::parse_str("47c0df01-a47d-497f-808d-181021f01c76").unwrap();

        let mut candidate = hero("with-uuid");
        candidate.uuid = Some(uuid);
        let created = repo.insert(&candidate, SuperType::Hero).unwrap();

        assert_eq!(created.uuid, uuid);
    }

    #[test]
    fn test_duplicate_name_is_already_exists() {
        let (_dir, pool) = create_test_pool();
        let repo = SqliteSuperRepository::new(pool);

        repo.insert(&hero("dup"), SuperType::Hero).unwrap();
        let err = repo.insert(&hero("dup"), SuperType::Vilan).unwrap_err();

        assert!(matches!(err, AppError::AlreadyExists(_)));
    }

    #[test]
    fn test_name_uniqueness_is_case_sensitive() {
        let (_dir, pool) = create_test_pool();
        let repo = SqliteSuperRepository::new(pool);

        repo.insert(&hero("Test1"), SuperType::Hero).unwrap();
        assert!(repo.insert(&hero("test1"), SuperType::Hero).is_ok());
    }

    #[test]
    fn test_find_by_uuid_ignores_case() {
        let (_dir, pool) = create_test_pool();
        let repo = SqliteSuperRepository::new(pool);
        let created = repo.insert(&hero("Test1"), SuperType::Hero).unwrap();

        let upper = created.uuid.to_string().to_uppercase();
        let found = repo.find_by_name_or_uuid(&upper).unwrap().unwrap();

        assert_eq!(found.id, created.id);
        assert_eq!(found.relatives_count, 0);
        assert!(repo.find_by_name_or_uuid("test1").unwrap().is_none());
    }

    #[test]
    fn test_delete_reports_rows() {
        let (_dir, pool) = create_test_pool();
        let repo = SqliteSuperRepository::new(pool);
        repo.insert(&hero("gone"), SuperType::Hero).unwrap();

        assert_eq!(repo.delete_by_name_or_uuid("gone").unwrap(), 1);
        assert_eq!(repo.delete_by_name_or_uuid("gone").unwrap(), 0);
    }

    #[test]
    fn test_name_colliding_with_other_uuid() {
        let (_dir, pool) = create_test_pool();
        let repo = SqliteSuperRepository::new(pool);
        let first = repo.insert(&hero("first"), SuperType::Hero).unwrap();
        let key = first.uuid.to_string();
        let second = repo.insert(&hero(&key), SuperType::Vilan).unwrap();

        let found = repo.find_by_name_or_uuid(&key).unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert!(found.id < second.id);

        assert_eq!(repo.delete_by_name_or_uuid(&key).unwrap(), 2);
        assert!(repo.find_by_name_or_uuid(&key).unwrap().is_none());
    }
}
