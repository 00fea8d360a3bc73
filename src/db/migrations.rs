// src/db/migrations.rs
//
// Database schema initialization
//
// PRINCIPLES:
// - Explicit schema versions
// - No automatic migrations
// - Idempotent operations

use crate::error::{AppError, AppResult};
use rusqlite::Connection;

/// Current schema version
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Tables owned by this crate, dependents first
const TABLES: [&str; 4] = [
    "superhero_group_supers",
    "superhero_groups",
    "superhero_supers",
    "schema_version",
];

/// Initialize the database schema
///
/// Safe to call multiple times (idempotent).
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        apply_initial_schema(conn)?;
        set_schema_version(conn, CURRENT_SCHEMA_VERSION)?;
        log::info!("Database schema created (version {})", CURRENT_SCHEMA_VERSION);
    } else if current_version != CURRENT_SCHEMA_VERSION {
        return Err(AppError::Other(format!(
            "Schema version {} is not supported (expected {})",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    }

    Ok(())
}

/// Drop every table owned by this crate
pub fn drop_schema(conn: &Connection) -> AppResult<()> {
    for table in TABLES {
        conn.execute_batch(&format!("DROP TABLE IF EXISTS {};", table))?;
    }
    log::warn!("Database schema dropped");
    Ok(())
}

/// Returns 0 if schema_version table doesn't exist (fresh database)
fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;

    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [version],
    )?;

    Ok(())
}

fn apply_initial_schema(conn: &Connection) -> AppResult<()> {
    let schema = include_str!("../../schema.sql");

    conn.execute_batch(schema)
        .map_err(|e| AppError::Other(format!("Failed to apply initial schema: {}", e)))?;

    Ok(())
}

/// Runs SQLite's integrity check.
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if result != "ok" {
        return Err(AppError::Other(format!(
            "Database integrity check failed: {}",
            result
        )));
    }

    Ok(())
}

/// Row counts, for debugging and monitoring
pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let count = |table: &str| -> AppResult<i64> {
        Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })?)
    };

    Ok(DatabaseStats {
        super_count: count("superhero_supers")?,
        group_count: count("superhero_groups")?,
        link_count: count("superhero_group_supers")?,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseStats {
    pub super_count: i64,
    pub group_count: i64,
    pub link_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_connection;

    #[test]
    fn test_initialize_fresh_database() {
        let conn = create_test_connection().unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), 0);
        initialize_database(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), 1);

        let table_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name LIKE 'superhero_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 3);
    }

    #[test]
    fn test_initialize_idempotent() {
        let conn = create_test_connection().unwrap();

        initialize_database(&conn).unwrap();
        initialize_database(&conn).unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), 1);
    }

    #[test]
    fn test_store_generates_uuid() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        conn.execute(
            "INSERT INTO superhero_supers (type, name) VALUES ('HERO', 'a'), ('HERO', 'b')",
            [],
        )
        .unwrap();

        let uuids: Vec<String> = conn
            .prepare("SELECT uuid FROM superhero_supers")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_ne!(uuids[0], uuids[1]);
        for raw in uuids {
            let parsed = uuid::Uuid::parse_str(&raw).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
        }
    }

    #[test]
    fn test_link_requires_both_endpoints() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO superhero_group_supers (group_id, super_id) VALUES (1, 1)",
            [],
        );

        assert!(result.is_err(), "Foreign key constraint should have been violated");
    }

    #[test]
    fn test_drop_schema() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        drop_schema(&conn).unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), 0);
        initialize_database(&conn).unwrap();
    }

    #[test]
    fn test_database_stats() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        let stats = get_database_stats(&conn).unwrap();
        assert_eq!(
            stats,
            DatabaseStats {
                super_count: 0,
                group_count: 0,
                link_count: 0
            }
        );
    }

    #[test]
    fn test_integrity_check() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        verify_database_integrity(&conn).unwrap();
    }
}
