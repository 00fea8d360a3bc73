// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Foreign keys always on (cascades and link checks depend on it)

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use super::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a connection pool
///
/// Every connection gets:
/// - Foreign key support (not default in SQLite)
/// - WAL mode for better concurrency
/// - Busy timeout set to avoid immediate errors
pub fn create_connection_pool(config: &DatabaseConfig) -> AppResult<ConnectionPool> {
    // r2d2 asserts on a zero-sized pool
    if config.max_connections == 0 {
        return Err(AppError::Config(
            "Connection pool needs at least one connection".to_string(),
        ));
    }

    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Config(format!("Cannot create {}: {}", parent.display(), e)))?;
        }
    }

    let busy_timeout_ms = config.busy_timeout_ms;
    let manager = SqliteConnectionManager::file(&config.path).with_init(move |conn| {
        conn.execute_batch(&format!(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = {};",
            busy_timeout_ms
        ))
    });

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    log::info!(
        "Database pool ready at {} (max {} connections)",
        config.path.display(),
        config.max_connections
    );

    Ok(pool)
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone in-memory connection (for testing)
#[cfg(test)]
pub(crate) fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory().map_err(AppError::Database)?;

    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(AppError::Database)?;

    Ok(conn)
}

/// Pool over a fresh, fully provisioned database file in a temp dir.
/// Keep the returned `TempDir` alive as long as the pool is used.
#[cfg(test)]
pub(crate) fn create_test_pool() -> (tempfile::TempDir, std::sync::Arc<ConnectionPool>) {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = DatabaseConfig::at(dir.path().join("superhero.db"));
    let pool = create_connection_pool(&config).expect("pool");
    {
        let conn = get_connection(&pool).expect("connection");
        super::migrations::initialize_database(&conn).expect("schema");
    }
    (dir, std::sync::Arc::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_pool_creation() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::at(dir.path().join("nested").join("db.sqlite"));
        let pool = create_connection_pool(&config).unwrap();
        let conn = get_connection(&pool).unwrap();

        // Verify foreign keys are enabled
        let fk_enabled: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk_enabled, 1);
        assert!(config.path.exists());
    }

    #[test]
    fn test_zero_sized_pool_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = DatabaseConfig::at(dir.path().join("db.sqlite"));
        config.max_connections = 0;

        let err = create_connection_pool(&config).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_test_connection() {
        let conn = create_test_connection().unwrap();

        let result: i32 = conn
            .query_row("SELECT 1 + 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(result, 2);

        let fk_enabled: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk_enabled, 1);
    }
}
