// src/db/mod.rs
//
// Database module
//
// Provides:
// - Configuration
// - Connection pooling
// - Schema provisioning
// - Database utilities

pub mod config;
pub mod connection;
pub mod migrations;

pub use config::{default_database_path, DatabaseConfig};

pub use connection::{create_connection_pool, get_connection, ConnectionPool, PooledConn};

pub use migrations::{
    drop_schema, get_database_stats, initialize_database, verify_database_integrity, DatabaseStats,
};
