// src/db/config.rs
//
// Database configuration
//
// Values come from the environment (optionally seeded by a `.env` file).
// Nothing here opens a connection.

use std::env;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const ENV_DB_PATH: &str = "SUPERHERO_DB_PATH";
pub const ENV_DB_POOL_SIZE: &str = "SUPERHERO_DB_POOL_SIZE";
pub const ENV_DB_BUSY_TIMEOUT_MS: &str = "SUPERHERO_DB_BUSY_TIMEOUT_MS";

const DEFAULT_POOL_SIZE: u32 = 15;
const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub max_connections: u32,
    pub busy_timeout_ms: u32,
}

impl DatabaseConfig {
    /// Config for a database file at `path` with default pool settings
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: DEFAULT_POOL_SIZE,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Without `SUPERHERO_DB_PATH` the database lives in the user data
    /// directory: `{DATA_DIR}/superhero/superhero.db`.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = match lookup(ENV_DB_PATH) {
            Some(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => default_database_path()?,
        };

        Ok(Self {
            path,
            max_connections: parse_pool_size(&lookup)?,
            busy_timeout_ms: parse_or(&lookup, ENV_DB_BUSY_TIMEOUT_MS, DEFAULT_BUSY_TIMEOUT_MS)?,
        })
    }
}

fn parse_or<F>(lookup: &F, key: &str, default: u32) -> AppResult<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} must be a positive integer: {}", key, e))),
    }
}

fn parse_pool_size<F>(lookup: &F) -> AppResult<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, ENV_DB_POOL_SIZE, DEFAULT_POOL_SIZE)? {
        0 => Err(AppError::Config(format!(
            "{} must be a positive integer: got 0",
            ENV_DB_POOL_SIZE
        ))),
        size => Ok(size),
    }
}

/// Get the default database file path
///
/// Path structure: {APP_DATA}/superhero/superhero.db
pub fn default_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join("superhero").join("superhero.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_values() {
        let config = DatabaseConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "/tmp/supers.db"),
            (ENV_DB_POOL_SIZE, "4"),
            (ENV_DB_BUSY_TIMEOUT_MS, "250"),
        ]))
        .unwrap();

        assert_eq!(config.path, PathBuf::from("/tmp/supers.db"));
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.busy_timeout_ms, 250);
    }

    #[test]
    fn test_defaults() {
        let config = DatabaseConfig::from_lookup(lookup(&[(ENV_DB_PATH, "x.db")])).unwrap();
        assert_eq!(config.max_connections, DEFAULT_POOL_SIZE);
        assert_eq!(config.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
    }

    #[test]
    fn test_bad_pool_size() {
        let err = DatabaseConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "x.db"),
            (ENV_DB_POOL_SIZE, "many"),
        ]))
        .unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_zero_pool_size() {
        let err = DatabaseConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "x.db"),
            (ENV_DB_POOL_SIZE, "0"),
        ]))
        .unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains(ENV_DB_POOL_SIZE));
    }

    #[test]
    fn test_zero_busy_timeout_is_allowed() {
        let config = DatabaseConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "x.db"),
            (ENV_DB_BUSY_TIMEOUT_MS, "0"),
        ]))
        .unwrap();

        assert_eq!(config.busy_timeout_ms, 0);
    }
}
