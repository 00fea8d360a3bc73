// src/application/state.rs

use std::sync::Arc;

use crate::db::{create_connection_pool, get_connection, initialize_database, ConnectionPool, DatabaseConfig};
use crate::error::AppResult;
use crate::infrastructure::init_logger;
use crate::repositories::{
    GroupRepository, GroupSuperRepository, SqliteGroupRepository, SqliteGroupSuperRepository,
    SqliteSuperRepository, SuperRepository,
};
use crate::services::{GroupService, SuperService};

/// Everything a transport needs to serve requests.
/// All fields are Arc-wrapped for thread-safe sharing across requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub super_service: Arc<SuperService>,
    pub group_service: Arc<GroupService>,
}

impl AppState {
    /// Wire repositories and services over an existing pool
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        // REPOSITORIES
        let super_repo: Arc<dyn SuperRepository> = Arc::new(SqliteSuperRepository::new(pool.clone()));
        let group_repo: Arc<dyn GroupRepository> = Arc::new(SqliteGroupRepository::new(pool.clone()));
        let group_super_repo: Arc<dyn GroupSuperRepository> =
            Arc::new(SqliteGroupSuperRepository::new(pool.clone()));

        // SERVICES
        let super_service = Arc::new(SuperService::new(super_repo.clone(), group_super_repo.clone()));
        let group_service = Arc::new(GroupService::new(group_repo, super_repo, group_super_repo));

        Self {
            pool,
            super_service,
            group_service,
        }
    }

    /// Logging, pool and schema (idempotent), then wiring
    pub fn bootstrap(config: &DatabaseConfig) -> AppResult<Self> {
        init_logger();

        let pool = Arc::new(create_connection_pool(config)?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }

        Ok(Self::new(pool))
    }
}
