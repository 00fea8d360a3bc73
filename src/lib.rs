// src/lib.rs
// Superhero - records of Supers (heroes and villains) and the Groups they form
//
// Architecture:
// - Domain: entities, candidates and validation
// - Repositories: explicit SQL, constraint violations translated
// - Services: orchestration across repositories
// - Application: wiring and transport-facing error mapping
// - The store enforces uniqueness and link integrity, not the application

pub mod application;
pub mod db;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_new_super, validate_super_type, DomainError, Group, GroupSuper, NewGroup, NewSuper,
    Super, SuperType,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult, ErrorKind, MemberFailure};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool, DatabaseConfig};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    GroupRepository, GroupSuperRepository, SqliteGroupRepository, SqliteGroupSuperRepository,
    SqliteSuperRepository, SuperFilter, SuperRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CreatedGroup, GroupService, SuperService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse};
pub use infrastructure::init_logger;
