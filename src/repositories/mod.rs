// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO cross-repository calls
// - Explicit SQL only
// - Constraint violations are translated, everything else propagates

pub mod group_repository;
pub mod group_super_repository;
pub mod query;
pub mod super_repository;

pub use group_repository::{GroupRepository, SqliteGroupRepository};
pub use group_super_repository::{GroupSuperRepository, SqliteGroupSuperRepository};
pub use query::{SuperFilter, WhereClause};
pub use super_repository::{SqliteSuperRepository, SuperRepository};

#[cfg(test)]
pub use group_repository::MockGroupRepository;
#[cfg(test)]
pub use group_super_repository::MockGroupSuperRepository;
#[cfg(test)]
pub use super_repository::MockSuperRepository;
