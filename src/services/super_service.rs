// src/services/super_service.rs
//
// Super Service - creation, lookup, filtered listing and deletion
//
// CRITICAL RULES:
// - Validation runs before anything is written
// - Duplicate names are detected by the store, never by a pre-check
// - Every returned Super carries its group names and relatives count

use std::sync::Arc;

use crate::domain::supers::{validate_new_super, NewSuper, Super, SuperType};
use crate::error::{AppError, AppResult};
use crate::repositories::{GroupSuperRepository, SuperFilter, SuperRepository};

pub struct SuperService {
    super_repo: Arc<dyn SuperRepository>,
    group_super_repo: Arc<dyn GroupSuperRepository>,
}

impl SuperService {
    pub fn new(
        super_repo: Arc<dyn SuperRepository>,
        group_super_repo: Arc<dyn GroupSuperRepository>,
    ) -> Self {
        Self {
            super_repo,
            group_super_repo,
        }
    }

    /// Create a new super
    ///
    /// Fails with InvalidFields for an unknown type and AlreadyExists for a
    /// taken name. A fresh super belongs to no group.
    pub fn create(&self, candidate: NewSuper) -> AppResult<Super> {
        let kind = validate_new_super(&candidate)?;

        match self.super_repo.insert(&candidate, kind) {
            Ok(created) => {
                log::info!("Created {} '{}' ({})", created.kind, created.name, created.uuid);
                Ok(created)
            }
            Err(e @ AppError::AlreadyExists(_)) => {
                log::debug!("Super '{}' already exists", candidate.name);
                Err(e)
            }
            Err(e) => {
                log::error!("Failed to persist super '{}': {}", candidate.name, e);
                Err(e)
            }
        }
    }

    /// Create a super whatever type the candidate claims: always HERO
    pub fn create_hero(&self, candidate: NewSuper) -> AppResult<Super> {
        self.create(with_kind(candidate, SuperType::Hero))
    }

    /// Create a super whatever type the candidate claims: always VILAN
    pub fn create_vilan(&self, candidate: NewSuper) -> AppResult<Super> {
        self.create(with_kind(candidate, SuperType::Vilan))
    }

    /// Find a super whose name equals `key` (case-sensitive) or whose
    /// UUID equals `key` (case-insensitive).
    pub fn find_by_name_or_uuid(&self, key: &str) -> AppResult<Super> {
        log::debug!("Looking up super '{}'", key);

        let found = self
            .super_repo
            .find_by_name_or_uuid(key)?
            .ok_or_else(|| AppError::NotFound(format!("no super matches '{}'", key)))?;

        self.with_groups(found)
    }

    /// All supers matching every present filter field. Never fails on an
    /// empty result.
    pub fn list_filtered(&self, filter: &SuperFilter) -> AppResult<Vec<Super>> {
        self.super_repo
            .list(filter)?
            .into_iter()
            .map(|found| self.with_groups(found))
            .collect()
    }

    /// Names of the supers sharing at least one group with `key`
    pub fn list_relatives(&self, key: &str) -> AppResult<Vec<String>> {
        let found = self
            .super_repo
            .find_by_name_or_uuid(key)?
            .ok_or_else(|| AppError::NotFound(format!("no super matches '{}'", key)))?;

        self.group_super_repo.relatives_of_super(found.id)
    }

    /// Delete by name or UUID. Group links go with it (cascade).
    pub fn delete_by_name_or_uuid(&self, key: &str) -> AppResult<()> {
        let deleted = self.super_repo.delete_by_name_or_uuid(key)?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Can't delete super '{}' - not found",
                key
            )));
        }

        log::info!("Deleted super '{}'", key);
        Ok(())
    }

    fn with_groups(&self, mut found: Super) -> AppResult<Super> {
        found.groups = self.group_super_repo.group_names_of_super(found.id)?;
        Ok(found)
    }
}

fn with_kind(mut candidate: NewSuper, kind: SuperType) -> NewSuper {
    candidate.kind = kind.as_str().to_string();
    candidate
}
