// src/services/group_service.rs
//
// Group Service - creation with member linking, lookups
//
// CRITICAL RULES:
// - Group creation is NOT transactional: the group row and every link
//   made before a failure stay in place
// - A member that cannot be resolved or linked is a minor error; the
//   remaining members are still processed
// - Nothing is linked when the group name is already taken

use std::sync::Arc;

use crate::domain::groups::{Group, GroupSuper, NewGroup};
use crate::domain::supers::Super;
use crate::error::{AppError, AppResult, ErrorKind, MemberFailure};
use crate::repositories::{GroupRepository, GroupSuperRepository, SuperRepository};

/// A group that was created, possibly without some requested members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedGroup {
    /// `supers` lists only the members that were linked, in request order
    pub group: Group,
    pub failures: Vec<MemberFailure>,
}

impl CreatedGroup {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// The aggregate error to report alongside the group, if any member failed
    pub fn partial_failure(&self) -> Option<AppError> {
        if self.failures.is_empty() {
            None
        } else {
            Some(AppError::PartialAssociationFailure(self.failures.clone()))
        }
    }
}

pub struct GroupService {
    group_repo: Arc<dyn GroupRepository>,
    super_repo: Arc<dyn SuperRepository>,
    group_super_repo: Arc<dyn GroupSuperRepository>,
}

impl GroupService {
    pub fn new(
        group_repo: Arc<dyn GroupRepository>,
        super_repo: Arc<dyn SuperRepository>,
        group_super_repo: Arc<dyn GroupSuperRepository>,
    ) -> Self {
        Self {
            group_repo,
            super_repo,
            group_super_repo,
        }
    }

    /// Create a group and link each named member.
    ///
    /// Fails outright only when the name is taken (AlreadyExists) or on an
    /// unexpected storage failure. Members that don't exist or can't be
    /// linked end up in `CreatedGroup::failures`.
    pub fn create(&self, candidate: NewGroup) -> AppResult<CreatedGroup> {
        let mut group = self.group_repo.insert(&candidate.name)?;
        let mut failures = Vec::new();

        for member in &candidate.supers {
            let found = match self.super_repo.find_by_name_or_uuid(member)? {
                Some(found) => found,
                None => {
                    let reason = AppError::NotFound(format!("no super matches '{}'", member));
                    log::warn!("Group '{}': skipping member '{}': {}", group.name, member, reason);
                    failures.push(MemberFailure::new(member.as_str(), reason));
                    continue;
                }
            };

            let link = GroupSuper {
                group_id: group.id,
                super_id: found.id,
            };
            match self.group_super_repo.link(link) {
                Ok(()) => group.supers.push(found.name),
                Err(e) if e.kind() != ErrorKind::Unexpected => {
                    log::warn!("Group '{}': cannot link member '{}': {}", group.name, member, e);
                    failures.push(MemberFailure::new(member.as_str(), e));
                }
                Err(e) => {
                    log::error!("Group '{}': linking '{}' failed: {}", group.name, member, e);
                    return Err(e);
                }
            }
        }

        let created = CreatedGroup { group, failures };
        match created.partial_failure() {
            Some(e) => log::warn!("Group '{}' created with errors: {}", created.group.name, e),
            None => log::info!(
                "Created group '{}' with {} member(s)",
                created.group.name,
                created.group.supers.len()
            ),
        }

        Ok(created)
    }

    /// Exact (case-sensitive) name match, with current member names
    pub fn get_by_name(&self, name: &str) -> AppResult<Group> {
        let group = self
            .group_repo
            .find_by_name(name)?
            .ok_or_else(|| AppError::NotFound(format!("no group named '{}'", name)))?;

        self.with_members(group)
    }

    /// Every group `member` belongs to, each with its full member list
    pub fn get_all_by_member(&self, member: &Super) -> AppResult<Vec<Group>> {
        self.group_repo
            .list_by_member(member.id)?
            .into_iter()
            .map(|group| self.with_members(group))
            .collect()
    }

    fn with_members(&self, mut group: Group) -> AppResult<Group> {
        group.supers = self.group_super_repo.super_names_of_group(group.id)?;
        Ok(group)
    }
}
