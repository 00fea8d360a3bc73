// src/domain/mod.rs
//
// Domain Root - entities, candidates and validation.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod groups;
pub mod supers;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Super Domain
pub use supers::{validate_new_super, validate_super_type, NewSuper, Super, SuperType};

// Group Domain
pub use groups::{Group, GroupSuper, NewGroup};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// Raised before anything is written to storage
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    InvalidFields(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
