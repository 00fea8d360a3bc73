//! Critical Super Invariants:
//!
//! 1. Name is unique across all supers (case-sensitive)
//! 2. Type is HERO or VILAN once validated
//! 3. The public UUID is always present after creation and never changes
//! 4. Profile fields carry no constraints

pub mod entity;
pub mod invariants;

pub use entity::{NewSuper, Super, SuperType};
pub use invariants::{validate_new_super, validate_super_type};
