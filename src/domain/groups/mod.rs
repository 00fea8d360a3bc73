//! Critical Group Invariants:
//!
//! 1. Name is unique across all groups (case-sensitive)
//! 2. Membership is fixed at creation and may be empty
//! 3. At most one link per (group, super) pair
//! 4. A link requires both endpoints to exist

pub mod entity;

pub use entity::{Group, GroupSuper, NewGroup};
