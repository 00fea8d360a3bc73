// src/error/mod.rs

pub mod types;

pub use types::{classify_constraint, AppError, AppResult, ConstraintViolation, ErrorKind, MemberFailure};
