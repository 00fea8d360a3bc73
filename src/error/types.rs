// src/error/types.rs
use crate::domain::DomainError;
use rusqlite::ffi;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid fields: {0}")]
    Domain(#[from] DomainError),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Link between group {group_id} and super {super_id} already exists")]
    DuplicateLink { group_id: i64, super_id: i64 },

    #[error("Link between group {group_id} and super {super_id} references a missing record")]
    DanglingReference { group_id: i64, super_id: i64 },

    #[error("{}", join_failures(.0))]
    PartialAssociationFailure(Vec<MemberFailure>),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Explicit discriminant callers dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidFields,
    AlreadyExists,
    NotFound,
    DanglingReference,
    PartialAssociationFailure,
    Unexpected,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Domain(_) => ErrorKind::InvalidFields,
            AppError::AlreadyExists(_) | AppError::DuplicateLink { .. } => {
                ErrorKind::AlreadyExists
            }
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::DanglingReference { .. } => ErrorKind::DanglingReference,
            AppError::PartialAssociationFailure(_) => ErrorKind::PartialAssociationFailure,
            AppError::Database(_) | AppError::Pool(_) | AppError::Config(_) | AppError::Other(_) => {
                ErrorKind::Unexpected
            }
        }
    }
}

/// One member that could not be attached to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberFailure {
    pub member: String,
    pub reason: String,
}

impl MemberFailure {
    pub fn new(member: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            member: member.into(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for MemberFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(super:'{}') {}", self.member, self.reason)
    }
}

fn join_failures(failures: &[MemberFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Constraint violations the store reports on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique,
    ForeignKey,
    Other,
}

/// Tells a constraint violation apart from every other storage failure.
/// Returns `None` when the error is not a constraint violation at all.
pub fn classify_constraint(err: &rusqlite::Error) -> Option<ConstraintViolation> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ffi::ErrorCode::ConstraintViolation => {
            Some(match e.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    ConstraintViolation::Unique
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => ConstraintViolation::ForeignKey,
                _ => ConstraintViolation::Other,
            })
        }
        _ => None,
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_failure_message_is_pipe_delimited() {
        let err = AppError::PartialAssociationFailure(vec![
            MemberFailure::new("s2", "Not found: no super matches 's2'"),
            MemberFailure::new("s3", "boom"),
        ]);

        assert_eq!(
            err.to_string(),
            "(super:'s2') Not found: no super matches 's2' | (super:'s3') boom"
        );
        assert_eq!(err.kind(), ErrorKind::PartialAssociationFailure);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            AppError::Domain(DomainError::InvalidFields("x".into())).kind(),
            ErrorKind::InvalidFields
        );
        assert_eq!(
            AppError::DuplicateLink { group_id: 1, super_id: 2 }.kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(AppError::Pool("down".into()).kind(), ErrorKind::Unexpected);
        assert_eq!(
            AppError::Database(rusqlite::Error::QueryReturnedNoRows).kind(),
            ErrorKind::Unexpected
        );
    }

    #[test]
    fn test_classify_constraint() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             CREATE TABLE parent (id INTEGER PRIMARY KEY, name TEXT UNIQUE);
             CREATE TABLE child (parent_id INTEGER REFERENCES parent(id));
             INSERT INTO parent (id, name) VALUES (1, 'a');",
        )
        .unwrap();

        let unique = conn
            .execute("INSERT INTO parent (id, name) VALUES (2, 'a')", [])
            .unwrap_err();
        assert_eq!(classify_constraint(&unique), Some(ConstraintViolation::Unique));

        let fk = conn
            .execute("INSERT INTO child (parent_id) VALUES (99)", [])
            .unwrap_err();
        assert_eq!(classify_constraint(&fk), Some(ConstraintViolation::ForeignKey));

        let syntax = conn.execute("INSERT INTO nowhere VALUES (1)", []).unwrap_err();
        assert_eq!(classify_constraint(&syntax), None);
    }
}
