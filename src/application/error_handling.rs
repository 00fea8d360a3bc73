// src/application/error_handling.rs
//
// Error mapping for whatever transport sits in front of the services
//
// ARCHITECTURE:
// - Maps AppError kinds -> status codes and a consistent body
// - Unexpected failures never leak internal details to clients
// - Logs what it hides

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Standard error body: a human summary plus the underlying error text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: &AppError) -> Self {
        let (status, message) = match error.kind() {
            ErrorKind::InvalidFields => (400, "Error processing the payload"),
            ErrorKind::AlreadyExists => (409, "Already exists - update it instead"),
            ErrorKind::NotFound => (404, "Not found"),
            // the group was created; the client sees a success
            ErrorKind::PartialAssociationFailure => {
                log::warn!("Created with association errors: {}", error);
                (201, "Created with errors")
            }
            ErrorKind::DanglingReference | ErrorKind::Unexpected => {
                log::error!("Unexpected error: {:?}", error);
                return Self {
                    status: 500,
                    message: "Unexpected error".to_string(),
                    error: None,
                };
            }
        };

        Self {
            status,
            message: message.to_string(),
            error: Some(error.to_string()),
        }
    }

    /// Create validation error for input that never reached the services
    pub fn malformed_input(details: impl Into<String>) -> Self {
        Self {
            status: 400,
            message: "Error processing the payload".to_string(),
            error: Some(details.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::error::MemberFailure;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::AlreadyExists("dup".into()), 409),
            (AppError::NotFound("gone".into()), 404),
            (AppError::Domain(DomainError::InvalidFields("type".into())), 400),
            (
                AppError::PartialAssociationFailure(vec![MemberFailure::new("s2", "missing")]),
                201,
            ),
            (AppError::DanglingReference { group_id: 1, super_id: 2 }, 500),
            (AppError::Pool("down".into()), 500),
        ];

        for (error, status) in cases {
            assert_eq!(ErrorResponse::from_app_error(&error).status, status, "{:?}", error);
        }
    }

    #[test]
    fn test_partial_failure_is_success() {
        let error = AppError::PartialAssociationFailure(vec![MemberFailure::new("s2", "missing")]);
        assert!(ErrorResponse::from_app_error(&error).is_success());
    }

    #[test]
    fn test_unexpected_hides_details() {
        let response = ErrorResponse::from_app_error(&AppError::Other("secret path".into()));
        assert_eq!(response.error, None);

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"Unexpected error"}"#);
    }

    #[test]
    fn test_malformed_input() {
        let response = ErrorResponse::malformed_input("expected an object");
        assert_eq!(response.status, 400);
        assert!(!response.is_success());
    }
}
