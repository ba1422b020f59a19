//! HTTP error responses.
//!
//! Maps registry outcomes onto status codes and `{"detail": ...}` bodies.
//! The mapping is fixed: missing activity is 404, enrollment conflicts are
//! 400, a missing `email` parameter is rejected with 422 before the registry
//! is consulted.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::registry::RegistryError;

/// Error type returned by the API handlers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Domain failure from the registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Required `email` query parameter was absent.
    #[error("Missing required query parameter 'email'")]
    MissingEmail,
}

impl ApiError {
    /// Status code this error surfaces as.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Registry(RegistryError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Registry(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(RegistryError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(RegistryError::AlreadyEnrolled).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(RegistryError::NotEnrolled).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(RegistryError::CapacityExceeded).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::MissingEmail.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_messages_match_client_expectations() {
        // Clients match on substrings of the detail message
        let not_found = ApiError::from(RegistryError::NotFound).to_string();
        assert!(not_found.to_lowercase().contains("not found"));

        let duplicate = ApiError::from(RegistryError::AlreadyEnrolled).to_string();
        assert!(duplicate.contains("already"));
        assert!(duplicate.contains("signed up"));

        let absent = ApiError::from(RegistryError::NotEnrolled).to_string();
        assert!(absent.contains("not signed up"));
    }
}
