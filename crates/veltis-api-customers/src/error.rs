//! Error types for the Customer Administration API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Error type for the Customer Administration API.
#[derive(Debug, thiserror::Error)]
pub enum ApiCustomersError {
    /// Customer not found (update or lookup on an absent id).
    #[error("Customer not found")]
    NotFound,

    /// Display name already used by a different customer.
    #[error("Please use another customer name, it is already occupied")]
    NameConflict,

    /// Login account already used by a different customer.
    #[error("Please use another customer account, it is already occupied")]
    AccountConflict,

    /// Invitation code does not resolve to any binding.
    #[error("The invitation code is invalid")]
    InvalidInvitationCode,

    /// Validation error (missing or malformed input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication required.
    #[error("Authentication required")]
    Unauthorized,

    /// Admin role required.
    #[error("Admin role required")]
    Forbidden,

    /// Export serialization failure.
    #[error("Export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// Export sink write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// RFC 7807 Problem Details response format.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    fn new(problem_type: &str, title: &str, status: StatusCode, detail: String) -> Self {
        Self {
            problem_type: format!("https://veltis.dev/problems/{problem_type}"),
            title: title.to_string(),
            status: status.as_u16(),
            detail: Some(detail),
        }
    }
}

impl IntoResponse for ApiCustomersError {
    fn into_response(self) -> Response {
        let (status, problem) = match &self {
            ApiCustomersError::NotFound => (
                StatusCode::NOT_FOUND,
                ProblemDetails::new("not-found", "Not Found", StatusCode::NOT_FOUND, self.to_string()),
            ),
            ApiCustomersError::NameConflict | ApiCustomersError::AccountConflict => (
                StatusCode::CONFLICT,
                ProblemDetails::new("conflict", "Conflict", StatusCode::CONFLICT, self.to_string()),
            ),
            ApiCustomersError::InvalidInvitationCode | ApiCustomersError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                ProblemDetails::new(
                    "validation-error",
                    "Validation Error",
                    StatusCode::BAD_REQUEST,
                    self.to_string(),
                ),
            ),
            ApiCustomersError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ProblemDetails::new(
                    "unauthorized",
                    "Unauthorized",
                    StatusCode::UNAUTHORIZED,
                    "Missing or invalid authentication".to_string(),
                ),
            ),
            ApiCustomersError::Forbidden => (
                StatusCode::FORBIDDEN,
                ProblemDetails::new(
                    "forbidden",
                    "Forbidden",
                    StatusCode::FORBIDDEN,
                    "Admin role required for this operation".to_string(),
                ),
            ),
            ApiCustomersError::Export(e) => {
                tracing::error!("Export error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails::new(
                        "internal-error",
                        "Internal Server Error",
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Export serialization failed".to_string(),
                    ),
                )
            }
            ApiCustomersError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails::new(
                        "internal-error",
                        "Internal Server Error",
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An I/O error occurred".to_string(),
                    ),
                )
            }
            ApiCustomersError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails::new(
                        "internal-error",
                        "Internal Server Error",
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "A database error occurred".to_string(),
                    ),
                )
            }
        };

        (status, Json(problem)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiCustomersError::NotFound;
        assert_eq!(err.to_string(), "Customer not found");

        let err = ApiCustomersError::Validation("customer_num is required".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: customer_num is required"
        );
    }

    #[test]
    fn test_conflict_error_display() {
        assert_eq!(
            ApiCustomersError::NameConflict.to_string(),
            "Please use another customer name, it is already occupied"
        );
        assert_eq!(
            ApiCustomersError::AccountConflict.to_string(),
            "Please use another customer account, it is already occupied"
        );
        assert_eq!(
            ApiCustomersError::InvalidInvitationCode.to_string(),
            "The invitation code is invalid"
        );
    }

    #[test]
    fn test_problem_type_url() {
        let problem = ProblemDetails::new(
            "conflict",
            "Conflict",
            StatusCode::CONFLICT,
            "detail".to_string(),
        );
        assert_eq!(problem.problem_type, "https://veltis.dev/problems/conflict");
        assert_eq!(problem.status, 409);
    }
}
