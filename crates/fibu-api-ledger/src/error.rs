//! Error types for the Ledger API.
//!
//! Business-rule violations inside a batch (unknown account, incomplete
//! create, unknown id) never surface here; they degrade to silent per-entry
//! no-ops inside the reconciliation services. Only authentication failures
//! and storage faults become request errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fibu_db::DbError;
use serde::Serialize;
use utoipa::ToSchema;

/// JSON error body returned to callers.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable error code for programmatic handling.
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

/// Error type for the Ledger API.
#[derive(Debug, thiserror::Error)]
pub enum ApiLedgerError {
    /// Authentication required (missing or unresolvable credential).
    #[error("Authentication required")]
    Unauthorized,

    /// Storage fault; the whole batch transaction was aborted.
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl IntoResponse for ApiLedgerError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            ApiLedgerError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                self.to_string(),
            ),
            ApiLedgerError::Database(e) => {
                tracing::error!(error = %e, "Request failed on storage fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_401() {
        let response = ApiLedgerError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn database_error_maps_to_500() {
        let err = ApiLedgerError::Database(DbError::QueryFailed(sqlx::Error::RowNotFound));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
