//! REST error mapping for the ROI simulator.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::error::DomainError;

/// Handler result alias; all handlers surface errors as [`ApiError`].
pub type ApiResult<T> = Result<T, ApiError>;

/// Wire-level error: status code plus `{"error": "<message>"}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Convert `DomainError` to the wire error for REST responses.
///
/// Validation maps to 400, unknown ids to 404, and storage failures to a
/// generic 500 that does not expose internal detail.
impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let (status, message) = match &e {
            DomainError::MissingField { .. }
            | DomainError::InvalidType { .. }
            | DomainError::OutOfRange { .. }
            | DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, e.to_string()),
            DomainError::ScenarioNotFound { .. } => (StatusCode::NOT_FOUND, e.to_string()),
            DomainError::Database { .. } => {
                tracing::error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database error".to_owned(),
                )
            }
        };

        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err = ApiError::from(DomainError::missing_field("auto_cost"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message.contains("auto_cost"));
    }

    #[test]
    fn unknown_id_maps_to_not_found() {
        let err = ApiError::from(DomainError::scenario_not_found(7));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failures_hide_internals() {
        let err = ApiError::from(DomainError::database("UNIQUE constraint failed"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "database error");
    }
}
