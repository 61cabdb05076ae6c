//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use ecocampus_domain::error::{CampusError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CampusError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(CampusError);

impl From<CampusError> for ApiError {
    fn from(err: CampusError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(CampusError::Validation(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::from(ValidationError::InvalidBody(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CampusError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CampusError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            CampusError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecocampus_domain::error::NotFoundError;

    #[test]
    fn should_map_insufficient_points_to_bad_request() {
        let response = ApiError::from(ValidationError::InsufficientPoints {
            required: 500,
            available: 100,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found() {
        let response = ApiError::from(CampusError::from(NotFoundError {
            entity: "Room",
            id: "9".to_string(),
        }))
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_hide_storage_details() {
        let inner: Box<dyn std::error::Error + Send + Sync> = "disk full".into();
        let response = ApiError::from(CampusError::Storage(inner)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
