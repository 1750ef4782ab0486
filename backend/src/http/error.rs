//! HTTP error handling and response types.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;
use crate::services::OptimizeError;

/// API error response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request field that failed validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Optional additional details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            details: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Malformed request that names no single field
    BadRequest(String),
    /// A request field failed validation
    Validation { field: String, message: String },
    /// Well-formed request with no acceptable answer
    NoFeasibleWindow(String),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ApiError) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("VALIDATION_ERROR", message).with_field(field),
            ),
            AppError::NoFeasibleWindow(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("NO_FEASIBLE_WINDOW", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Repository(e) => repository_status_and_body(e),
        }
    }
}

fn repository_status_and_body(err: RepositoryError) -> (StatusCode, ApiError) {
    let context = err.context().clone();
    match err {
        RepositoryError::NotFound { message, .. } => {
            let mut body = ApiError::new("NOT_FOUND", message);
            if let Some(entity) = context.entity {
                body = body.with_details(format!("entity={}", entity));
            }
            (StatusCode::NOT_FOUND, body)
        }
        RepositoryError::ValidationError { message, .. } => {
            let mut body = ApiError::new("VALIDATION_ERROR", message);
            if let Some(field) = context.field {
                body = body.with_field(field);
            }
            (StatusCode::BAD_REQUEST, body)
        }
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("REPOSITORY_ERROR", other.to_string()),
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_body();
        if status.is_server_error() {
            tracing::error!(code = %error.code, message = %error.message, "request failed");
        } else {
            tracing::debug!(code = %error.code, message = %error.message, "request rejected");
        }
        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<OptimizeError> for AppError {
    fn from(err: OptimizeError) -> Self {
        match err {
            OptimizeError::Validation { field, message } => AppError::Validation { field, message },
            OptimizeError::Infeasible(e) => AppError::NoFeasibleWindow(e.to_string()),
        }
    }
}

/// Request field named in an extractor rejection message.
///
/// Deserialization failures read `"<context>: <path>: <error>"`, or
/// `"<context>: missing field `<name>` ..."` when a key is absent. Array
/// indices are dropped so `network_load[3]` reports as `network_load`.
fn rejected_field(text: &str) -> Option<String> {
    if let Some(rest) = text.split("missing field `").nth(1) {
        return rest
            .split('`')
            .next()
            .filter(|name| !name.is_empty())
            .map(str::to_string);
    }

    let mut parts = text.splitn(3, ": ");
    parts.next()?;
    let path = parts.next()?;
    parts.next()?;
    if path.is_empty() || path.contains(char::is_whitespace) {
        return None;
    }
    path.split('[')
        .next()
        .filter(|root| !root.is_empty())
        .map(str::to_string)
}

impl AppError {
    /// A path segment that could not be parsed into `param`'s type.
    pub fn invalid_path(param: &str, rejection: PathRejection) -> Self {
        AppError::Validation {
            field: param.to_string(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                AppError::Validation {
                    field: rejected_field(&message).unwrap_or_else(|| "body".to_string()),
                    message,
                }
            }
            _ => AppError::BadRequest(message),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        let message = rejection.body_text();
        AppError::Validation {
            field: rejected_field(&message).unwrap_or_else(|| "query".to_string()),
            message,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::WindowError;
    use crate::db::repository::ErrorContext;

    #[test]
    fn test_validation_maps_to_400_with_field() {
        let err: AppError = OptimizeError::Validation {
            field: "network_load".into(),
            message: "expected 24 values".into(),
        }
        .into();
        let (status, body) = err.status_and_body();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert_eq!(body.field.as_deref(), Some("network_load"));
    }

    #[test]
    fn test_infeasible_maps_to_422() {
        let err: AppError = OptimizeError::Infeasible(WindowError::NoFeasibleWindow {
            crew_required: 13.0,
            duration_hours: 2.5,
        })
        .into();
        let (status, body) = err.status_and_body();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "NO_FEASIBLE_WINDOW");
    }

    #[test]
    fn test_rejected_field_from_missing_key() {
        let text = "Failed to deserialize the JSON body into the target type: \
                    missing field `network_load` at line 1 column 60";
        assert_eq!(rejected_field(text).as_deref(), Some("network_load"));
    }

    #[test]
    fn test_rejected_field_from_error_path() {
        let text = "Failed to deserialize the JSON body into the target type: \
                    network_load[3]: invalid type: null, expected f64 at line 1 column 40";
        assert_eq!(rejected_field(text).as_deref(), Some("network_load"));

        let text = "Failed to deserialize the JSON body into the target type: \
                    weights.load: invalid type: string \"x\", expected f64 at line 1 column 9";
        assert_eq!(rejected_field(text).as_deref(), Some("weights.load"));

        let text = "Failed to deserialize query string: hour: invalid digit found in string";
        assert_eq!(rejected_field(text).as_deref(), Some("hour"));
    }

    #[test]
    fn test_rejected_field_absent_for_syntax_errors() {
        let text = "Failed to parse the request body as JSON: expected value at line 1 column 1";
        assert_eq!(rejected_field(text), None);
    }

    #[test]
    fn test_repository_variants() {
        let (status, _) = AppError::from(RepositoryError::not_found("Patch 3 not found")).status_and_body();
        assert_eq!(status, StatusCode::NOT_FOUND);

        let err = RepositoryError::validation_with_context(
            "must be at least 1",
            ErrorContext::new("create_patch").with_field("min_crew"),
        );
        let (status, body) = AppError::from(err).status_and_body();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.field.as_deref(), Some("min_crew"));

        let (status, body) = AppError::from(RepositoryError::internal("boom")).status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "REPOSITORY_ERROR");
    }
}
