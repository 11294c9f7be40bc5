//! AppError and the JSON error body

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Error returned by the API: a code, a message and optional details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    /// Field-level context (`field`, `email`, `branch`, ...)
    pub details: Option<BTreeMap<String, Value>>,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// `{field} is required`, with the field name in the details
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{} is required", field))
            .with_detail("field", field)
    }

    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, msg)
    }
}

/// Body of every non-2xx response: `{code, message, details?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Value>>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(code = %self.code, message = %self.message, "System error occurred");
        }
        (self.http_status(), axum::Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let err = AppError::new(ErrorCode::CannotDeleteAdmin);
        assert_eq!(err.message, ErrorCode::CannotDeleteAdmin.message());
        assert!(err.details.is_none());
        assert_eq!(err.http_status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_required_names_field() {
        let err = AppError::required("company name");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.to_string(), "company name is required");
        assert_eq!(err.details.unwrap()["field"], "company name");
    }

    #[test]
    fn test_error_body_wire_format() {
        let err = AppError::with_message(ErrorCode::UserNotFound, "User 42 not found")
            .with_detail("id", "42");
        let json = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": 8001, "message": "User 42 not found", "details": {"id": "42"}})
        );

        let plain = serde_json::to_value(ErrorBody::from(&AppError::not_authenticated())).unwrap();
        assert!(plain.get("details").is_none());
    }

    #[test]
    fn test_error_body_parse() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"code":2005,"message":"Cannot delete administrator user"}"#).unwrap();
        assert_eq!(body.code, 2005);
        assert_eq!(ErrorCode::try_from(body.code), Ok(ErrorCode::CannotDeleteAdmin));
    }
}
