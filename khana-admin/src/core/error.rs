//! Admin error types

use khana_client::ClientError;
use khana_printer::PrintError;
use shared::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

use crate::wizard::WizardStep;

#[derive(Error, Debug)]
pub enum AdminError {
    /// Transport or API failure from the remote service
    #[error(transparent)]
    Client(ClientError),

    /// The server (or the action hint) refused the action for this user
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error(transparent)]
    Print(#[from] PrintError),

    /// Rendering an export document failed; nothing was written
    #[error("Export failed: {0}")]
    Export(String),

    #[error("Failed to write {path}: {source}")]
    ExportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A wizard step did not pass its required-field checks
    #[error("{step}: {message}")]
    Wizard { step: WizardStep, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdminError {
    pub fn wizard(step: WizardStep, message: impl Into<String>) -> Self {
        Self::Wizard {
            step,
            message: message.into(),
        }
    }

    /// Shared error code for this failure
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Client(e) => e.error_code().unwrap_or(ErrorCode::NetworkError),
            Self::PermissionDenied(_) => ErrorCode::PermissionDenied,
            Self::Print(PrintError::SurfaceUnavailable(_)) => ErrorCode::PrinterNotAvailable,
            Self::Print(PrintError::Connection(_)) => ErrorCode::PrinterNotAvailable,
            Self::Print(_) => ErrorCode::PrintFailed,
            Self::Export(_) => ErrorCode::ExportFailed,
            Self::ExportWrite { .. } => ErrorCode::ExportWriteFailed,
            Self::Wizard { .. } => ErrorCode::WizardStepIncomplete,
            Self::InvalidInput(_) => ErrorCode::ValidationFailed,
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}

/// 403 and permission-category API errors become [`AdminError::PermissionDenied`]
impl From<ClientError> for AdminError {
    fn from(err: ClientError) -> Self {
        if err.is_permission_denied() {
            let message = match &err {
                ClientError::Api { message, .. } | ClientError::Forbidden(message) => {
                    message.clone()
                }
                other => other.to_string(),
            };
            Self::PermissionDenied(message)
        } else {
            Self::Client(err)
        }
    }
}

pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_maps_to_permission_denied() {
        let err: AdminError = ClientError::Api {
            status: 403,
            code: ErrorCode::CannotDeleteAdmin.code(),
            message: "Cannot delete administrator user".into(),
            details: None,
        }
        .into();
        assert!(err.is_permission_denied());
        assert_eq!(err.to_string(), "Permission denied: Cannot delete administrator user");
    }

    #[test]
    fn test_other_client_errors_pass_through() {
        let err: AdminError = ClientError::NotFound("User u9 not found".into()).into();
        assert!(matches!(err, AdminError::Client(_)));
        assert_eq!(err.error_code(), ErrorCode::NetworkError);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AdminError::Export("x".into()).error_code(), ErrorCode::ExportFailed);
        assert_eq!(
            AdminError::wizard(WizardStep::Tables, "At least one table is required").to_string(),
            "Tables: At least one table is required"
        );
        assert_eq!(
            AdminError::Print(PrintError::SurfaceUnavailable("/nope".into())).error_code(),
            ErrorCode::PrinterNotAvailable
        );
    }
}
