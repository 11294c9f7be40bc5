//! HTTP status of each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::UserNotFound => StatusCode::NOT_FOUND,

            Self::UserEmailExists | Self::BranchAlreadySetUp => StatusCode::CONFLICT,

            Self::NotAuthenticated | Self::TokenExpired | Self::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }

            Self::PermissionDenied
            | Self::AdminRequired
            | Self::CannotModifyAdmin
            | Self::CannotDeleteAdmin
            | Self::UserCannotDeleteSelf => StatusCode::FORBIDDEN,

            Self::NetworkError | Self::TimeoutError | Self::PrinterNotAvailable => {
                StatusCode::SERVICE_UNAVAILABLE
            }

            Self::InternalError
            | Self::ConfigError
            | Self::PrintFailed
            | Self::ExportFailed
            | Self::ExportWriteFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // validation and wizard input errors
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ErrorCode::UserNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::UserEmailExists, StatusCode::CONFLICT),
            (ErrorCode::BranchAlreadySetUp, StatusCode::CONFLICT),
            (ErrorCode::TokenInvalid, StatusCode::UNAUTHORIZED),
            (ErrorCode::CannotDeleteAdmin, StatusCode::FORBIDDEN),
            (ErrorCode::UserCannotDeleteSelf, StatusCode::FORBIDDEN),
            (ErrorCode::WizardUnknownCategory, StatusCode::BAD_REQUEST),
            (ErrorCode::ReportDateInvalid, StatusCode::BAD_REQUEST),
            (ErrorCode::RequiredField, StatusCode::BAD_REQUEST),
            (ErrorCode::TimeoutError, StatusCode::SERVICE_UNAVAILABLE),
            (ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, status) in cases {
            assert_eq!(code.http_status(), status, "{:?}", code);
        }
    }

    #[test]
    fn test_permission_codes_are_403() {
        for code in ErrorCode::ALL {
            if code.category() == crate::error::ErrorCategory::Permission {
                assert_eq!(code.http_status(), StatusCode::FORBIDDEN, "{:?}", code);
            }
        }
    }
}
