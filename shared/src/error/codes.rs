//! Numeric error codes
//!
//! The leading digit selects the [`ErrorCategory`](super::ErrorCategory):
//! 0xxx general, 1xxx auth, 2xxx permission, 4xxx report, 6xxx wizard,
//! 8xxx user, 9xxx system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code carried in every API error body as a plain number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // 0xxx
    ValidationFailed = 2,
    NotFound = 3,
    InvalidRequest = 5,
    RequiredField = 7,

    // 1xxx
    NotAuthenticated = 1001,
    TokenExpired = 1003,
    TokenInvalid = 1004,

    // 2xxx
    PermissionDenied = 2001,
    AdminRequired = 2003,
    CannotModifyAdmin = 2004,
    CannotDeleteAdmin = 2005,

    // 4xxx
    ReportDateInvalid = 4002,
    ExportFailed = 4101,
    ExportWriteFailed = 4102,

    // 6xxx
    WizardStepIncomplete = 6001,
    WizardUnknownCategory = 6002,
    WizardUnknownRole = 6003,
    BranchAlreadySetUp = 6101,

    // 8xxx
    UserNotFound = 8001,
    UserEmailExists = 8002,
    UserCannotDeleteSelf = 8003,

    // 9xxx
    InternalError = 9001,
    NetworkError = 9003,
    TimeoutError = 9004,
    ConfigError = 9005,
    PrinterNotAvailable = 9201,
    PrintFailed = 9202,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 27] = [
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::InvalidRequest,
        ErrorCode::RequiredField,
        ErrorCode::NotAuthenticated,
        ErrorCode::TokenExpired,
        ErrorCode::TokenInvalid,
        ErrorCode::PermissionDenied,
        ErrorCode::AdminRequired,
        ErrorCode::CannotModifyAdmin,
        ErrorCode::CannotDeleteAdmin,
        ErrorCode::ReportDateInvalid,
        ErrorCode::ExportFailed,
        ErrorCode::ExportWriteFailed,
        ErrorCode::WizardStepIncomplete,
        ErrorCode::WizardUnknownCategory,
        ErrorCode::WizardUnknownRole,
        ErrorCode::BranchAlreadySetUp,
        ErrorCode::UserNotFound,
        ErrorCode::UserEmailExists,
        ErrorCode::UserCannotDeleteSelf,
        ErrorCode::InternalError,
        ErrorCode::NetworkError,
        ErrorCode::TimeoutError,
        ErrorCode::ConfigError,
        ErrorCode::PrinterNotAvailable,
        ErrorCode::PrintFailed,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default English message, used when the server sends none
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",
            ErrorCode::CannotModifyAdmin => "Cannot modify administrator user",
            ErrorCode::CannotDeleteAdmin => "Cannot delete administrator user",

            ErrorCode::ReportDateInvalid => "Report date must be YYYY-MM-DD",
            ErrorCode::ExportFailed => "Failed to render export",
            ErrorCode::ExportWriteFailed => "Failed to write export file",

            ErrorCode::WizardStepIncomplete => "Wizard step is incomplete",
            ErrorCode::WizardUnknownCategory => "Product references an unknown category",
            ErrorCode::WizardUnknownRole => "User references an unknown role",
            ErrorCode::BranchAlreadySetUp => "Branch has already been set up",

            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserEmailExists => "User email already exists",
            ErrorCode::UserCannotDeleteSelf => "Cannot delete your own account",

            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::PrinterNotAvailable => "Printer not available",
            ErrorCode::PrintFailed => "Print operation failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number that is not a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
