//! Shared types for Khana
//!
//! Wire models, error codes and response envelopes used by the admin
//! console, the HTTP client and the mock API.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
pub use response::{MessageResponse, PaginatedResponse, Pagination};
