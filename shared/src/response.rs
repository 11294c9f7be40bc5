//! API Response types
//!
//! Envelopes returned by the remote API around list and delete endpoints.

use serde::{Deserialize, Serialize};

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based)
    #[serde(default)]
    pub current_page: u32,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of documents across all pages
    #[serde(default)]
    pub total_documents: u64,
}

impl Pagination {
    /// Create pagination metadata from a page request and a total count
    pub fn new(current_page: u32, limit: u32, total_documents: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total_documents.div_ceil(limit as u64) as u32
        };
        Self {
            current_page,
            total_pages,
            total_documents,
        }
    }

    /// Whether there is a page after the current one
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether there is a page before the current one
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

/// Paginated list response: `{data, pagination}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self { data, pagination }
    }
}

/// Plain `{message}` acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
