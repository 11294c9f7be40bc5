//! Khana Client - HTTP client for the restaurant API
//!
//! Provides bearer-authenticated JSON calls and typed endpoints for
//! invoices, the dashboard, users and branch setup.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::AdminApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
