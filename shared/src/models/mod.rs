//! Data models
//!
//! Wire types of the remote restaurant API. All JSON keys are camelCase;
//! missing numeric fields default to zero.

pub mod company;
pub mod dashboard;
pub mod report;
pub mod role;
pub mod user;
pub mod wizard;

// Re-exports
pub use company::*;
pub use dashboard::*;
pub use report::*;
pub use role::*;
pub use user::*;
pub use wizard::*;
