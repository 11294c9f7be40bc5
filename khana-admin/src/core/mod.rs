//! 核心模块 - 配置、会话、错误

pub mod config;
pub mod error;
pub mod session;

pub use config::AdminConfig;
pub use error::{AdminError, AdminResult};
pub use session::SessionContext;
