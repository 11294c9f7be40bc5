//! Khana Admin - 餐厅门店管理控制台
//!
//! # 架构概述
//!
//! - **报表** (`report`): 日销售汇总、屏幕表格、小票打印
//! - **导出** (`export`): xlsx / pdf 文件
//! - **仪表盘** (`dashboard`): 销售概览
//! - **用户管理** (`users`): 列表、增删改、操作权限提示
//! - **开店向导** (`wizard`): 分步收集门店配置并一次提交
//!
//! # 模块结构
//!
//! ```text
//! khana-admin/src/
//! ├── core/          # 配置、会话、错误
//! ├── report/        # 汇总计算与渲染
//! ├── export/        # 文件导出
//! ├── users/         # 用户管理
//! ├── wizard/        # 开店向导
//! ├── commands/      # CLI 子命令
//! └── utils/         # 日志、金额
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod dashboard;
pub mod export;
pub mod report;
pub mod users;
pub mod utils;
pub mod wizard;

// Re-export 公共类型
pub use cli::Cli;
pub use crate::core::{AdminConfig, AdminError, AdminResult, SessionContext};
pub use export::ExportFormat;
pub use report::{ReportContext, ReportView, build_view, derive_totals};
pub use wizard::{StepPatch, Wizard, WizardState, WizardStep};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
