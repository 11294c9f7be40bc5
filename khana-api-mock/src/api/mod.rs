//! API 路由模块
//!
//! # 结构
//!
//! - [`invoice`] - 日结发票与仪表盘
//! - [`user`] - 用户管理接口
//! - [`branch`] - 门店初始化向导

pub mod branch;
pub mod invoice;
pub mod user;
