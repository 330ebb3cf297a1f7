//! 核心模块 - 配置、控制器和错误定义
//!
//! # 模块结构
//!
//! - [`Config`] - 流程配置
//! - [`FlowController`] - 流程控制器
//! - [`FlowState`] - 控制器状态机
//! - [`FlowError`] / [`MenuError`] - 错误类型

pub mod config;
pub mod controller;
pub mod error;

pub use config::{Config, DEFAULT_MENU_URL};
pub use controller::{FlowController, FlowState};
pub use error::{FlowError, MenuError, Result};
