//! 错误类型
//!
//! 两类失败域：菜单加载 ([`MenuError`]) 和下单流水线 ([`FlowError::Stage`])。

use reqwest::StatusCode;
use thiserror::Error;

/// 菜单加载错误
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("menu endpoint returned {0}")]
    Status(StatusCode),

    #[error("menu payload decode failed: {0}")]
    Decode(#[source] reqwest::Error),
}

/// 流程错误
///
/// 流水线阶段本身不会失败；[`FlowError::Stage`] 是控制器统一捕获策略
/// 的错误通道，与菜单错误区分开。
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("menu load failed: {0}")]
    Menu(#[from] MenuError),

    #[error("{stage} stage failed: {reason}")]
    Stage {
        stage: &'static str,
        reason: String,
    },
}

/// 流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, FlowError>;
