//! 工具函数

pub mod logger;

use anyhow::Result;

/// 设置运行环境 (dotenv + 日志)
///
/// 在读取 [`crate::core::Config`] 之前调用，保证 `.env` 中的
/// 变量对配置可见。
pub fn setup_environment() -> Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

    logger::init_logger(&level, environment == "production")?;
    Ok(())
}
