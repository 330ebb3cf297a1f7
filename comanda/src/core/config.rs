use std::time::Duration;

/// 默认菜单端点
pub const DEFAULT_MENU_URL: &str = "https://storage.googleapis.com/acciojob-open-file-collections/appsmith-uploads/bb3807e9b0bc49958d39563eb1759406.json";

/// 流程配置 - 模拟点餐流程的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | MENU_URL | (远端菜单 JSON 地址) | 菜单端点 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | TAKE_ORDER_DELAY_MS | 2500 | 接单阶段延迟(毫秒) |
/// | PREP_DELAY_MS | 1500 | 备餐阶段延迟(毫秒) |
/// | PAY_DELAY_MS | 1000 | 支付阶段延迟(毫秒) |
/// | CARD_WIDTH | 32 | 菜单卡片宽度(字符) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
///
/// # 示例
///
/// ```ignore
/// MENU_URL=http://localhost:3000/menu.json cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 菜单端点 URL
    pub menu_url: String,
    /// HTTP 请求超时 (毫秒)
    pub request_timeout_ms: u64,
    /// 接单阶段延迟 (毫秒)
    pub take_order_delay_ms: u64,
    /// 备餐阶段延迟 (毫秒)
    pub prep_delay_ms: u64,
    /// 支付阶段延迟 (毫秒)
    pub pay_delay_ms: u64,
    /// 菜单卡片宽度 (字符)
    pub card_width: usize,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            menu_url: std::env::var("MENU_URL").unwrap_or_else(|_| DEFAULT_MENU_URL.into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            take_order_delay_ms: std::env::var("TAKE_ORDER_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2500),
            prep_delay_ms: std::env::var("PREP_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1500),
            pay_delay_ms: std::env::var("PAY_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1000),
            card_width: std::env::var("CARD_WIDTH")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(32),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(
        menu_url: impl Into<String>,
        take_order_delay_ms: u64,
        prep_delay_ms: u64,
        pay_delay_ms: u64,
    ) -> Self {
        let mut config = Self::from_env();
        config.menu_url = menu_url.into();
        config.take_order_delay_ms = take_order_delay_ms;
        config.prep_delay_ms = prep_delay_ms;
        config.pay_delay_ms = pay_delay_ms;
        config
    }

    /// 请求超时
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// 接单阶段延迟
    pub fn take_order_delay(&self) -> Duration {
        Duration::from_millis(self.take_order_delay_ms)
    }

    /// 备餐阶段延迟
    pub fn prep_delay(&self) -> Duration {
        Duration::from_millis(self.prep_delay_ms)
    }

    /// 支付阶段延迟
    pub fn pay_delay(&self) -> Duration {
        Duration::from_millis(self.pay_delay_ms)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides_keeps_delays() {
        let config = Config::with_overrides("http://127.0.0.1:9/menu.json", 1, 2, 3);

        assert_eq!(config.menu_url, "http://127.0.0.1:9/menu.json");
        assert_eq!(config.take_order_delay(), Duration::from_millis(1));
        assert_eq!(config.prep_delay(), Duration::from_millis(2));
        assert_eq!(config.pay_delay(), Duration::from_millis(3));
    }
}
