//! 菜单 HTTP 客户端
//!
//! 从远端 JSON 端点拉取菜单数据。单次 GET，无重试，无认证。

use std::time::Duration;

use reqwest::Client;
use shared::MenuItem;

use crate::core::MenuError;

/// 菜单客户端
///
/// # 示例
///
/// ```ignore
/// let client = MenuHttp::new("https://example.com/menu.json", Duration::from_secs(30));
/// let items = client.fetch_menu().await?;
/// ```
#[derive(Debug, Clone)]
pub struct MenuHttp {
    /// HTTP 客户端
    client: Client,
    /// 菜单端点 URL
    menu_url: String,
}

impl MenuHttp {
    /// 创建菜单客户端
    pub fn new(menu_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            menu_url: menu_url.into(),
        }
    }

    /// 拉取并解析菜单
    ///
    /// 传输失败、非 2xx 状态码和解码失败分别映射到
    /// [`MenuError`] 的三个变体。
    pub async fn fetch_menu(&self) -> Result<Vec<MenuItem>, MenuError> {
        tracing::info!(url = %self.menu_url, "Fetching menu from API...");

        let response = self
            .client
            .get(&self.menu_url)
            .send()
            .await
            .map_err(MenuError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MenuError::Status(status));
        }

        response
            .json::<Vec<MenuItem>>()
            .await
            .map_err(MenuError::Decode)
    }
}
