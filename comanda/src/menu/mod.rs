//! 菜单模块 - 拉取、渲染、展示
//!
//! 菜单加载与下单流水线互不依赖：加载结果只写入展示区域，
//! 不被后续阶段消费。

pub mod client;
pub mod display;
pub mod render;

pub use client::MenuHttp;
pub use display::{BufferSurface, DisplaySurface, TerminalSurface};
pub use render::{FALLBACK_IMAGE_URL, MenuCardRenderer};

use crate::core::MenuError;

/// 菜单加载器 - 拉取、渲染、替换展示区域
pub struct MenuLoader {
    http: MenuHttp,
    renderer: MenuCardRenderer,
}

impl MenuLoader {
    pub fn new(http: MenuHttp, renderer: MenuCardRenderer) -> Self {
        Self { http, renderer }
    }

    /// 拉取菜单并整体替换展示区域内容
    ///
    /// 失败时不触碰展示区域，由调用方决定如何通知用户。
    /// 返回渲染的卡片数量。
    pub async fn load_and_render(
        &self,
        surface: &mut dyn DisplaySurface,
    ) -> Result<usize, MenuError> {
        let items = self.http.fetch_menu().await?;
        tracing::debug!(count = items.len(), "Menu data loaded");

        surface.replace_contents(self.renderer.render(&items));
        Ok(items.len())
    }
}
