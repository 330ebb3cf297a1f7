//! Comanda - 模拟点餐流程客户端
//!
//! # 架构概述
//!
//! 本 crate 实现一个线性的模拟点餐流程：先从远端 JSON 端点加载菜单并
//! 渲染到展示区域，然后顺序执行下单流水线（接单 → 备餐 → 支付 → 致谢），
//! 每个阶段用定时器模拟真实工作。
//!
//! # 模块结构
//!
//! ```text
//! comanda/src/
//! ├── core/          # 配置、控制器、错误
//! ├── menu/          # 菜单拉取、卡片渲染、展示区域
//! ├── pipeline/      # 流水线阶段与时钟抽象
//! ├── notify.rs      # 用户可见通知
//! └── utils/         # 环境设置、日志
//! ```

pub mod core;
pub mod menu;
pub mod notify;
pub mod pipeline;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, DEFAULT_MENU_URL, FlowController, FlowError, FlowState, MenuError};
pub use menu::{BufferSurface, DisplaySurface, MenuCardRenderer, MenuHttp, MenuLoader};
pub use notify::{ConsoleNotifier, Notifier, RecordingNotifier};
pub use pipeline::{Clock, InstantClock, TokioClock};

// Re-export logger functions
pub use utils::logger::init_logger;
pub use utils::setup_environment;

pub fn print_banner() {
    println!(
        r#"
   ______                                 __
  / ____/___  ____ ___  ____ _____  ____/ /___ _
 / /   / __ \/ __ `__ \/ __ `/ __ \/ __  / __ `/
/ /___/ /_/ / / / / / / /_/ / / / / /_/ / /_/ /
\____/\____/_/ /_/ /_/\__,_/_/ /_/\__,_/\__,_/
    "#
    );
}
