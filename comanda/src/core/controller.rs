//! 流程控制器
//!
//! 菜单加载与下单流水线的顺序调度。显式入口，由二进制的 `main`
//! 调用一次；不依赖任何环境生命周期事件。

use std::fmt;

use shared::StageStatus;

use crate::core::{Config, Result};
use crate::menu::{DisplaySurface, MenuCardRenderer, MenuHttp, MenuLoader, TerminalSurface};
use crate::notify::{ConsoleNotifier, MENU_FAILURE_NOTICE, Notifier, THANK_YOU_NOTICE};
use crate::pipeline::{self, Clock, TokioClock};

/// 控制器状态机
///
/// 纯顺序推进，无分支、无重试；`Errored` 是下单序列内任何失败的
/// 吸收态。菜单加载失败不进入 `Errored`（两者因果独立）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    LoadingMenu,
    TakingOrder,
    Preparing,
    Paying,
    Done,
    Errored,
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowState::Idle => write!(f, "Idle"),
            FlowState::LoadingMenu => write!(f, "LoadingMenu"),
            FlowState::TakingOrder => write!(f, "TakingOrder"),
            FlowState::Preparing => write!(f, "Preparing"),
            FlowState::Paying => write!(f, "Paying"),
            FlowState::Done => write!(f, "Done"),
            FlowState::Errored => write!(f, "Errored"),
        }
    }
}

/// 流程控制器
pub struct FlowController {
    config: Config,
    loader: MenuLoader,
    surface: Box<dyn DisplaySurface>,
    clock: Box<dyn Clock>,
    notifier: Box<dyn Notifier>,
    state: FlowState,
}

impl FlowController {
    /// 按配置组装生产默认件：真实时钟、终端展示、控制台通知
    pub fn new(config: Config) -> Self {
        let http = MenuHttp::new(config.menu_url.clone(), config.request_timeout());
        let renderer = MenuCardRenderer::new(config.card_width);

        Self::with_parts(
            config,
            MenuLoader::new(http, renderer),
            Box::new(TerminalSurface),
            Box::new(TokioClock),
            Box::new(ConsoleNotifier),
        )
    }

    /// 注入自定义部件 (测试场景)
    pub fn with_parts(
        config: Config,
        loader: MenuLoader,
        surface: Box<dyn DisplaySurface>,
        clock: Box<dyn Clock>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            loader,
            surface,
            clock,
            notifier,
            state: FlowState::Idle,
        }
    }

    /// 当前状态
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// 运行整个流程，返回终态
    ///
    /// 菜单失败：通知 + 记录日志，流水线继续。
    /// 下单序列内的失败：记录日志后停在 `Errored`，不清理、不恢复。
    pub async fn run(&mut self) -> FlowState {
        self.transition(FlowState::LoadingMenu);
        match self.loader.load_and_render(&mut *self.surface).await {
            Ok(count) => tracing::info!(cards = count, "Menu rendered"),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching menu");
                self.notifier.alert(MENU_FAILURE_NOTICE);
            }
        }

        if let Err(e) = self.run_order_sequence().await {
            tracing::error!(error = %e, "Something went wrong in the order process");
            self.transition(FlowState::Errored);
            return self.state;
        }

        self.transition(FlowState::Done);
        self.state
    }

    async fn run_order_sequence(&mut self) -> Result<()> {
        self.transition(FlowState::TakingOrder);
        let order =
            pipeline::take_order(self.clock.as_ref(), self.config.take_order_delay()).await?;
        tracing::info!(items = ?order.items, status = %order.order_status, "Order taken");

        self.transition(FlowState::Preparing);
        let prep = pipeline::prepare_order(self.clock.as_ref(), self.config.prep_delay()).await?;
        tracing::info!(prepared = prep.order_status, paid = prep.paid, "Order prep status");

        self.transition(FlowState::Paying);
        let pay = pipeline::pay_order(self.clock.as_ref(), self.config.pay_delay()).await?;
        tracing::info!(prepared = pay.order_status, paid = pay.paid, "Payment status");

        self.finish_order(pay);
        Ok(())
    }

    /// 致谢只在支付完成时发出
    fn finish_order(&self, pay: StageStatus) {
        if pay.paid {
            self.notifier.alert(THANK_YOU_NOTICE);
        }
    }

    fn transition(&mut self, next: FlowState) {
        tracing::debug!(from = %self.state, to = %next, "Flow transition");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::BufferSurface;
    use crate::notify::RecordingNotifier;
    use crate::pipeline::InstantClock;
    use std::time::Duration;

    fn controller_with_notifier(notifier: RecordingNotifier) -> FlowController {
        let config = Config::with_overrides("http://127.0.0.1:9/menu.json", 0, 0, 0);
        let http = MenuHttp::new(config.menu_url.clone(), Duration::from_millis(100));
        let loader = MenuLoader::new(http, MenuCardRenderer::new(config.card_width));

        FlowController::with_parts(
            config,
            loader,
            Box::new(BufferSurface::new()),
            Box::new(InstantClock::new()),
            Box::new(notifier),
        )
    }

    #[test]
    fn test_thank_you_fires_only_when_paid() {
        let notifier = RecordingNotifier::new();
        let controller = controller_with_notifier(notifier.clone());

        controller.finish_order(StageStatus::prepared());
        assert!(notifier.notices().is_empty());

        controller.finish_order(StageStatus::paid());
        assert_eq!(notifier.notices(), vec![THANK_YOU_NOTICE.to_string()]);
    }

    #[test]
    fn test_initial_state_is_idle() {
        let controller = controller_with_notifier(RecordingNotifier::new());
        assert_eq!(controller.state(), FlowState::Idle);
    }

    #[test]
    fn test_flow_state_display() {
        assert_eq!(FlowState::TakingOrder.to_string(), "TakingOrder");
        assert_eq!(FlowState::Errored.to_string(), "Errored");
    }
}
