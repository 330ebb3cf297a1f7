//! 下单流水线 - 四个顺序阶段
//!
//! 接单 → 备餐 → 支付 → 致谢。每个阶段等待一个固定延迟（模拟真实工作），
//! 然后产生固定形状的结果。正常运行下没有任何阶段会失败；Result 只是
//! 控制器统一捕获策略的通道。

pub mod clock;

pub use clock::{Clock, InstantClock, TokioClock};

use std::time::Duration;

use rand::Rng;
use shared::{Order, StageStatus};

use crate::core::Result;

/// 接单阶段的固定菜品目录
pub const CATALOG: [&str; 5] = [
    "Cheeseburger",
    "Chicken Burger",
    "Veggie Burger",
    "Bacon Burger",
    "Fish Burger",
];

/// 每单固定选取的菜品数量
pub const ORDER_SIZE: usize = 3;

/// 接单：延迟后从目录中独立均匀随机选取 3 个菜品（可重复）
pub async fn take_order(clock: &dyn Clock, delay: Duration) -> Result<Order> {
    clock.sleep(delay).await;
    tracing::info!("Taking order...");

    let mut rng = rand::thread_rng();
    let items = (0..ORDER_SIZE)
        .map(|_| CATALOG[rng.gen_range(0..CATALOG.len())].to_string())
        .collect();

    Ok(Order::received(items))
}

/// 备餐：延迟后返回已备餐、未支付
pub async fn prepare_order(clock: &dyn Clock, delay: Duration) -> Result<StageStatus> {
    clock.sleep(delay).await;
    tracing::info!("Chef is preparing food...");

    Ok(StageStatus::prepared())
}

/// 支付：延迟后返回已备餐、已支付
pub async fn pay_order(clock: &dyn Clock, delay: Duration) -> Result<StageStatus> {
    clock.sleep(delay).await;
    tracing::info!("Processing payment...");

    Ok(StageStatus::paid())
}
