use comanda::{Config, FlowController, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment()?;

    // 打印横幅
    print_banner();

    tracing::info!("🍔 Comanda flow starting...");

    // 2. 加载配置
    let config = Config::from_env();

    // 3. 组装控制器并运行流程 (显式入口，只触发一次)
    let mut controller = FlowController::new(config);
    let state = controller.run().await;

    tracing::info!(state = %state, "Flow finished");

    Ok(())
}
