//! Portfolio TUI
//!
//! 在终端里预览站点描述，用键盘驱动与浏览器端相同的控制器。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 终端状态 + 站点控制器 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: 由显示指令渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//!
//! main.rs 的执行顺序：
//!     解析参数并加载配置 → 初始化日志 → 加载站点描述 → 创建 App
//!     → 发送 Loaded → init_terminal() → app::run() → restore_terminal()

mod app;
mod config;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use clap::Parser;
use portfolio_core::Message;

use config::{Args, TuiConfig};
use message::AppMessage;
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = TuiConfig::load()?.merge(&args);

    let site = config.load_site()?;
    if args.dump_site {
        println!("{}", site.to_json_pretty()?);
        return Ok(());
    }

    let _guard = init_logging()?;
    tracing::info!(
        "启动终端预览: {} 个 Section, 主题 {:?}",
        site.sections.len(),
        config.theme
    );
    view::theme::set_theme(config.theme);

    // 1. 创建应用实例并加载页面
    let mut app = model::App::new(site)?;
    update::update(&mut app, AppMessage::Site(Message::Loaded));

    // 2. 初始化终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 3. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 4. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("主循环异常退出: {e:#}");
    }
    result
}
