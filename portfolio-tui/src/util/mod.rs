//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与站点逻辑无关的基础设施代码。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志写入文件
//!         mod terminal;       // 终端初始化和恢复
//!         mod text;           // 按显示宽度截断文本
//!
//!
//!     终端：
//!         · init_terminal()       启用原始模式并进入备用屏幕
//!         · restore_terminal()    离开备用屏幕并恢复光标
//!         · install_panic_hook()  panic 时先恢复终端再打印信息，
//!                                 否则终端会停留在原始模式
//!
//!     日志：
//!         终端处于原始模式时不能向 stdout / stderr 写日志，
//!         init_logging() 把 tracing 输出写入配置目录下的日志文件，
//!         并通过 tracing-log 接收 portfolio-core 里 `log` 宏的记录。
//!

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
pub use text::truncate;
