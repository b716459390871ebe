//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     handle_event 的判断顺序：
//!         - Ctrl+C 始终退出
//!         - 帮助打开时，只响应关闭
//!         - 灯箱打开时，Esc / ← / → 翻译为 Message::KeyUp，
//!           h / l / x / Enter 模拟点击箭头按钮、背景和图片本身
//!         - 全局快捷键：q 退出、? 帮助、Ctrl+R 重载、Tab 切换焦点、
//!           t 回到首页、[ ] 子分组翻页
//!         - 焦点位于侧栏，调用 handle_sidebar_keys 处理
//!         - 焦点位于页面，调用 handle_page_keys 处理
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
