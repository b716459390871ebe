//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 每一帧先调用 `portfolio_core::project` 得到完整的显示指令，
//! 各组件只根据指令决定 active / 可见 / 图片地址，不直接读取控制器的
//! 内部状态；光标、焦点等终端自身的状态仍从 `App` 读取。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局
//!         mod components;     // 侧栏、子导航栏、悬浮栏、状态栏、灯箱、帮助
//!         mod pages;          // Section 页面
//!         pub mod theme;      // 主题
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
