//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层只保存终端界面自己的状态（焦点、光标、状态栏、帮助开关），
//! 站点本身的状态全部由 `portfolio_core::Controller` 持有。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod content;        // 当前页面的内容项与光标
//!         mod focus;          // 焦点状态（Sidebar / Page）
//!         mod navigation;     // 侧栏状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 光标与 active 的区别
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     侧栏和内容面板的光标只表示“下一次 Enter 会点击哪里”，
//!     哪个 Section / 导航项 / 画廊组处于 active，一律以控制器投影出的
//!     显示指令为准（见 view 层）。
//!
//!     数据流：
//!         用户在侧栏按 Enter
//!             ↓
//!         event/handler.rs 返回 AppMessage::Navigation(Confirm)
//!             ↓
//!         update/navigation.rs 发送 Message::NavClicked(selected)
//!             ↓
//!         控制器切换 Section，产生 ScrollToTop 副作用
//!             ↓
//!         update/site.rs 把副作用翻译为“内容光标回到顶部”
//!

mod app;
mod content;
mod focus;
mod navigation;

pub use app::App;
pub use content::{build_items, ContentItem, PageCursor};
pub use focus::FocusPanel;
pub use navigation::SidebarState;
