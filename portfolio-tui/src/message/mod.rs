//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event 到 Update 之间的桥梁。
//! 终端自身的操作（焦点、光标、帮助、重载）用 AppMessage 表达；
//! 对站点的操作包装成 `AppMessage::Site(portfolio_core::Message)`，
//! 最终由控制器的 `update` 处理。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod content;        // 内容面板子消息
//!         mod navigation;     // 侧栏子消息
//!
//!
//!     在 src/event/handler.rs 中：
//!         pub fn handle_event(event: Event, app: &App) -> AppMessage {
//!             match event {
//!                 Event::Key(key) if 灯箱打开 => AppMessage::Site(Message::KeyUp(..)),
//!                 Event::Key(key) if 焦点在侧栏 => AppMessage::Navigation(..),
//!                 Event::Key(key) if 焦点在页面 => AppMessage::Content(..),
//!                 _ => AppMessage::Noop,
//!             }
//!         }
//!
//!
//! 最后，Event 将消息传入 Update 层进行处理。
//!     下一站：src/update/mod.rs
//!

mod app;
mod content;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use navigation::NavigationMessage;
