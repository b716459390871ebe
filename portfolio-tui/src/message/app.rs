//! 应用主消息枚举

use portfolio_core::Message;

use super::{ContentMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 侧栏相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 直接交给站点控制器的消息
    Site(Message),

    /// 模拟页面重载（卸载 → 新控制器 → 加载）
    Reload,

    /// 显示 / 隐藏帮助
    ToggleHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
