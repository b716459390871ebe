//! 侧栏相关消息

/// 侧栏消息
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// 光标上移
    SelectPrevious,
    /// 光标下移
    SelectNext,
    /// 点击光标所在的导航项
    Confirm,
    SelectFirst,
    SelectLast,
}
