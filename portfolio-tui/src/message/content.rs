//! 内容面板消息
//!
//! 光标移动在终端侧处理，Confirm 把光标所在的内容项翻译成站点消息。

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 点击光标所在的内容项
    Confirm,
}
