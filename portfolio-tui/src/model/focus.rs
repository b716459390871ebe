//! 焦点状态定义

/// 焦点面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航栏
    #[default]
    Sidebar,
    /// 右侧 Section 页面
    Page,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Sidebar => FocusPanel::Page,
            FocusPanel::Page => FocusPanel::Sidebar,
        }
    }

    pub fn is_sidebar(self) -> bool {
        matches!(self, FocusPanel::Sidebar)
    }

    pub fn is_page(self) -> bool {
        matches!(self, FocusPanel::Page)
    }
}
