//! 侧栏状态定义
//!
//! 光标只表示“将要点击哪一项”，真正处于 active 的导航项由控制器决定。

use portfolio_core::SiteConfig;

/// 侧栏导航项
#[derive(Debug, Clone)]
pub struct SidebarEntry {
    pub label: String,
}

/// 侧栏状态
pub struct SidebarState {
    pub entries: Vec<SidebarEntry>,
    /// 光标位置
    pub selected: usize,
}

impl SidebarState {
    /// 按站点描述的导航项创建
    pub fn new(site: &SiteConfig) -> Self {
        let entries = site
            .nav
            .iter()
            .map(|entry| SidebarEntry {
                label: if entry.label.is_empty() {
                    entry.target.to_string()
                } else {
                    entry.label.clone()
                },
            })
            .collect();
        Self {
            entries,
            selected: 0,
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
    }

    /// 光标跟随控制器当前的导航项
    pub fn follow(&mut self, active_nav: Option<usize>) {
        if let Some(index) = active_nav.filter(|i| *i < self.entries.len()) {
            self.selected = index;
        }
    }
}
