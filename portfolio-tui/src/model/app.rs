//! 应用主状态结构

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use portfolio_core::{Controller, InMemoryHistory, InMemorySessionStore, SiteConfig};

use super::{build_items, ContentItem, FocusPanel, PageCursor, SidebarState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 侧栏光标
    pub sidebar: SidebarState,

    /// 内容面板光标
    pub page: PageCursor,

    /// 站点控制器
    pub controller: Controller,

    /// 状态栏消息
    pub status_message: Option<String>,
    status_since: Option<Instant>,

    /// 是否显示帮助
    pub show_help: bool,

    // 重载时复用，模拟同一浏览器会话
    site: SiteConfig,
    store: InMemorySessionStore,
    history: InMemoryHistory,
}

impl App {
    /// 以站点描述创建应用实例（尚未发送 `Loaded`）
    pub fn new(site: SiteConfig) -> Result<Self> {
        let store = InMemorySessionStore::new();
        let history = InMemoryHistory::new();
        let controller = Self::build_controller(&site, &store, &history)?;

        Ok(Self {
            should_quit: false,
            focus: FocusPanel::Sidebar,
            sidebar: SidebarState::new(&site),
            page: PageCursor::default(),
            controller,
            status_message: None,
            status_since: None,
            show_help: false,
            site,
            store,
            history,
        })
    }

    fn build_controller(
        site: &SiteConfig,
        store: &InMemorySessionStore,
        history: &InMemoryHistory,
    ) -> Result<Controller> {
        Ok(Controller::new(
            site.clone(),
            Rc::new(store.clone()),
            Rc::new(history.clone()),
        )?)
    }

    /// 用同一会话存储换一个新控制器，返回旧控制器
    pub fn replace_controller(&mut self) -> Result<Controller> {
        let fresh = Self::build_controller(&self.site, &self.store, &self.history)?;
        Ok(std::mem::replace(&mut self.controller, fresh))
    }

    /// 当前页面的内容项
    pub fn items(&self) -> Vec<ContentItem> {
        build_items(&self.controller)
    }

    /// 站点标题（landing Section 的标题）
    pub fn site_title(&self) -> &str {
        self.site
            .section(&self.site.landing)
            .map_or("Portfolio", |s| s.title.as_str())
    }

    /// Section 标题，缺省为 id
    pub fn section_title<'a>(&'a self, id: &'a str) -> &'a str {
        self.site
            .sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.title.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or(id)
    }

    /// 模拟的 URL 片段
    pub fn fragment(&self) -> Option<String> {
        use portfolio_core::HistoryAdapter;
        self.history.current_fragment()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_since = Some(Instant::now());
    }

    /// 状态消息是否已显示超过 `ttl`
    pub fn status_expired(&self, ttl: Duration) -> bool {
        self.status_since.is_some_and(|since| since.elapsed() >= ttl)
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_since = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_expires_and_clears() {
        let mut app = App::new(SiteConfig::demo().unwrap()).unwrap();
        assert!(!app.status_expired(Duration::ZERO));

        app.set_status("Reloaded");
        assert!(app.status_expired(Duration::ZERO));
        assert!(!app.status_expired(Duration::from_secs(3600)));

        app.clear_status();
        assert!(app.status_message.is_none());
        assert!(!app.status_expired(Duration::ZERO));
    }

    #[test]
    fn section_title_falls_back_to_id() {
        let app = App::new(SiteConfig::demo().unwrap()).unwrap();
        assert_eq!(app.section_title("no-such-section"), "no-such-section");
        assert_eq!(app.site_title(), "Portfolio · Landing");
    }
}
