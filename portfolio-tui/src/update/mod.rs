//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 接收 Event 层翻译好的 AppMessage，修改 Model。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;        // 内容面板光标与确认
//!         mod navigation;     // 侧栏光标与确认
//!         mod site;           // 站点消息 → 控制器 → 副作用
//!
//!
//!     重载（Ctrl+R）：
//!         旧控制器收到 Unloading（写入会话存储）后被丢弃，
//!         新控制器共享同一个 InMemorySessionStore，收到 Loaded 后恢复
//!         上次的 Section，和浏览器刷新页面的效果一致。
//!

mod content;
mod navigation;
mod site;

use portfolio_core::Message;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            site::update(app, Message::Unloading);
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Site(site_msg) => site::update(app, site_msg),

        AppMessage::Reload => reload(app),

        AppMessage::ToggleHelp => {
            app.show_help = !app.show_help;
        }

        AppMessage::ClearStatus => app.clear_status(),

        AppMessage::Noop => {}
    }
}

/// 模拟页面重载
fn reload(app: &mut App) {
    site::update(app, Message::Unloading);
    match app.replace_controller() {
        Ok(_old) => {
            site::update(app, Message::Loaded);
            let restored = app
                .controller
                .active_section()
                .map_or_else(|| "-".to_string(), ToString::to_string);
            tracing::info!("页面已重载，恢复到 {restored}");
            app.set_status(format!("Reloaded · {restored}"));
        }
        Err(e) => {
            tracing::error!("重载失败: {e:#}");
            app.set_status(format!("Reload failed: {e}"));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use portfolio_core::{SectionId, SiteConfig};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::message::{ContentMessage, NavigationMessage};

    fn app() -> App {
        let mut app = App::new(SiteConfig::demo().unwrap()).unwrap();
        update(&mut app, AppMessage::Site(Message::Loaded));
        app
    }

    fn active(app: &App) -> Option<String> {
        app.controller.active_section().map(ToString::to_string)
    }

    #[test]
    fn sidebar_confirm_clicks_nav_entry() {
        let mut app = app();
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(active(&app), Some("Unit2".to_string()));
    }

    #[test]
    fn content_confirm_follows_thumbnail() {
        let mut app = app();
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        assert_eq!(active(&app), Some("sectionB".to_string()));
        // 切换 Section 后光标回到顶部
        assert_eq!(app.page.selected, 0);
    }

    #[test]
    fn reload_restores_active_section() {
        let mut app = app();
        update(
            &mut app,
            AppMessage::Site(Message::UnitThumbnailClicked(SectionId::new("sectionH"))),
        );
        update(&mut app, AppMessage::Reload);
        assert_eq!(active(&app), Some("sectionH".to_string()));
        assert!(app.status_message.unwrap().contains("sectionH"));
    }

    #[test]
    fn sidebar_cursor_follows_active_nav() {
        let mut app = app();
        update(&mut app, AppMessage::Site(Message::NavClicked(4)));
        assert_eq!(app.sidebar.selected, 4);
    }

    #[test]
    fn hub_link_jumps_to_image_block() {
        let mut app = app();
        update(
            &mut app,
            AppMessage::Site(Message::HubLinkClicked {
                target: SectionId::new("Gallery-series-1"),
                scroll: Some("#Gallery-series-1 .image-block".to_string()),
            }),
        );
        let items = app.items();
        assert!(items[app.page.selected].is_scroll_anchor());
    }
}
