//! 侧栏消息处理

use portfolio_core::Message;

use crate::message::NavigationMessage;
use crate::model::App;

/// 处理侧栏消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.sidebar.select_previous(),
        NavigationMessage::SelectNext => app.sidebar.select_next(),
        NavigationMessage::SelectFirst => app.sidebar.select_first(),
        NavigationMessage::SelectLast => app.sidebar.select_last(),
        NavigationMessage::Confirm => {
            if app.sidebar.entries.is_empty() {
                return;
            }
            app.clear_status();
            super::site::update(app, Message::NavClicked(app.sidebar.selected));
        }
    }
}
