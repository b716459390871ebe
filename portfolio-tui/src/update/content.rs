//! 内容面板消息处理

use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    let items = app.items();
    match msg {
        ContentMessage::SelectPrevious => app.page.select_previous(),
        ContentMessage::SelectNext => app.page.select_next(items.len()),
        ContentMessage::SelectFirst => app.page.reset(),
        ContentMessage::SelectLast => app.page.select_last(items.len()),
        ContentMessage::Confirm => {
            if let Some(item) = items.get(app.page.selected) {
                super::site::update(app, item.message());
            }
        }
    }
}
