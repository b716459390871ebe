//! 站点消息处理
//!
//! 把消息交给控制器，再把控制器排队的副作用翻译成终端上的等价行为：
//! ScrollToTop 让内容光标回到顶部，ScrollIntoView 让光标跳到图片区。

use portfolio_core::{update as dispatch, Effect, Message};

use crate::model::{App, ContentItem};

/// 处理站点消息
pub fn update(app: &mut App, msg: Message) {
    dispatch(&mut app.controller, msg);
    apply_effects(app);
    app.sidebar.follow(app.controller.navigator().active_nav());
    let len = app.items().len();
    app.page.clamp(len);
}

/// 执行控制器排队的副作用
fn apply_effects(app: &mut App) {
    for effect in app.controller.take_effects() {
        match effect {
            Effect::ScrollToTop => app.page.reset(),
            Effect::ScrollIntoView(selector) => {
                let items = app.items();
                if !app.page.jump_to(&items, ContentItem::is_scroll_anchor) {
                    log::debug!("滚动目标 {selector} 不在当前页面");
                }
            }
        }
    }
}
