//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use portfolio_core::{Key, Message};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, NavigationMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，避免 Windows 终端上的重复按键
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 帮助打开时只响应关闭
    if app.show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => AppMessage::ToggleHelp,
            _ => AppMessage::Noop,
        };
    }

    // 灯箱打开时接管键盘
    if app.controller.lightbox().is_open() {
        return handle_lightbox_keys(key, app);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    // 部分终端上 ? 带 Shift 修饰
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ToggleHelp;
    }
    if DefaultKeymap::RELOAD.matches(&key) {
        return AppMessage::Reload;
    }
    if DefaultKeymap::FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::TITLE.matches(&key) {
        return AppMessage::Site(Message::TitleClicked);
    }
    if app.controller.sub_nav_visible() {
        if DefaultKeymap::SUB_BACK.matches(&key) {
            return AppMessage::Site(Message::SubNavBack);
        }
        if DefaultKeymap::SUB_NEXT.matches(&key) {
            return AppMessage::Site(Message::SubNavNext);
        }
    }

    if app.focus.is_sidebar() {
        handle_sidebar_keys(key)
    } else {
        handle_page_keys(key)
    }
}

/// 灯箱打开时的按键
///
/// Esc / ← / → 走浏览器的 keyup 语义；h / l 相当于点击左右箭头按钮，
/// 按钮在两端隐藏时不可点击。
fn handle_lightbox_keys(key: KeyEvent, app: &App) -> AppMessage {
    let (prev_visible, next_visible) = app
        .controller
        .lightbox()
        .session()
        .map_or((false, false), |s| s.arrows());

    if DefaultKeymap::LIGHTBOX_PREV_BUTTON.matches(&key) {
        return if prev_visible {
            AppMessage::Site(Message::LightboxPrev)
        } else {
            AppMessage::Noop
        };
    }
    if DefaultKeymap::LIGHTBOX_NEXT_BUTTON.matches(&key) {
        return if next_visible {
            AppMessage::Site(Message::LightboxNext)
        } else {
            AppMessage::Noop
        };
    }
    if DefaultKeymap::LIGHTBOX_BACKDROP.matches(&key) {
        return AppMessage::Site(Message::OverlayClicked { on_image: false });
    }
    if DefaultKeymap::LIGHTBOX_IMAGE.matches(&key) {
        return AppMessage::Site(Message::OverlayClicked { on_image: true });
    }

    let name = match key.code {
        KeyCode::Esc => "Escape",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        _ => return AppMessage::Noop,
    };
    AppMessage::Site(Message::KeyUp(Key::from_key_name(name)))
}

/// 侧栏按键
fn handle_sidebar_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        KeyCode::Right => AppMessage::ToggleFocus,
        _ => AppMessage::Noop,
    }
}

/// 内容面板按键
fn handle_page_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Left => AppMessage::ToggleFocus,
        KeyCode::Esc => AppMessage::ClearStatus,
        _ => AppMessage::Noop,
    }
}
