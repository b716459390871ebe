//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const RELOAD: KeyBinding = KeyBinding::ctrl(KeyCode::Char('r'));
    pub const FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 站点
    pub const TITLE: KeyBinding = KeyBinding::key(KeyCode::Char('t'));
    pub const SUB_BACK: KeyBinding = KeyBinding::key(KeyCode::Char('['));
    pub const SUB_NEXT: KeyBinding = KeyBinding::key(KeyCode::Char(']'));

    // 灯箱
    pub const LIGHTBOX_PREV_BUTTON: KeyBinding = KeyBinding::key(KeyCode::Char('h'));
    pub const LIGHTBOX_NEXT_BUTTON: KeyBinding = KeyBinding::key(KeyCode::Char('l'));
    pub const LIGHTBOX_BACKDROP: KeyBinding = KeyBinding::key(KeyCode::Char('x'));
    pub const LIGHTBOX_IMAGE: KeyBinding = KeyBinding::key(KeyCode::Enter);
}
