//! 主题和样式定义

use std::sync::atomic::{AtomicU8, Ordering};

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 切换全局主题（启动时调用一次）
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme as u8, Ordering::Relaxed);
}

/// 当前主题的颜色方案
pub fn colors() -> ThemeColors {
    if CURRENT_THEME.load(Ordering::Relaxed) == Theme::Light as u8 {
        ThemeColors::light()
    } else {
        ThemeColors::dark()
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// active 状态的标记色
    pub active: Color,
    pub warning: Color,
    pub muted: Color,
    /// 灯箱遮罩
    pub overlay_bg: Color,
}

impl ThemeColors {
    /// 深色主题：暗房
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(230, 225, 215),
            border: Color::Rgb(70, 64, 58),
            border_focused: Color::Rgb(214, 170, 96),
            highlight: Color::Rgb(120, 78, 44),
            selected_bg: Color::Rgb(92, 66, 44),
            selected_fg: Color::Rgb(250, 244, 232),
            active: Color::Rgb(232, 186, 104),
            warning: Color::Rgb(240, 128, 96),
            muted: Color::Rgb(138, 130, 120),
            overlay_bg: Color::Rgb(16, 14, 12),
        }
    }

    /// 浅色主题：纸面
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(40, 36, 32),
            border: Color::Rgb(200, 192, 178),
            border_focused: Color::Rgb(150, 92, 40),
            highlight: Color::Rgb(150, 92, 40),
            selected_bg: Color::Rgb(240, 224, 196),
            selected_fg: Color::Rgb(30, 24, 18),
            active: Color::Rgb(176, 96, 32),
            warning: Color::Rgb(180, 50, 40),
            muted: Color::Rgb(130, 122, 110),
            overlay_bg: Color::Rgb(246, 240, 230),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 边框样式（按是否聚焦）
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 光标所在项
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 处于 active 状态的元素
    pub fn active() -> Style {
        Style::default()
            .fg(colors().active)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(colors().fg)
    }
}
