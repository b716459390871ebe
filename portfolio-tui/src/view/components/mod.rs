//! 界面组件

pub mod help;
pub mod lightbox;
pub mod navigation;
pub mod statusbar;
pub mod sticky;
pub mod subnav;

use ratatui::layout::Rect;

/// 在区域中居中放置一个矩形
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
