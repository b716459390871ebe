//! 帮助弹窗

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::view::theme::Styles;

const KEYS: &[(&str, &str)] = &[
    ("Tab / ← →", "切换侧栏与页面"),
    ("↑ ↓ / j k", "移动光标"),
    ("Enter", "点击光标所在项"),
    ("t", "点击站点标题（回到 landing）"),
    ("[ ]", "子分组 Back / Next"),
    ("Esc ← →", "灯箱：关闭 / 上一张 / 下一张"),
    ("h l", "灯箱：点击左右箭头"),
    ("x", "灯箱：点击背景"),
    ("Ctrl+R", "模拟刷新页面（会话存储保留）"),
    ("q", "退出"),
];

/// 渲染帮助弹窗
pub fn render(frame: &mut Frame, area: Rect) {
    let height = u16::try_from(KEYS.len()).unwrap_or(u16::MAX).saturating_add(4);
    let popup = centered_rect(56, height, area);

    let mut lines = vec![Line::from("")];
    lines.extend(KEYS.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Styles::hint_key()),
            Span::styled(*desc, Styles::hint_desc()),
        ])
    }));

    let block = Block::default()
        .title(" Help ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
