//! 灯箱遮罩

use portfolio_core::view::{image_source, is_visible};
use portfolio_core::{DisplayCommand, Target};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::model::App;
use crate::util::truncate;
use crate::view::theme::{colors, Styles};

/// 渲染灯箱：图片地址 + 左右箭头（两端隐藏）
pub fn render(app: &App, commands: &[DisplayCommand], frame: &mut Frame, area: Rect) {
    let c = colors();

    // 背景遮罩
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(c.overlay_bg)),
        area,
    );

    let width = (area.width / 4 * 3).max(30);
    let popup = centered_rect(width, 9, area);

    let counter = app
        .controller
        .lightbox()
        .session()
        .map(|s| format!(" {}/{} ", s.index() + 1, s.len()))
        .unwrap_or_default();

    let block = Block::default()
        .title(" Lightbox ")
        .title_bottom(Line::from(counter).alignment(Alignment::Right))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let src = image_source(commands, &Target::LightboxImage).unwrap_or_default();
    let max = usize::from(inner.width.saturating_sub(4));

    let prev = if is_visible(commands, &Target::LightboxPrev) == Some(true) {
        Span::styled("‹ h", Styles::hint_key())
    } else {
        Span::raw("   ")
    };
    let next = if is_visible(commands, &Target::LightboxNext) == Some(true) {
        Span::styled("l ›", Styles::hint_key())
    } else {
        Span::raw("   ")
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(truncate(src, max), Styles::active())).alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            prev,
            Span::raw(" ".repeat(usize::from(inner.width.saturating_sub(6)))),
            next,
        ]),
        Line::from(""),
        Line::from(Span::styled("Esc close · x backdrop", Styles::muted()))
            .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
