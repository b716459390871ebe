//! 底部状态栏：左侧快捷键提示，右侧当前 Section 与状态消息

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

const SEPARATOR: &str = " · ";

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width(app))]).areas(area);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, Styles::hint_desc()));
        }
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, Styles::hint_desc()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::statusbar()),
        left,
    );

    frame.render_widget(
        Paragraph::new(Line::from(right_spans(app)))
            .alignment(Alignment::Right)
            .style(Styles::statusbar()),
        right,
    );
}

fn right_spans(app: &App) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(msg.clone(), Styles::statusbar().fg(colors().warning)));
        spans.push(Span::raw(SEPARATOR));
    }
    let section = app
        .controller
        .active_section()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    spans.push(Span::styled(format!("§ {section} "), Styles::hint_key()));
    spans
}

fn right_width(app: &App) -> u16 {
    let width: usize = right_spans(app).iter().map(Span::width).sum();
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// 按当前状态生成快捷键提示
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.controller.lightbox().is_open() {
        return vec![
            ("←→", "Browse"),
            ("h/l", "Arrows"),
            ("x", "Backdrop"),
            ("Esc", "Close"),
        ];
    }

    let mut hints = vec![("Tab", "Panel"), ("↑↓", "Select")];
    hints.push(match app.focus {
        FocusPanel::Sidebar => ("Enter", "Open"),
        FocusPanel::Page => ("Enter", "Click"),
    });
    if app.controller.sub_nav_visible() {
        hints.push(("[ ]", "Back/Next"));
    }
    hints.extend([("t", "Home"), ("Ctrl+R", "Reload"), ("?", "Help"), ("q", "Quit")]);
    hints
}
