//! 子分组翻页栏

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染 Back / Next 栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let active = app.controller.active_section();
    let group = active
        .and_then(|id| app.controller.group_of(id))
        .unwrap_or_default();
    let position = app
        .controller
        .paginator()
        .position(active)
        .map(|(i, n)| format!("{}/{n}", i + 1))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(" [ ", Styles::hint_key()),
        Span::styled("◀ Back", Styles::hint_desc()),
        Span::raw("   "),
        Span::styled(format!("{group} {position}"), Styles::title()),
        Span::raw("   "),
        Span::styled("Next ▶", Styles::hint_desc()),
        Span::styled(" ]", Styles::hint_key()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
