//! 悬浮 Unit-3 子导航

use portfolio_core::view::is_active;
use portfolio_core::{DisplayCommand, Target};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染悬浮栏：当前显示的面板高亮
pub fn render(app: &App, commands: &[DisplayCommand], frame: &mut Frame, area: Rect) {
    let Some(unit3) = app.controller.config().unit3.as_ref() else {
        return;
    };

    let mut spans = vec![Span::styled(
        format!(" {} ▸ ", app.section_title(unit3.section.as_str())),
        Styles::muted(),
    )];
    for (i, panel) in unit3.panels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::muted()));
        }
        let shown = is_active(commands, &Target::Unit3Link(panel.id.clone())) == Some(true);
        let style = if shown { Styles::active() } else { Styles::hint_desc() };
        spans.push(Span::styled(panel.label.clone(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
