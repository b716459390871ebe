//! 左侧导航面板组件

use portfolio_core::view::is_active;
use portfolio_core::{DisplayCommand, Target};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染导航面板
pub fn render(app: &App, commands: &[DisplayCommand], frame: &mut Frame, area: Rect) {
    let is_focused = app.focus.is_sidebar();

    let block = Block::default()
        .title(" Sections ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 导航列表 + 底部的 prints 标记
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = app
        .sidebar
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let active = is_active(commands, &Target::NavEntry(i)) == Some(true);
            let marker = if active { "● " } else { "  " };
            let style = if active {
                Styles::active()
            } else {
                Styles::title().remove_modifier(Modifier::BOLD)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(entry.label.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items);
    let list = if is_focused {
        list.highlight_style(Styles::selected())
    } else {
        list
    };

    let mut state = ListState::default();
    state.select(Some(app.sidebar.selected));
    frame.render_stateful_widget(list, rows[0], &mut state);

    let prints_active = is_active(commands, &Target::PrintsIndicator) == Some(true);
    let prints = if prints_active {
        Span::styled(" ◆ prints", Styles::active())
    } else {
        Span::styled(" ◇ prints", Styles::muted())
    };
    frame.render_widget(Paragraph::new(Line::from(prints)), rows[1]);
}
