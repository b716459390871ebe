//! 主布局渲染

use portfolio_core::view::{is_active, is_visible};
use portfolio_core::{project, Target};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let commands = project(&app.controller);
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(24), Constraint::Percentage(76)])
        .split(main_layout[1]);

    components::navigation::render(app, &commands, frame, columns[0]);

    // 右侧：悬浮子导航 + 子分组翻页栏 + 页面
    let sticky_shown = is_visible(&commands, &Target::StickyNav) == Some(true);
    let sub_nav_shown = is_visible(&commands, &Target::SubNavBar) == Some(true);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::from(sticky_shown)),
            Constraint::Length(u16::from(sub_nav_shown)),
            Constraint::Min(1),
        ])
        .split(columns[1]);

    if sticky_shown {
        components::sticky::render(app, &commands, frame, right[0]);
    }
    if sub_nav_shown {
        components::subnav::render(app, frame, right[1]);
    }
    pages::section::render(app, &commands, frame, right[2]);

    components::statusbar::render(app, frame, main_layout[2]);

    // 灯箱与帮助在最上层
    if is_active(&commands, &Target::LightboxOverlay) == Some(true) {
        components::lightbox::render(app, &commands, frame, size);
    }
    if app.show_help {
        components::help::render(frame, size);
    }
}

/// 渲染标题栏：站点标题 + 模拟的 URL 片段
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = vec![Span::styled(
        format!(" {} ", app.site_title()),
        Style::default().bg(c.highlight).fg(c.selected_fg),
    )];
    if let Some(fragment) = app.fragment() {
        spans.push(Span::styled(format!("  #{fragment}"), Styles::muted()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
