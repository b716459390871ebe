//! Section 页面视图
//!
//! 列出当前 Section 的全部内容项；每一项的 active 标记、放大查看图的
//! 地址、Unit-3 面板的可见性都取自显示指令。

use portfolio_core::view::{image_source, is_active, is_visible};
use portfolio_core::{DisplayCommand, SectionId, Target};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, ContentItem};
use crate::util::truncate;
use crate::view::theme::Styles;

/// 渲染当前 Section
pub fn render(app: &App, commands: &[DisplayCommand], frame: &mut Frame, area: Rect) {
    let active = active_section(commands);
    let title = active
        .as_ref()
        .map_or("-", |id| app.section_title(id.as_str()));

    let is_focused = app.focus.is_page();
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(active) = active else {
        frame.render_widget(
            Paragraph::new(Span::styled("  No section is active", Styles::muted())),
            inner,
        );
        return;
    };

    let panel = visible_panel(app, commands, &active);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(if panel.is_some() { 3 } else { 0 }),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(format!("  #{active}"), Styles::muted())),
        rows[0],
    );

    let items = app.items();
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("  (no interactive content)", Styles::muted())),
            rows[1],
        );
    } else {
        let max = usize::from(rows[1].width.saturating_sub(8));
        let list_items: Vec<ListItem> = items
            .iter()
            .map(|item| ListItem::new(item_line(item, commands, max)))
            .collect();
        let list = List::new(list_items).highlight_symbol("▶ ");
        let list = if is_focused {
            list.highlight_style(Styles::selected())
        } else {
            list
        };
        let mut state = ListState::default();
        state.select(Some(app.page.selected));
        frame.render_stateful_widget(list, rows[1], &mut state);
    }

    if let Some(label) = panel {
        let body = Paragraph::new(vec![
            Line::from(Span::styled(format!("  ▌ {label}"), Styles::active())),
            Line::from(Span::styled(
                "    panel content is shown here in the browser",
                Styles::muted(),
            )),
        ])
        .wrap(Wrap { trim: false });
        frame.render_widget(body, rows[2]);
    }
}

fn active_section(commands: &[DisplayCommand]) -> Option<SectionId> {
    commands.iter().find_map(|c| match c {
        DisplayCommand::SetActive {
            target: Target::Section(id),
            active: true,
        } => Some(id.clone()),
        _ => None,
    })
}

/// 当前 Section 是 Unit-3 时，返回可见面板的标签
fn visible_panel(app: &App, commands: &[DisplayCommand], active: &SectionId) -> Option<String> {
    let unit3 = app.controller.config().unit3.as_ref()?;
    if &unit3.section != active {
        return None;
    }
    unit3
        .panels
        .iter()
        .find(|p| is_visible(commands, &Target::Unit3Panel(p.id.clone())) == Some(true))
        .map(|p| p.label.clone())
}

fn marker(active: bool) -> Span<'static> {
    if active {
        Span::styled("● ", Styles::active())
    } else {
        Span::raw("  ")
    }
}

/// 单个内容项的显示
fn item_line(item: &ContentItem, commands: &[DisplayCommand], max: usize) -> Line<'static> {
    let plain = Style::default();
    match item {
        ContentItem::StickyLink { label, .. } => Line::from(vec![
            Span::styled("⇡ ", Styles::muted()),
            Span::styled(label.clone(), plain),
        ]),
        ContentItem::SubNavBack => Line::from(Span::styled("◀ Back", Styles::hint_desc())),
        ContentItem::SubNavNext => Line::from(Span::styled("Next ▶", Styles::hint_desc())),
        ContentItem::Thumbnail { target, label, .. } => Line::from(vec![
            Span::styled("▣ ", Styles::muted()),
            Span::styled(label.clone(), plain),
            Span::styled(format!("  → {target}"), Styles::muted()),
        ]),
        ContentItem::GalleryTop { group, label } => {
            let expanded = is_active(commands, &Target::GalleryGroup(group.clone())) == Some(true);
            let arrow = if expanded { "▼ " } else { "▶ " };
            let style = if expanded { Styles::active() } else { plain };
            Line::from(Span::styled(format!("{arrow}{label}"), style))
        }
        ContentItem::MiddleItem {
            group,
            index,
            label,
        } => {
            let target = Target::MiddleItem {
                group: group.clone(),
                index: *index,
            };
            let selected = is_active(commands, &target) == Some(true);
            Line::from(vec![Span::raw("    "), marker(selected), Span::raw(label.clone())])
        }
        ContentItem::ViewerPrev(_) => Line::from(Span::styled("    ‹ prev", Styles::hint_desc())),
        ContentItem::Viewer(group) => {
            let src = image_source(commands, &Target::Viewer(group.clone()))
                .filter(|s| !s.is_empty())
                .map_or_else(|| "(nothing selected)".to_string(), |s| truncate(s, max));
            Line::from(vec![
                Span::styled("    ⊞ ", Styles::muted()),
                Span::styled(src, Styles::active()),
            ])
        }
        ContentItem::ViewerNext(_) => Line::from(Span::styled("    next ›", Styles::hint_desc())),
        ContentItem::Image { image, .. } => Line::from(vec![
            Span::styled("▪ ", Styles::muted()),
            Span::raw(truncate(&image.src, max)),
        ]),
        ContentItem::Unit3Link { panel, label } => {
            let shown = is_active(commands, &Target::Unit3Link(panel.clone())) == Some(true);
            Line::from(vec![marker(shown), Span::raw(format!("§ {label}"))])
        }
        ContentItem::HubLink { target, label, .. } => Line::from(vec![
            Span::styled("↗ ", Styles::muted()),
            Span::raw(label.clone()),
            Span::styled(format!("  → {target}"), Styles::muted()),
        ]),
    }
}
