//! Three-tier gallery state: top-level group, middle item, enlarged viewer
//!
//! At most one group on the page is expanded, held as `expanded: Option<usize>`.

use crate::error::{CoreError, CoreResult};
use crate::types::{GalleryGroupConfig, MiddleItemConfig};

/// One gallery group
#[derive(Debug, Clone)]
pub struct GalleryGroup {
    pub id: String,
    pub label: String,
    pub items: Vec<MiddleItemConfig>,
    /// Selected middle item; `None` until something is selected
    selected: Option<usize>,
}

impl GalleryGroup {
    fn from_config(config: &GalleryGroupConfig) -> Self {
        Self {
            id: config.id.clone(),
            label: config.label.clone(),
            items: config.items.clone(),
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Starting point for prev / next, 0 when nothing is selected
    pub fn current_index(&self) -> usize {
        self.selected.unwrap_or(0)
    }

    /// Viewer source: the selected item's full image, or an empty string
    pub fn viewer_source(&self) -> Option<&str> {
        let index = self.selected?;
        Some(
            self.items
                .get(index)
                .and_then(|item| item.full.as_deref())
                .unwrap_or(""),
        )
    }
}

/// Outcome of a top-level click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The group expanded; `selected` tells whether item 0 got selected
    Expanded { selected: bool },
    /// The expanded group collapsed
    Collapsed,
}

/// Every gallery group on the page
#[derive(Debug, Clone, Default)]
pub struct GalleryBoard {
    groups: Vec<GalleryGroup>,
    expanded: Option<usize>,
}

impl GalleryBoard {
    pub fn new(configs: &[GalleryGroupConfig]) -> Self {
        Self {
            groups: configs.iter().map(GalleryGroup::from_config).collect(),
            expanded: None,
        }
    }

    pub fn groups(&self) -> &[GalleryGroup] {
        &self.groups
    }

    pub fn group(&self, id: &str) -> Option<&GalleryGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn expanded(&self) -> Option<&GalleryGroup> {
        self.expanded.and_then(|i| self.groups.get(i))
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded().is_some_and(|g| g.id == id)
    }

    fn index_of(&self, id: &str) -> CoreResult<usize> {
        self.groups
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| CoreError::GalleryNotFound(id.to_string()))
    }

    /// Top-level control clicked
    ///
    /// An expanded group collapses without expanding another; otherwise the
    /// other groups collapse and this one expands with item 0 selected.
    pub fn toggle(&mut self, id: &str) -> CoreResult<Toggle> {
        let index = self.index_of(id)?;
        if self.expanded == Some(index) {
            self.expanded = None;
            return Ok(Toggle::Collapsed);
        }
        self.expanded = Some(index);
        let selected = self.select_at(index, 0).is_ok();
        Ok(Toggle::Expanded { selected })
    }

    /// Select a middle item
    pub fn select_middle(&mut self, id: &str, index: usize) -> CoreResult<()> {
        let group = self.index_of(id)?;
        self.select_at(group, index)
    }

    fn select_at(&mut self, group: usize, index: usize) -> CoreResult<()> {
        let Some(g) = self.groups.get_mut(group) else {
            return Err(CoreError::GalleryNotFound(group.to_string()));
        };
        if index >= g.items.len() {
            return Err(CoreError::MiddleItemNotFound {
                group: g.id.clone(),
                index,
            });
        }
        g.selected = Some(index);
        Ok(())
    }

    /// Previous item, wrapping from the first to the last
    pub fn prev(&mut self, id: &str) -> CoreResult<usize> {
        let group = self.index_of(id)?;
        let g = &self.groups[group];
        let len = g.items.len();
        if len == 0 {
            return Err(CoreError::MiddleItemNotFound {
                group: id.to_string(),
                index: 0,
            });
        }
        let cur = g.current_index();
        let next = if cur > 0 { cur - 1 } else { len - 1 };
        self.select_at(group, next)?;
        Ok(next)
    }

    /// Next item, wrapping from the last to the first
    pub fn next(&mut self, id: &str) -> CoreResult<usize> {
        let group = self.index_of(id)?;
        let g = &self.groups[group];
        let len = g.items.len();
        if len == 0 {
            return Err(CoreError::MiddleItemNotFound {
                group: id.to_string(),
                index: 0,
            });
        }
        let cur = g.current_index();
        let next = if cur + 1 < len { cur + 1 } else { 0 };
        self.select_at(group, next)?;
        Ok(next)
    }

    /// On page load, expand the first group in document order and select item 0
    pub fn expand_first(&mut self) -> Option<&GalleryGroup> {
        if self.groups.is_empty() {
            return None;
        }
        self.expanded = Some(0);
        if let Err(e) = self.select_at(0, 0) {
            e.log("expand first gallery group");
        }
        self.groups.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(n: usize) -> MiddleItemConfig {
        MiddleItemConfig {
            label: format!("item {n}"),
            thumb: format!("thumb/{n}.jpg"),
            full: Some(format!("full/{n}.jpg")),
        }
    }

    fn board() -> GalleryBoard {
        GalleryBoard::new(&[
            GalleryGroupConfig {
                id: "group-a".into(),
                section: None,
                label: "A".into(),
                items: (0..3).map(item).collect(),
            },
            GalleryGroupConfig {
                id: "group-b".into(),
                section: None,
                label: "B".into(),
                items: (0..2).map(item).collect(),
            },
            GalleryGroupConfig {
                id: "empty".into(),
                section: None,
                label: String::new(),
                items: Vec::new(),
            },
        ])
    }

    #[test]
    fn expanding_collapses_others() {
        let mut b = board();
        assert_eq!(b.toggle("group-a").unwrap(), Toggle::Expanded { selected: true });
        assert_eq!(b.toggle("group-b").unwrap(), Toggle::Expanded { selected: true });
        assert!(b.is_expanded("group-b"));
        assert!(!b.is_expanded("group-a"));
    }

    #[test]
    fn toggling_expanded_group_collapses_it() {
        let mut b = board();
        b.toggle("group-a").unwrap();
        assert_eq!(b.toggle("group-a").unwrap(), Toggle::Collapsed);
        assert!(b.expanded().is_none());
    }

    #[test]
    fn selecting_updates_viewer_source() {
        let mut b = board();
        b.toggle("group-a").unwrap();
        b.select_middle("group-a", 2).unwrap();
        let g = b.group("group-a").unwrap();
        assert_eq!(g.selected(), Some(2));
        assert_eq!(g.viewer_source(), Some("full/2.jpg"));
    }

    #[test]
    fn viewer_source_empty_without_full_reference() {
        let mut b = GalleryBoard::new(&[GalleryGroupConfig {
            id: "g".into(),
            section: None,
            label: String::new(),
            items: vec![MiddleItemConfig {
                label: String::new(),
                thumb: "t.jpg".into(),
                full: None,
            }],
        }]);
        b.select_middle("g", 0).unwrap();
        assert_eq!(b.group("g").unwrap().viewer_source(), Some(""));
    }

    #[test]
    fn prev_and_next_wrap() {
        let mut b = board();
        b.toggle("group-a").unwrap();
        assert_eq!(b.prev("group-a").unwrap(), 2);
        assert_eq!(b.next("group-a").unwrap(), 0);
        assert_eq!(b.next("group-a").unwrap(), 1);
    }

    #[test]
    fn out_of_range_and_empty_groups_are_rejected() {
        let mut b = board();
        assert!(b.select_middle("group-b", 5).is_err());
        assert!(b.next("empty").is_err());
        assert!(b.toggle("missing").is_err());
        assert_eq!(b.toggle("empty").unwrap(), Toggle::Expanded { selected: false });
    }

    #[test]
    fn expand_first_selects_first_item() {
        let mut b = board();
        let first = b.expand_first().unwrap();
        assert_eq!(first.id, "group-a");
        assert_eq!(b.group("group-a").unwrap().selected(), Some(0));
    }

    #[test]
    fn expand_first_on_empty_group_selects_nothing() {
        let mut b = GalleryBoard::new(&[GalleryGroupConfig {
            id: "bare".into(),
            section: None,
            label: String::new(),
            items: Vec::new(),
        }]);
        let first = b.expand_first().unwrap();
        assert_eq!(first.selected(), None);
        assert!(b.is_expanded("bare"));
        assert_eq!(b.group("bare").unwrap().viewer_source(), None);
    }
}
