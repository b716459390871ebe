//! 页面内容项
//!
//! 把当前 Section 的可交互元素（缩略图、画廊控件、图片、Unit-3 链接……）
//! 展开成一个线性列表，内容面板的光标在其中上下移动，Enter 触发对应的
//! 站点消息。列表每次按控制器状态重新生成，不单独保存。

use portfolio_core::types::{ImageRef, ThumbnailKind};
use portfolio_core::{Controller, Message, SectionId};

/// 内容项
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// 悬浮 Unit-3 子导航链接
    StickyLink { panel: String, label: String },
    /// 子分组 Back
    SubNavBack,
    /// 子分组 Next
    SubNavNext,
    /// 子页缩略图
    Thumbnail {
        target: SectionId,
        kind: ThumbnailKind,
        label: String,
    },
    /// 画廊组顶层控件
    GalleryTop { group: String, label: String },
    /// 画廊中间项
    MiddleItem {
        group: String,
        index: usize,
        label: String,
    },
    ViewerPrev(String),
    /// 放大查看图
    Viewer(String),
    ViewerNext(String),
    /// 可放大的图片（`index` 为在集合中的序号）
    Image {
        set: String,
        index: usize,
        image: ImageRef,
    },
    /// Unit-3 内嵌子导航链接
    Unit3Link { panel: String, label: String },
    /// Gallery Hub 深链接
    HubLink {
        target: SectionId,
        scroll: Option<String>,
        label: String,
    },
}

impl ContentItem {
    /// 按下 Enter 时发送的站点消息
    pub fn message(&self) -> Message {
        match self {
            Self::StickyLink { panel, .. } => Message::StickyLinkClicked(panel.clone()),
            Self::SubNavBack => Message::SubNavBack,
            Self::SubNavNext => Message::SubNavNext,
            Self::Thumbnail { target, kind, .. } => match kind {
                ThumbnailKind::Unit => Message::UnitThumbnailClicked(target.clone()),
                ThumbnailKind::Series => Message::SeriesThumbnailClicked(target.clone()),
            },
            Self::GalleryTop { group, .. } => Message::GalleryTopClicked(group.clone()),
            Self::MiddleItem { group, index, .. } => Message::MiddleItemClicked {
                group: group.clone(),
                index: *index,
            },
            Self::ViewerPrev(group) => Message::ViewerPrev(group.clone()),
            Self::Viewer(group) => Message::ViewerClicked(group.clone()),
            Self::ViewerNext(group) => Message::ViewerNext(group.clone()),
            Self::Image { set, index, image } => Message::ImageClicked {
                container: Some(set.clone()),
                index: *index,
                image: image.clone(),
            },
            Self::Unit3Link { panel, .. } => Message::Unit3LinkClicked(panel.clone()),
            Self::HubLink { target, scroll, .. } => Message::HubLinkClicked {
                target: target.clone(),
                scroll: scroll.clone(),
            },
        }
    }

    /// 是否属于某个滚动锚点（`.image-block` 等图片容器）
    pub fn is_scroll_anchor(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

/// 生成当前页面的内容项
pub fn build_items(controller: &Controller) -> Vec<ContentItem> {
    let mut items = Vec::new();
    let config = controller.config();

    if let Some(unit3) = controller.unit3().filter(|u| u.sticky().shown) {
        for panel in config.unit3.iter().flat_map(|u| &u.panels) {
            if unit3.has_panel(&panel.id) {
                items.push(ContentItem::StickyLink {
                    panel: panel.id.clone(),
                    label: panel.label.clone(),
                });
            }
        }
    }

    if controller.sub_nav_visible() {
        items.push(ContentItem::SubNavBack);
        items.push(ContentItem::SubNavNext);
    }

    let Some(active) = controller.active_section() else {
        return items;
    };

    for thumb in config.thumbnails_in(active) {
        items.push(ContentItem::Thumbnail {
            target: thumb.target.clone(),
            kind: thumb.kind,
            label: thumb.label.clone(),
        });
    }

    for group in config.galleries_in(active) {
        items.push(ContentItem::GalleryTop {
            group: group.id.clone(),
            label: group.label.clone(),
        });
        if !controller.gallery().is_expanded(&group.id) {
            continue;
        }
        for (index, item) in group.items.iter().enumerate() {
            items.push(ContentItem::MiddleItem {
                group: group.id.clone(),
                index,
                label: item.label.clone(),
            });
        }
        items.push(ContentItem::ViewerPrev(group.id.clone()));
        items.push(ContentItem::Viewer(group.id.clone()));
        items.push(ContentItem::ViewerNext(group.id.clone()));
    }

    for set in config.image_sets_in(active) {
        for (index, image) in set.images.iter().enumerate() {
            items.push(ContentItem::Image {
                set: set.id.clone(),
                index,
                image: image.clone(),
            });
        }
    }

    if let Some(unit3) = config.unit3.as_ref().filter(|u| &u.section == active) {
        for panel in &unit3.panels {
            items.push(ContentItem::Unit3Link {
                panel: panel.id.clone(),
                label: panel.label.clone(),
            });
        }
        for link in &unit3.hub {
            items.push(ContentItem::HubLink {
                target: link.target.clone(),
                scroll: link.scroll.clone(),
                label: link.label.clone(),
            });
        }
    }

    items
}

/// 内容面板光标
#[derive(Debug, Default)]
pub struct PageCursor {
    pub selected: usize,
}

impl PageCursor {
    /// 回到页面顶部
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 列表变短后收回光标
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// 跳到第一个满足条件的项，没有则不动
    pub fn jump_to(&mut self, items: &[ContentItem], pred: impl Fn(&ContentItem) -> bool) -> bool {
        match items.iter().position(pred) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }
}
