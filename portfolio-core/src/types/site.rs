//! Site description (declarative configuration table)
//!
//! Built once at startup; afterwards the controller only queries this table and
//! never reads page markup again. The browser builds it by scanning the DOM, the
//! terminal preview loads it from a JSON file.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{ImageRef, SectionId};
use crate::error::{CoreError, CoreResult};

/// Bundled demo site
const DEMO_SITE: &str = include_str!("../../assets/demo-site.json");

fn default_landing() -> SectionId {
    SectionId::new("landing")
}

fn default_prints() -> Option<SectionId> {
    Some(SectionId::new("prints-zine"))
}

/// Section entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    pub id: SectionId,
    #[serde(default)]
    pub title: String,
}

/// Sidebar navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub target: SectionId,
    #[serde(default)]
    pub label: String,
}

/// Sub-group: a sequence of Sections paged through with prev/next (wrapping)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubGroup {
    pub name: String,
    pub members: Vec<SectionId>,
}

impl SubGroup {
    pub fn new(name: impl Into<String>, members: &[&str]) -> Self {
        Self {
            name: name.into(),
            members: members.iter().map(|m| SectionId::new(*m)).collect(),
        }
    }
}

/// Middle item of a three-tier gallery (thumbnail plus full image)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiddleItemConfig {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
}

/// Three-tier gallery group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryGroupConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionId>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub items: Vec<MiddleItemConfig>,
}

/// Sibling image set for the lightbox (a gallery-like container on the page)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSetConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionId>,
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

/// What a thumbnail jump does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThumbnailKind {
    /// Unit 1/2 sub-page thumbnail: full activate flow
    #[default]
    Unit,
    /// Series gallery thumbnail: switches the Section only
    Series,
}

/// Sub-page thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionId>,
    pub target: SectionId,
    #[serde(default)]
    pub kind: ThumbnailKind,
    #[serde(default)]
    pub label: String,
}

/// Unit-3 panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

/// Gallery Hub deep link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubLink {
    pub target: SectionId,
    /// Anchor selector scrolled to after arriving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll: Option<String>,
    #[serde(default)]
    pub label: String,
}

/// Unit-3 sub-navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit3Config {
    pub section: SectionId,
    pub panels: Vec<PanelConfig>,
    #[serde(default)]
    pub hub: Vec<HubLink>,
}

/// Site description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub sections: Vec<SectionConfig>,
    #[serde(default)]
    pub nav: Vec<NavEntry>,
    #[serde(default = "default_landing")]
    pub landing: SectionId,
    #[serde(default = "default_prints")]
    pub prints: Option<SectionId>,
    /// Section marked active in the initial markup, defaults to landing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_section: Option<SectionId>,
    /// When omitted, the Unit1 / Gallery / Unit2 groups restricted to declared Sections
    #[serde(default = "SiteConfig::default_sub_groups")]
    pub sub_groups: Vec<SubGroup>,
    #[serde(default)]
    pub galleries: Vec<GalleryGroupConfig>,
    #[serde(default)]
    pub image_sets: Vec<ImageSetConfig>,
    #[serde(default)]
    pub thumbnails: Vec<ThumbnailLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit3: Option<Unit3Config>,
}

impl SiteConfig {
    /// The site's three default sub-groups
    pub fn default_sub_groups() -> Vec<SubGroup> {
        vec![
            SubGroup::new("Unit1", &["sectionA", "sectionB", "sectionC", "sectionD"]),
            SubGroup::new(
                "Gallery",
                &["Gallery-series-1", "Gallery-series-2", "Gallery-series-3"],
            ),
            SubGroup::new("Unit2", &["sectionE", "sectionF", "sectionG", "sectionH"]),
        ]
    }

    /// Parse from JSON and validate
    ///
    /// An omitted `subGroups` falls back to the default groups, keeping only
    /// members this site declares.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let explicit_groups = value.get("subGroups").is_some();
        let mut config: Self = serde_json::from_value(value)?;
        if !explicit_groups {
            let known: HashSet<SectionId> =
                config.sections.iter().map(|s| s.id.clone()).collect();
            let defaults = std::mem::take(&mut config.sub_groups);
            config.sub_groups = retain_known_members(defaults, &known);
        }
        config.validate()?;
        Ok(config)
    }

    /// Bundled demo site (terminal preview and tests)
    pub fn demo() -> CoreResult<Self> {
        Self::from_json_str(DEMO_SITE)
    }

    /// Serialize to JSON (exporting scan results)
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn has_section(&self, id: &SectionId) -> bool {
        self.sections.iter().any(|s| &s.id == id)
    }

    pub fn section(&self, id: &SectionId) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Effective initial Section
    pub fn initial(&self) -> &SectionId {
        self.initial_section.as_ref().unwrap_or(&self.landing)
    }

    pub fn galleries_in<'a>(
        &'a self,
        section: &'a SectionId,
    ) -> impl Iterator<Item = &'a GalleryGroupConfig> + 'a {
        self.galleries
            .iter()
            .filter(move |g| g.section.as_ref() == Some(section))
    }

    pub fn image_sets_in<'a>(
        &'a self,
        section: &'a SectionId,
    ) -> impl Iterator<Item = &'a ImageSetConfig> + 'a {
        self.image_sets
            .iter()
            .filter(move |s| s.section.as_ref() == Some(section))
    }

    pub fn thumbnails_in<'a>(
        &'a self,
        section: &'a SectionId,
    ) -> impl Iterator<Item = &'a ThumbnailLink> + 'a {
        self.thumbnails
            .iter()
            .filter(move |t| t.section.as_ref() == Some(section))
    }

    pub fn image_set(&self, id: &str) -> Option<&ImageSetConfig> {
        self.image_sets.iter().find(|s| s.id == id)
    }

    /// Check the table for internal consistency
    pub fn validate(&self) -> CoreResult<()> {
        if self.sections.is_empty() {
            return Err(CoreError::InvalidConfig("no sections declared".to_string()));
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(&section.id) {
                return Err(CoreError::InvalidConfig(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }

        let check = |id: &SectionId, what: &str| -> CoreResult<()> {
            if seen.contains(id) {
                Ok(())
            } else {
                Err(CoreError::InvalidConfig(format!(
                    "{what} refers to unknown section '{id}'"
                )))
            }
        };

        check(&self.landing, "landing")?;
        check(self.initial(), "initialSection")?;
        for entry in &self.nav {
            check(&entry.target, "nav entry")?;
        }
        for group in &self.sub_groups {
            if group.members.is_empty() {
                return Err(CoreError::InvalidConfig(format!(
                    "sub-group '{}' is empty",
                    group.name
                )));
            }
            for member in &group.members {
                check(member, &format!("sub-group '{}'", group.name))?;
            }
        }
        for thumb in &self.thumbnails {
            check(&thumb.target, "thumbnail")?;
        }

        let mut gallery_ids = HashSet::new();
        for gallery in &self.galleries {
            if !gallery_ids.insert(gallery.id.as_str()) {
                return Err(CoreError::InvalidConfig(format!(
                    "duplicate gallery group id '{}'",
                    gallery.id
                )));
            }
        }

        let mut set_ids = HashSet::new();
        for set in &self.image_sets {
            if !set_ids.insert(set.id.as_str()) {
                return Err(CoreError::InvalidConfig(format!(
                    "duplicate image set id '{}'",
                    set.id
                )));
            }
        }

        if let Some(unit3) = &self.unit3 {
            check(&unit3.section, "unit3")?;
            if unit3.panels.is_empty() {
                return Err(CoreError::InvalidConfig(
                    "unit3 declares no panels".to_string(),
                ));
            }
            for link in &unit3.hub {
                check(&link.target, "hub link")?;
            }
        }

        Ok(())
    }
}

/// Keep only known Sections; groups left without members are dropped
pub fn retain_known_members(groups: Vec<SubGroup>, known: &HashSet<SectionId>) -> Vec<SubGroup> {
    groups
        .into_iter()
        .filter_map(|mut group| {
            group.members.retain(|m| known.contains(m));
            (!group.members.is_empty()).then_some(group)
        })
        .collect()
}
