//! Unit-3 sub-navigation state: panel switching and the sticky copy

use crate::error::{CoreError, CoreResult};
use crate::types::{SectionId, Unit3Config};

/// Sticky sub-navigation
///
/// Created the first time it is needed, then only shown or hidden, never destroyed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StickyNav {
    pub created: bool,
    pub shown: bool,
}

/// Unit-3 sub-navigation
#[derive(Debug, Clone)]
pub struct Unit3Subnav {
    section: SectionId,
    panels: Vec<String>,
    visible: Option<String>,
    sticky: StickyNav,
}

impl Unit3Subnav {
    pub fn new(config: &Unit3Config) -> Self {
        Self {
            section: config.section.clone(),
            panels: config.panels.iter().map(|p| p.id.clone()).collect(),
            visible: None,
            sticky: StickyNav::default(),
        }
    }

    pub fn section(&self) -> &SectionId {
        &self.section
    }

    pub fn panels(&self) -> &[String] {
        &self.panels
    }

    pub fn visible(&self) -> Option<&str> {
        self.visible.as_deref()
    }

    pub fn sticky(&self) -> StickyNav {
        self.sticky
    }

    pub fn has_panel(&self, id: &str) -> bool {
        self.panels.iter().any(|p| p == id)
    }

    /// Initialize: show the panel named by the fragment if known, else the first panel
    pub fn init(&mut self, fragment: Option<&str>) -> &str {
        let initial = fragment
            .filter(|f| self.has_panel(f))
            .map(str::to_string)
            .or_else(|| self.panels.first().cloned());
        self.visible = initial;
        self.visible.as_deref().unwrap_or_default()
    }

    /// Show only the target panel
    pub fn show_panel(&mut self, id: &str) -> CoreResult<()> {
        if !self.has_panel(id) {
            return Err(CoreError::PanelNotFound(id.to_string()));
        }
        self.visible = Some(id.to_string());
        Ok(())
    }

    /// Show the sticky navigation, creating it on first use; returns whether it was created
    pub fn enable_sticky(&mut self) -> bool {
        let created_now = !self.sticky.created;
        self.sticky.created = true;
        self.sticky.shown = true;
        created_now
    }

    /// Hide the sticky navigation (the copy is kept)
    pub fn disable_sticky(&mut self) {
        self.sticky.shown = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PanelConfig;

    fn subnav() -> Unit3Subnav {
        Unit3Subnav::new(&Unit3Config {
            section: SectionId::new("Unit3"),
            panels: ["u3-Brief", "u3-Research", "u3-Gallery"]
                .iter()
                .map(|id| PanelConfig {
                    id: (*id).to_string(),
                    label: String::new(),
                })
                .collect(),
            hub: Vec::new(),
        })
    }

    #[test]
    fn init_uses_matching_fragment() {
        let mut s = subnav();
        assert_eq!(s.init(Some("u3-Gallery")), "u3-Gallery");
    }

    #[test]
    fn init_falls_back_to_first_panel() {
        let mut s = subnav();
        assert_eq!(s.init(Some("sectionA")), "u3-Brief");
        assert_eq!(s.init(None), "u3-Brief");
    }

    #[test]
    fn unknown_panel_keeps_current() {
        let mut s = subnav();
        s.init(None);
        assert!(s.show_panel("u3-Nope").is_err());
        assert_eq!(s.visible(), Some("u3-Brief"));
    }

    #[test]
    fn sticky_created_once_then_toggled() {
        let mut s = subnav();
        assert!(s.enable_sticky());
        s.disable_sticky();
        assert_eq!(s.sticky(), StickyNav { created: true, shown: false });
        assert!(!s.enable_sticky());
        assert!(s.sticky().shown);
    }
}
