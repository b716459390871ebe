//! Section navigation state
//!
//! At most one Section is active at a time. It is held as an `Option<SectionId>`,
//! so exclusivity holds by construction rather than by clearing every section
//! before adding one.

use crate::error::{CoreError, CoreResult};
use crate::types::{SectionId, SiteConfig};

/// Section navigator
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    sections: Vec<SectionId>,
    nav_targets: Vec<SectionId>,
    prints: Option<SectionId>,
    active: Option<SectionId>,
    active_nav: Option<usize>,
    prints_active: bool,
}

impl SectionNavigator {
    /// Create from the initial markup: the initial Section and its nav entry start active
    pub fn new(config: &SiteConfig) -> Self {
        let mut navigator = Self {
            sections: config.sections.iter().map(|s| s.id.clone()).collect(),
            nav_targets: config.nav.iter().map(|n| n.target.clone()).collect(),
            prints: config.prints.clone(),
            active: None,
            active_nav: None,
            prints_active: false,
        };
        let initial = config.initial().clone();
        let nav = navigator.nav_index_of(&initial);
        if let Err(e) = navigator.activate(&initial, nav) {
            e.log("activate initial section");
        }
        navigator
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn nav_len(&self) -> usize {
        self.nav_targets.len()
    }

    pub fn nav_target(&self, index: usize) -> Option<&SectionId> {
        self.nav_targets.get(index)
    }

    /// First nav entry pointing at the Section
    pub fn nav_index_of(&self, target: &SectionId) -> Option<usize> {
        self.nav_targets.iter().position(|t| t == target)
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn active_nav(&self) -> Option<usize> {
        self.active_nav
    }

    pub fn is_active(&self, id: &SectionId) -> bool {
        self.active.as_ref() == Some(id)
    }

    pub fn is_prints_active(&self) -> bool {
        self.prints_active
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.sections.contains(id)
    }

    /// Activate a Section and the given nav entry, syncing the prints indicator
    ///
    /// An unknown target leaves no Section active (a caller error) and returns
    /// `SectionNotFound`.
    pub fn activate(&mut self, target: &SectionId, nav: Option<usize>) -> CoreResult<()> {
        self.active_nav = nav.filter(|i| *i < self.nav_targets.len());
        self.prints_active = self.prints.as_ref() == Some(target);
        self.reveal(target)
    }

    /// Switch the Section only, leaving the nav entry and prints indicator alone
    pub fn reveal(&mut self, target: &SectionId) -> CoreResult<()> {
        if self.contains(target) {
            self.active = Some(target.clone());
            Ok(())
        } else {
            self.active = None;
            Err(CoreError::SectionNotFound(target.to_string()))
        }
    }
}
