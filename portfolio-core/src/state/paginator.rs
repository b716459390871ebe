//! Sub-group paging (Back / Next, wrapping at both ends)

use crate::types::{SectionId, SubGroup};

/// Sub-group paginator
#[derive(Debug, Clone, Default)]
pub struct SubGroupPaginator {
    groups: Vec<SubGroup>,
}

impl SubGroupPaginator {
    pub fn new(groups: Vec<SubGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[SubGroup] {
        &self.groups
    }

    /// Group containing the Section
    pub fn group_of(&self, id: &SectionId) -> Option<&SubGroup> {
        self.groups.iter().find(|g| g.members.contains(id))
    }

    /// Whether the sub-navigation bar should show
    pub fn bar_visible(&self, active: Option<&SectionId>) -> bool {
        active.is_some_and(|id| self.group_of(id).is_some())
    }

    /// Section at `(i + delta + n) mod n`
    ///
    /// Returns `None` when no Section is active or it belongs to no group.
    pub fn target(&self, active: Option<&SectionId>, delta: isize) -> Option<&SectionId> {
        let active = active?;
        let group = self.group_of(active)?;
        let len = isize::try_from(group.members.len()).ok()?;
        let idx = isize::try_from(group.members.iter().position(|m| m == active)?).ok()?;
        let next = usize::try_from((idx + delta).rem_euclid(len)).ok()?;
        group.members.get(next)
    }

    /// Position `(index, len)` of the current Section within its group
    pub fn position(&self, active: Option<&SectionId>) -> Option<(usize, usize)> {
        let active = active?;
        let group = self.group_of(active)?;
        let idx = group.members.iter().position(|m| m == active)?;
        Some((idx, group.members.len()))
    }
}
