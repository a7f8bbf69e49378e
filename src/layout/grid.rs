//! Dashboard section grid store.
//!
//! The dashboard view is composed of five fixed sections rendered
//! top-to-bottom. The grid store owns their order and per-section
//! visibility; reordering is restricted to adjacent swaps driven by
//! up/down controls, so no invalid arrangement is reachable.
//!
//! Edit mode is a presentation concern owned by the dashboard view, not
//! by this store: outside edit mode hidden sections are omitted from the
//! layout entirely, while in edit mode they render dimmed so the user
//! can re-enable them.

use crate::{Direction, SectionId};

/// One entry of the dashboard grid: a section id and its visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSection {
    /// Which fixed section this entry positions.
    pub id: SectionId,
    /// Whether the section participates in the non-edit layout.
    pub visible: bool,
}

/// Ordered store of the five dashboard sections.
///
/// Invariant: exactly one entry per [`SectionId`] at all times; entries
/// are only ever reordered or toggled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardGrid {
    sections: Vec<GridSection>,
}

impl DashboardGrid {
    /// Creates the grid in its default order with every section visible.
    pub fn new() -> Self {
        Self {
            sections: SectionId::ALL
                .iter()
                .map(|id| GridSection {
                    id: *id,
                    visible: true,
                })
                .collect(),
        }
    }

    /// Full ordered sequence, including hidden sections.
    pub fn sections(&self) -> &[GridSection] {
        &self.sections
    }

    /// Current index of `id` in the sequence.
    pub fn position(&self, id: SectionId) -> usize {
        self.sections
            .iter()
            .position(|s| s.id == id)
            .expect("every section id has exactly one entry")
    }

    /// Flips the visibility flag of `id`. Order is unchanged.
    pub fn toggle_visible(&mut self, id: SectionId) {
        let idx = self.position(id);
        self.sections[idx].visible = !self.sections[idx].visible;
        tracing::debug!(
            section = %id,
            visible = self.sections[idx].visible,
            "section visibility toggled"
        );
    }

    /// Swaps `id` with its immediate neighbor in `direction`.
    ///
    /// Moving the first section up or the last section down is a no-op,
    /// not an error: the up/down controls are always safe to press.
    pub fn move_section(&mut self, id: SectionId, direction: Direction) {
        let idx = self.position(id);
        match direction {
            Direction::Up => {
                if idx > 0 {
                    self.sections.swap(idx, idx - 1);
                }
            }
            Direction::Down => {
                if idx + 1 < self.sections.len() {
                    self.sections.swap(idx, idx + 1);
                }
            }
        }
    }

    /// Number of sections currently visible.
    pub fn visible_count(&self) -> usize {
        self.sections.iter().filter(|s| s.visible).count()
    }
}

impl Default for DashboardGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(grid: &DashboardGrid) -> Vec<SectionId> {
        grid.sections().iter().map(|s| s.id).collect()
    }

    // -- Defaults --

    #[test]
    fn test_default_order_all_visible() {
        let grid = DashboardGrid::new();
        assert_eq!(order(&grid), SectionId::ALL.to_vec());
        assert_eq!(grid.visible_count(), 5);
    }

    #[test]
    fn test_one_entry_per_section() {
        let grid = DashboardGrid::new();
        for id in SectionId::ALL {
            let count = grid.sections().iter().filter(|s| s.id == id).count();
            assert_eq!(count, 1, "expected exactly one entry for {id}");
        }
    }

    // -- move_section --

    #[test]
    fn test_move_up_swaps_with_previous() {
        let mut grid = DashboardGrid::new();
        grid.move_section(SectionId::VitalSigns, Direction::Up);
        assert_eq!(
            order(&grid),
            vec![
                SectionId::Metrics,
                SectionId::VitalSigns,
                SectionId::Tokens,
                SectionId::Models,
                SectionId::Agents,
            ]
        );
    }

    #[test]
    fn test_move_first_up_is_noop() {
        let mut grid = DashboardGrid::new();
        let before = grid.clone();
        grid.move_section(SectionId::Metrics, Direction::Up);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_move_last_down_is_noop() {
        let mut grid = DashboardGrid::new();
        let before = grid.clone();
        grid.move_section(SectionId::Agents, Direction::Down);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_move_down_then_up_round_trips() {
        let mut grid = DashboardGrid::new();
        let before = grid.clone();
        grid.move_section(SectionId::Tokens, Direction::Down);
        assert_ne!(grid, before);
        grid.move_section(SectionId::Tokens, Direction::Up);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_move_preserves_visibility_flags() {
        let mut grid = DashboardGrid::new();
        grid.toggle_visible(SectionId::Models);
        grid.move_section(SectionId::Models, Direction::Up);
        let moved = grid.sections()[grid.position(SectionId::Models)];
        assert!(!moved.visible);
        assert_eq!(grid.visible_count(), 4);
    }

    #[test]
    fn test_section_can_walk_to_front() {
        let mut grid = DashboardGrid::new();
        for _ in 0..4 {
            grid.move_section(SectionId::Agents, Direction::Up);
        }
        assert_eq!(grid.position(SectionId::Agents), 0);
        // One more press stays put.
        grid.move_section(SectionId::Agents, Direction::Up);
        assert_eq!(grid.position(SectionId::Agents), 0);
    }

    // -- toggle_visible --

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut grid = DashboardGrid::new();
        let before = grid.clone();
        grid.toggle_visible(SectionId::Tokens);
        assert!(!grid.sections()[grid.position(SectionId::Tokens)].visible);
        grid.toggle_visible(SectionId::Tokens);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_toggle_leaves_order_and_other_flags_alone() {
        let mut grid = DashboardGrid::new();
        grid.toggle_visible(SectionId::Tokens);
        assert_eq!(order(&grid), SectionId::ALL.to_vec());
        for section in grid.sections() {
            if section.id == SectionId::Tokens {
                assert!(!section.visible);
            } else {
                assert!(section.visible);
            }
        }
    }

    // -- Combined scenario --

    #[test]
    fn test_move_then_toggle_scenario() {
        let mut grid = DashboardGrid::new();
        grid.move_section(SectionId::VitalSigns, Direction::Up);
        grid.toggle_visible(SectionId::Tokens);
        assert_eq!(
            order(&grid),
            vec![
                SectionId::Metrics,
                SectionId::VitalSigns,
                SectionId::Tokens,
                SectionId::Models,
                SectionId::Agents,
            ]
        );
        assert!(!grid.sections()[2].visible);
        assert_eq!(grid.visible_count(), 4);
    }
}
