//! Layout configuration stores.
//!
//! Two independent stores back the console's customization surface:
//!
//! - [`ViewLayoutStore`] tracks, per view, whether the widget sidebar is
//!   visible and which widget instances it holds (ordered, duplicates
//!   allowed).
//! - [`grid::DashboardGrid`] tracks the order and visibility of the five
//!   fixed dashboard sections.
//!
//! Both are plain in-memory state seeded from static defaults at startup.
//! Every operation is total: boundary conditions (removing an absent
//! widget, moving past either end of the grid) are no-ops that leave the
//! state unchanged, never errors.

pub mod grid;

use crate::{ViewId, WidgetKind};

/// Sidebar layout for a single view.
///
/// `widgets` is an ordered sequence, not a set: the same [`WidgetKind`]
/// may appear more than once, and the sequence order is the render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLayout {
    /// Whether the widget sidebar is shown for this view.
    pub sidebar_visible: bool,
    /// Mounted widget instances, in render order.
    widgets: Vec<WidgetKind>,
}

impl ViewLayout {
    fn new(sidebar_visible: bool, widgets: Vec<WidgetKind>) -> Self {
        Self {
            sidebar_visible,
            widgets,
        }
    }

    /// The mounted widget instances, in render order.
    pub fn widgets(&self) -> &[WidgetKind] {
        &self.widgets
    }
}

/// Per-view sidebar layout store.
///
/// Holds one [`ViewLayout`] per [`ViewId`], each fully independent:
/// mutating one view's layout never touches another's. Seeded from the
/// product defaults at construction.
#[derive(Debug, Clone)]
pub struct ViewLayoutStore {
    layouts: [ViewLayout; ViewId::ALL.len()],
}

impl ViewLayoutStore {
    /// Creates a store seeded with the default layout for every view.
    pub fn new() -> Self {
        Self {
            layouts: ViewId::ALL.map(default_layout),
        }
    }

    /// Appends `kind` to the end of `view`'s widget sequence.
    ///
    /// Duplicates are allowed: adding a kind that is already mounted
    /// creates a second instance.
    pub fn add_widget(&mut self, view: ViewId, kind: WidgetKind) {
        self.layouts[view.index()].widgets.push(kind);
        tracing::debug!(view = %view, widget = %kind, "widget added");
    }

    /// Removes the first occurrence of `kind` from `view`'s sequence.
    ///
    /// With duplicate instances mounted, only the earliest-inserted one
    /// is removed. Removing a kind that is not present is a no-op.
    pub fn remove_widget(&mut self, view: ViewId, kind: WidgetKind) {
        let widgets = &mut self.layouts[view.index()].widgets;
        if let Some(idx) = widgets.iter().position(|w| *w == kind) {
            widgets.remove(idx);
            tracing::debug!(view = %view, widget = %kind, "widget removed");
        }
    }

    /// Flips the sidebar visibility flag for `view` only.
    ///
    /// The widget sequence is untouched; hiding the sidebar does not
    /// unmount anything.
    pub fn toggle_sidebar(&mut self, view: ViewId) {
        let layout = &mut self.layouts[view.index()];
        layout.sidebar_visible = !layout.sidebar_visible;
    }

    /// Current widget sequence for `view`, in render order.
    pub fn widgets(&self, view: ViewId) -> &[WidgetKind] {
        &self.layouts[view.index()].widgets
    }

    /// Whether the sidebar is currently visible for `view`.
    pub fn sidebar_visible(&self, view: ViewId) -> bool {
        self.layouts[view.index()].sidebar_visible
    }

    /// Read-only snapshot of `view`'s full layout.
    pub fn layout(&self, view: ViewId) -> &ViewLayout {
        &self.layouts[view.index()]
    }
}

impl Default for ViewLayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The factory-default sidebar layout for a view.
fn default_layout(view: ViewId) -> ViewLayout {
    use WidgetKind::*;
    match view {
        ViewId::Dashboard => ViewLayout::new(true, vec![QuickActions, SystemLog, VoiceUplink]),
        ViewId::Agents => ViewLayout::new(true, vec![QuickActions, NetworkStatus, Clock]),
        ViewId::Tasks => ViewLayout::new(true, vec![StickyNotes, MiniCalendar]),
        ViewId::Growth => ViewLayout::new(true, vec![Clock, StickyNotes, MiniCalendar]),
        ViewId::Vault => ViewLayout::new(false, vec![QuickActions]),
        ViewId::Comms => ViewLayout::new(true, vec![NetworkStatus, SystemLog]),
        ViewId::Settings => ViewLayout::new(false, vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ViewId, WidgetKind};

    // -- Defaults --

    #[test]
    fn test_default_tasks_layout() {
        let store = ViewLayoutStore::new();
        assert_eq!(
            store.widgets(ViewId::Tasks),
            &[WidgetKind::StickyNotes, WidgetKind::MiniCalendar]
        );
        assert!(store.sidebar_visible(ViewId::Tasks));
    }

    #[test]
    fn test_default_settings_sidebar_hidden_and_empty() {
        let store = ViewLayoutStore::new();
        assert!(!store.sidebar_visible(ViewId::Settings));
        assert!(store.widgets(ViewId::Settings).is_empty());
    }

    #[test]
    fn test_default_vault_hidden_but_populated() {
        let store = ViewLayoutStore::new();
        assert!(!store.sidebar_visible(ViewId::Vault));
        assert_eq!(store.widgets(ViewId::Vault), &[WidgetKind::QuickActions]);
    }

    // -- add_widget --

    #[test]
    fn test_add_widget_appends_at_end() {
        let mut store = ViewLayoutStore::new();
        store.add_widget(ViewId::Tasks, WidgetKind::Clock);
        assert_eq!(
            store.widgets(ViewId::Tasks),
            &[
                WidgetKind::StickyNotes,
                WidgetKind::MiniCalendar,
                WidgetKind::Clock
            ]
        );
    }

    #[test]
    fn test_add_widget_increases_len_by_one() {
        let mut store = ViewLayoutStore::new();
        for view in ViewId::ALL {
            for kind in WidgetKind::ALL {
                let before = store.widgets(view).len();
                store.add_widget(view, kind);
                let after = store.widgets(view);
                assert_eq!(after.len(), before + 1);
                assert_eq!(*after.last().expect("just pushed"), kind);
            }
        }
    }

    #[test]
    fn test_add_widget_allows_duplicates() {
        let mut store = ViewLayoutStore::new();
        store.add_widget(ViewId::Growth, WidgetKind::Clock);
        // Growth already starts with a clock; now there are two.
        let clocks = store
            .widgets(ViewId::Growth)
            .iter()
            .filter(|w| **w == WidgetKind::Clock)
            .count();
        assert_eq!(clocks, 2);
    }

    #[test]
    fn test_add_widget_does_not_touch_other_views() {
        let mut store = ViewLayoutStore::new();
        let agents_before = store.widgets(ViewId::Agents).to_vec();
        store.add_widget(ViewId::Dashboard, WidgetKind::MiniCalendar);
        assert_eq!(store.widgets(ViewId::Agents), agents_before.as_slice());
    }

    // -- remove_widget --

    #[test]
    fn test_remove_widget_first_occurrence_only() {
        let mut store = ViewLayoutStore::new();
        // Growth default: [clock, sticky-notes, mini-calendar]; add a
        // second clock at the end, then remove "clock" once.
        store.add_widget(ViewId::Growth, WidgetKind::Clock);
        store.remove_widget(ViewId::Growth, WidgetKind::Clock);
        assert_eq!(
            store.widgets(ViewId::Growth),
            &[
                WidgetKind::StickyNotes,
                WidgetKind::MiniCalendar,
                WidgetKind::Clock
            ]
        );
    }

    #[test]
    fn test_remove_widget_preserves_relative_order() {
        let mut store = ViewLayoutStore::new();
        store.remove_widget(ViewId::Dashboard, WidgetKind::SystemLog);
        assert_eq!(
            store.widgets(ViewId::Dashboard),
            &[WidgetKind::QuickActions, WidgetKind::VoiceUplink]
        );
    }

    #[test]
    fn test_remove_widget_absent_is_noop() {
        let mut store = ViewLayoutStore::new();
        let before = store.widgets(ViewId::Tasks).to_vec();
        store.remove_widget(ViewId::Tasks, WidgetKind::NetworkStatus);
        assert_eq!(store.widgets(ViewId::Tasks), before.as_slice());
    }

    #[test]
    fn test_remove_widget_decrements_count_by_one() {
        let mut store = ViewLayoutStore::new();
        store.add_widget(ViewId::Comms, WidgetKind::SystemLog);
        store.add_widget(ViewId::Comms, WidgetKind::SystemLog);
        // Three system-log instances now mounted.
        let count = |s: &ViewLayoutStore| {
            s.widgets(ViewId::Comms)
                .iter()
                .filter(|w| **w == WidgetKind::SystemLog)
                .count()
        };
        assert_eq!(count(&store), 3);
        store.remove_widget(ViewId::Comms, WidgetKind::SystemLog);
        assert_eq!(count(&store), 2);
    }

    #[test]
    fn test_tasks_add_remove_scenario() {
        // add clock, remove sticky-notes twice: the second removal must
        // be a no-op that leaves [mini-calendar, clock].
        let mut store = ViewLayoutStore::new();
        store.add_widget(ViewId::Tasks, WidgetKind::Clock);
        store.remove_widget(ViewId::Tasks, WidgetKind::StickyNotes);
        assert_eq!(
            store.widgets(ViewId::Tasks),
            &[WidgetKind::MiniCalendar, WidgetKind::Clock]
        );
        store.remove_widget(ViewId::Tasks, WidgetKind::StickyNotes);
        assert_eq!(
            store.widgets(ViewId::Tasks),
            &[WidgetKind::MiniCalendar, WidgetKind::Clock]
        );
    }

    #[test]
    fn test_remove_can_empty_a_view() {
        let mut store = ViewLayoutStore::new();
        store.remove_widget(ViewId::Vault, WidgetKind::QuickActions);
        assert!(store.widgets(ViewId::Vault).is_empty());
    }

    // -- toggle_sidebar --

    #[test]
    fn test_toggle_sidebar_flips_only_target_view() {
        let mut store = ViewLayoutStore::new();
        store.toggle_sidebar(ViewId::Dashboard);
        assert!(!store.sidebar_visible(ViewId::Dashboard));
        assert!(store.sidebar_visible(ViewId::Agents));
        store.toggle_sidebar(ViewId::Dashboard);
        assert!(store.sidebar_visible(ViewId::Dashboard));
    }

    #[test]
    fn test_toggle_sidebar_keeps_widgets() {
        let mut store = ViewLayoutStore::new();
        let before = store.widgets(ViewId::Comms).to_vec();
        store.toggle_sidebar(ViewId::Comms);
        assert_eq!(store.widgets(ViewId::Comms), before.as_slice());
    }

    // -- Per-view isolation --

    #[test]
    fn test_views_are_fully_independent() {
        let mut store = ViewLayoutStore::new();
        let agents_before = store.layout(ViewId::Agents).clone();

        store.add_widget(ViewId::Dashboard, WidgetKind::Clock);
        store.remove_widget(ViewId::Dashboard, WidgetKind::QuickActions);
        store.toggle_sidebar(ViewId::Dashboard);

        assert_eq!(*store.layout(ViewId::Agents), agents_before);
    }

    #[test]
    fn test_removing_kind_from_one_view_keeps_it_elsewhere() {
        let mut store = ViewLayoutStore::new();
        store.remove_widget(ViewId::Dashboard, WidgetKind::QuickActions);
        // quick-actions remains mounted on agents and vault.
        assert!(store
            .widgets(ViewId::Agents)
            .contains(&WidgetKind::QuickActions));
        assert!(store
            .widgets(ViewId::Vault)
            .contains(&WidgetKind::QuickActions));
    }
}
