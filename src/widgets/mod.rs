//! Widget system for the console sidebar.
//!
//! This module defines the [`Widget`] trait implemented by every sidebar
//! widget body and the [`WidgetRegistry`] holding the static catalog.
//!
//! # Architecture
//!
//! Widgets are small, independently titled content panels. Each widget
//! receives a [`WidgetContext`] with the latest telemetry snapshot and
//! renders its body as a ratatui [`Text`]; the sidebar renderer wraps
//! that body in a titled frame using the registry metadata.
//!
//! The registry is a flat dispatch table over the closed [`WidgetKind`]
//! enum: every variant resolves to metadata and a factory, so lookups
//! are total. Which instances are mounted where is tracked separately by
//! the [`crate::layout::ViewLayoutStore`]; the registry itself owns no
//! mutable state.

pub mod clock;
pub mod mini_calendar;
pub mod network_status;
pub mod quick_actions;
pub mod sticky_notes;
pub mod system_log;
pub mod voice_uplink;

use crate::data::DashboardSnapshot;
use crate::WidgetKind;
use chrono::{DateTime, Local};
use ratatui::text::Text;

/// Shared state handed to widgets at render time.
pub struct WidgetContext<'a> {
    /// Latest telemetry snapshot.
    pub snapshot: &'a DashboardSnapshot,
    /// Wall-clock time of this render pass.
    pub now: DateTime<Local>,
    /// Count of ticks since startup, for lightweight animation.
    pub tick: u64,
}

impl<'a> WidgetContext<'a> {
    /// Creates a context for the given snapshot at the current time.
    pub fn new(snapshot: &'a DashboardSnapshot, tick: u64) -> Self {
        Self {
            snapshot,
            now: Local::now(),
            tick,
        }
    }
}

/// Trait for sidebar widget bodies.
///
/// Each widget renders a multi-line [`Text`] given a width constraint
/// and shared context. Widgets must be `Send + Sync` so instances can be
/// held across await points in the event loop.
pub trait Widget: Send + Sync {
    /// The kind this instance renders.
    fn kind(&self) -> WidgetKind;

    /// Render the widget body.
    ///
    /// # Arguments
    ///
    /// * `width` - Available horizontal space in columns.
    /// * `context` - Shared application state for rendering.
    fn render(&self, width: u16, context: &WidgetContext) -> Text<'static>;

    /// Preferred body height in rows, used by the sidebar to size the
    /// widget's frame.
    fn height(&self) -> u16;
}

/// Static display metadata for a widget kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct WidgetInfo {
    /// The kind this entry describes.
    pub kind: WidgetKind,
    /// Frame title.
    pub title: &'static str,
    /// Single-character glyph shown before the title.
    pub glyph: &'static str,
    /// One-line description shown in the add-widget picker.
    pub description: &'static str,
}

/// Factory function type for creating widget instances.
pub type WidgetFactory = fn() -> Box<dyn Widget>;

/// Static catalog mapping every [`WidgetKind`] to its metadata and
/// factory.
///
/// Built once at startup and never mutated. `available()` drives the
/// add-widget picker and deliberately does NOT filter out kinds already
/// mounted in the current view: duplicates stay selectable.
pub struct WidgetRegistry {
    entries: [(WidgetInfo, WidgetFactory); WidgetKind::ALL.len()],
}

impl WidgetRegistry {
    /// Creates the registry with all built-in widgets.
    pub fn new() -> Self {
        Self {
            entries: WidgetKind::ALL.map(|kind| (info_for(kind), factory_for(kind))),
        }
    }

    /// Display metadata for `kind`.
    pub fn info(&self, kind: WidgetKind) -> &WidgetInfo {
        &self.entries[kind.index()].0
    }

    /// Creates a fresh widget instance for `kind`.
    pub fn create(&self, kind: WidgetKind) -> Box<dyn Widget> {
        (self.entries[kind.index()].1)()
    }

    /// All catalog entries, in [`WidgetKind::ALL`] order.
    pub fn available(&self) -> impl Iterator<Item = &WidgetInfo> {
        self.entries.iter().map(|(info, _)| info)
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Display metadata for each widget kind.
fn info_for(kind: WidgetKind) -> WidgetInfo {
    let (title, glyph, description) = match kind {
        WidgetKind::QuickActions => ("QUICK ACTIONS", "⚡", "Essential system controls"),
        WidgetKind::SystemLog => ("SYSTEM LOG", ">", "Live kernel events"),
        WidgetKind::VoiceUplink => ("VOICE UPLINK", "◉", "Active listening state"),
        WidgetKind::StickyNotes => ("FIELD NOTES", "✎", "Scratchpad"),
        WidgetKind::Clock => ("LOCAL TIME", "◷", "Digital chronometer"),
        WidgetKind::MiniCalendar => ("CALENDAR", "▦", "Month view"),
        WidgetKind::NetworkStatus => ("NETWORK STATUS", "∿", "Ping & latency"),
    };
    WidgetInfo {
        kind,
        title,
        glyph,
        description,
    }
}

/// Factory for each widget kind.
fn factory_for(kind: WidgetKind) -> WidgetFactory {
    match kind {
        WidgetKind::QuickActions => || Box::new(quick_actions::QuickActionsWidget::new()),
        WidgetKind::SystemLog => || Box::new(system_log::SystemLogWidget::new()),
        WidgetKind::VoiceUplink => || Box::new(voice_uplink::VoiceUplinkWidget::new()),
        WidgetKind::StickyNotes => || Box::new(sticky_notes::StickyNotesWidget::new()),
        WidgetKind::Clock => || Box::new(clock::ClockWidget::new()),
        WidgetKind::MiniCalendar => || Box::new(mini_calendar::MiniCalendarWidget::new()),
        WidgetKind::NetworkStatus => || Box::new(network_status::NetworkStatusWidget::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::feed::MockFeed;

    // -- WidgetRegistry --

    #[test]
    fn test_registry_resolves_every_kind() {
        let registry = WidgetRegistry::new();
        for kind in WidgetKind::ALL {
            let widget = registry.create(kind);
            assert_eq!(widget.kind(), kind);
            assert_eq!(registry.info(kind).kind, kind);
        }
    }

    #[test]
    fn test_registry_available_order_is_catalog_order() {
        let registry = WidgetRegistry::new();
        let kinds: Vec<WidgetKind> = registry.available().map(|i| i.kind).collect();
        assert_eq!(kinds, WidgetKind::ALL.to_vec());
    }

    #[test]
    fn test_registry_metadata_nonempty() {
        let registry = WidgetRegistry::new();
        for info in registry.available() {
            assert!(!info.title.is_empty());
            assert!(!info.glyph.is_empty());
            assert!(!info.description.is_empty());
        }
    }

    #[test]
    fn test_registry_titles_match_catalog() {
        let registry = WidgetRegistry::new();
        assert_eq!(registry.info(WidgetKind::StickyNotes).title, "FIELD NOTES");
        assert_eq!(registry.info(WidgetKind::Clock).title, "LOCAL TIME");
        assert_eq!(
            registry.info(WidgetKind::QuickActions).title,
            "QUICK ACTIONS"
        );
    }

    #[test]
    fn test_registry_creates_independent_instances() {
        let registry = WidgetRegistry::new();
        let a = registry.create(WidgetKind::Clock);
        let b = registry.create(WidgetKind::Clock);
        assert_eq!(a.kind(), b.kind());
    }

    // -- Widget trait --

    #[test]
    fn test_every_widget_renders_nonempty_body() {
        let registry = WidgetRegistry::new();
        let feed = MockFeed::with_seed(1);
        let ctx = WidgetContext::new(feed.snapshot(), 0);
        for kind in WidgetKind::ALL {
            let widget = registry.create(kind);
            let text = widget.render(34, &ctx);
            assert!(
                !text.lines.is_empty(),
                "{kind} rendered an empty body"
            );
            assert!(widget.height() > 0);
        }
    }

    #[test]
    fn test_widget_trait_object_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Widget>();
    }
}
