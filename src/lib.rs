//! Mission Console library
//!
//! This crate provides the state stores and rendering for a terminal
//! "mission control" console: seven navigable views over a synthetic
//! telemetry feed, a configurable per-view widget sidebar, and a
//! reorderable dashboard grid.
//!
//! All telemetry is generated in-process; there is no backend and no
//! persistence. Layout configuration lives in memory for the lifetime of
//! the session and resets on restart.

use std::fmt;
use std::str::FromStr;

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Synthetic telemetry snapshot types and the mock data feed.
pub mod data;

/// Layout configuration stores: per-view sidebar layouts and the
/// dashboard section grid.
pub mod layout;

/// Logging initialization for the `tracing` subscriber.
pub mod logging;

/// Notification toast center.
pub mod notify;

/// TUI module providing the terminal user interface for the console.
pub mod tui;

/// Widget system: registry, metadata, and the widget bodies.
pub mod widgets;

/// Identifier for a top-level screen the user can navigate to.
///
/// Closed set; every view owns an independent sidebar layout in the
/// [`layout::ViewLayoutStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    /// Command dashboard with the reorderable section grid.
    Dashboard,
    /// Agent roster and mission queue.
    Agents,
    /// Mission protocol board.
    Tasks,
    /// Content strategy calendar.
    Growth,
    /// File vault with preview.
    Vault,
    /// Secure comms channel.
    Comms,
    /// Console settings.
    Settings,
}

impl ViewId {
    /// All views in navigation order. Number keys `1`-`7` map onto this.
    pub const ALL: [ViewId; 7] = [
        ViewId::Dashboard,
        ViewId::Agents,
        ViewId::Tasks,
        ViewId::Growth,
        ViewId::Vault,
        ViewId::Comms,
        ViewId::Settings,
    ];

    /// Stable kebab-case identifier.
    pub fn id(self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Agents => "agents",
            ViewId::Tasks => "tasks",
            ViewId::Growth => "growth",
            ViewId::Vault => "vault",
            ViewId::Comms => "comms",
            ViewId::Settings => "settings",
        }
    }

    /// Display title shown in the navigation header.
    pub fn title(self) -> &'static str {
        match self {
            ViewId::Dashboard => "COMMAND DASHBOARD",
            ViewId::Agents => "NEURAL GRID",
            ViewId::Tasks => "MISSION PROTOCOLS",
            ViewId::Growth => "CONTENT STRATEGY",
            ViewId::Vault => "DATA VAULT",
            ViewId::Comms => "SECURE COMMS",
            ViewId::Settings => "SETTINGS",
        }
    }

    /// Position of this view in [`ViewId::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|v| *v == self)
            .expect("every view is listed in ALL")
    }

    /// Next view in navigation order, wrapping at the end.
    pub fn next(self) -> ViewId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous view in navigation order, wrapping at the start.
    pub fn previous(self) -> ViewId {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Error type for parsing a [`ViewId`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseViewError(pub String);

impl fmt::Display for ParseViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view: {}", self.0)
    }
}

impl std::error::Error for ParseViewError {}

impl FromStr for ViewId {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .iter()
            .copied()
            .find(|v| v.id() == s.to_lowercase())
            .ok_or_else(|| ParseViewError(s.to_string()))
    }
}

/// Identifier for a widget kind attachable to a view's sidebar.
///
/// Closed set. A kind may be mounted multiple times in the same sidebar;
/// instances are distinguished only by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    /// Essential system controls.
    QuickActions,
    /// Live kernel event feed.
    SystemLog,
    /// Voice channel listening state.
    VoiceUplink,
    /// Field notes scratchpad.
    StickyNotes,
    /// Digital chronometer.
    Clock,
    /// Month view calendar.
    MiniCalendar,
    /// Ping and latency summary.
    NetworkStatus,
}

impl WidgetKind {
    /// All widget kinds in catalog order. This is the order the
    /// add-widget picker lists them in.
    pub const ALL: [WidgetKind; 7] = [
        WidgetKind::QuickActions,
        WidgetKind::SystemLog,
        WidgetKind::VoiceUplink,
        WidgetKind::StickyNotes,
        WidgetKind::Clock,
        WidgetKind::MiniCalendar,
        WidgetKind::NetworkStatus,
    ];

    /// Position of this kind in [`WidgetKind::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|w| *w == self)
            .expect("every widget kind is listed in ALL")
    }

    /// Stable kebab-case identifier.
    pub fn id(self) -> &'static str {
        match self {
            WidgetKind::QuickActions => "quick-actions",
            WidgetKind::SystemLog => "system-log",
            WidgetKind::VoiceUplink => "voice-uplink",
            WidgetKind::StickyNotes => "sticky-notes",
            WidgetKind::Clock => "clock",
            WidgetKind::MiniCalendar => "mini-calendar",
            WidgetKind::NetworkStatus => "network-status",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Error type for parsing a [`WidgetKind`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWidgetError(pub String);

impl fmt::Display for ParseWidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown widget: {}", self.0)
    }
}

impl std::error::Error for ParseWidgetError {}

impl FromStr for WidgetKind {
    type Err = ParseWidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetKind::ALL
            .iter()
            .copied()
            .find(|w| w.id() == s.to_lowercase())
            .ok_or_else(|| ParseWidgetError(s.to_string()))
    }
}

/// Identifier for a fixed section of the dashboard grid.
///
/// The set is closed: sections are only ever reordered or toggled,
/// never added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    /// Headline metric cards.
    Metrics,
    /// Token consumption chart.
    Tokens,
    /// Vital sign gauges.
    VitalSigns,
    /// Model battle chart and project runway.
    Models,
    /// Active agent grid.
    Agents,
}

impl SectionId {
    /// Default top-to-bottom order of the dashboard sections.
    pub const ALL: [SectionId; 5] = [
        SectionId::Metrics,
        SectionId::Tokens,
        SectionId::VitalSigns,
        SectionId::Models,
        SectionId::Agents,
    ];

    /// Stable kebab-case identifier.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Metrics => "metrics",
            SectionId::Tokens => "tokens",
            SectionId::VitalSigns => "vital-signs",
            SectionId::Models => "models",
            SectionId::Agents => "agents",
        }
    }

    /// Display title shown on the section frame.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Metrics => "MISSION METRICS",
            SectionId::Tokens => "TOKEN CONSUMPTION",
            SectionId::VitalSigns => "VITAL SIGNS",
            SectionId::Models => "MODEL BATTLE",
            SectionId::Agents => "ACTIVE NEURAL GRID",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Direction for an adjacent-swap move in the dashboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the front of the sequence.
    Up,
    /// Towards the back of the sequence.
    Down,
}

/// Severity of a notification toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral informational message.
    Info,
    /// Completed action.
    Success,
    /// Degraded but non-fatal condition.
    Warning,
    /// Failed or denied action.
    Error,
}

impl Severity {
    /// Short uppercase label shown on the toast.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Success => "OK",
            Severity::Warning => "WARN",
            Severity::Error => "ERR",
        }
    }
}
