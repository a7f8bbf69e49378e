//! Essential system controls widget.
//!
//! Renders the four quick actions with their function-key bindings. The
//! key handling itself lives in the TUI layer; firing an action pushes a
//! toast through the notification center with the payloads defined here.

use crate::widgets::{Widget, WidgetContext};
use crate::{Severity, WidgetKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

/// One quick action: key hint, button label, and the toast it fires.
pub struct QuickAction {
    /// Function key that triggers the action.
    pub hotkey: &'static str,
    /// Button label.
    pub label: &'static str,
    /// Severity of the resulting toast.
    pub severity: Severity,
    /// Toast title.
    pub toast_title: &'static str,
    /// Toast body.
    pub toast_message: &'static str,
}

/// The fixed quick action set, in F1-F4 order.
pub const ACTIONS: [QuickAction; 4] = [
    QuickAction {
        hotkey: "F1",
        label: "DEPLOY",
        severity: Severity::Success,
        toast_title: "DEPLOYMENT_INITIATED",
        toast_message: "All swarm agents have been tasked.",
    },
    QuickAction {
        hotkey: "F2",
        label: "PURGE",
        severity: Severity::Info,
        toast_title: "CACHE_CLEARED",
        toast_message: "Local telemetry cache flushed.",
    },
    QuickAction {
        hotkey: "F3",
        label: "REBOOT",
        severity: Severity::Warning,
        toast_title: "RESTARTING",
        toast_message: "System reboot sequence initiated.",
    },
    QuickAction {
        hotkey: "F4",
        label: "LOCK",
        severity: Severity::Error,
        toast_title: "ACCESS_DENIED",
        toast_message: "Security protocol requires authorization.",
    },
];

fn action_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

/// Widget listing the quick actions and their key bindings.
pub struct QuickActionsWidget;

impl QuickActionsWidget {
    /// Creates a new `QuickActionsWidget`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuickActionsWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for QuickActionsWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::QuickActions
    }

    fn render(&self, _width: u16, _context: &WidgetContext) -> Text<'static> {
        let lines = ACTIONS
            .iter()
            .map(|action| {
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", action.hotkey),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        action.label,
                        Style::default()
                            .fg(action_color(action.severity))
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect::<Vec<_>>();
        Text::from(lines)
    }

    fn height(&self) -> u16 {
        ACTIONS.len() as u16
    }
}
