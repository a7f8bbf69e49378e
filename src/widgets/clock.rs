//! Digital chronometer widget.
//!
//! Shows the wall-clock time and date, centered. Re-renders naturally on
//! every tick because the sidebar rebuilds widget bodies each pass.

use crate::widgets::{Widget, WidgetContext};
use crate::WidgetKind;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Text},
};

/// Widget displaying the local time and date.
pub struct ClockWidget;

impl ClockWidget {
    /// Creates a new `ClockWidget`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClockWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ClockWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Clock
    }

    fn render(&self, _width: u16, context: &WidgetContext) -> Text<'static> {
        let time = context.now.format("%H:%M:%S").to_string();
        let date = context.now.format("%A, %b %d").to_string().to_uppercase();
        Text::from(vec![
            Line::styled(
                time,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
            Line::styled(date, Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
        ])
    }

    fn height(&self) -> u16 {
        2
    }
}
