//! Field notes scratchpad widget.

use crate::widgets::{Widget, WidgetContext};
use crate::WidgetKind;
use ratatui::{
    style::{Color, Style},
    text::{Line, Text},
};

const NOTE_LINES: &[&str] = &[
    "Meeting w/ Sato @ 14:00",
    "- Review API Specs",
    "- Discuss Q3 Budget",
];

/// Widget displaying the field notes scratchpad.
pub struct StickyNotesWidget;

impl StickyNotesWidget {
    /// Creates a new `StickyNotesWidget`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for StickyNotesWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for StickyNotesWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::StickyNotes
    }

    fn render(&self, _width: u16, _context: &WidgetContext) -> Text<'static> {
        let lines = NOTE_LINES
            .iter()
            .map(|line| Line::styled(*line, Style::default().fg(Color::LightYellow)))
            .collect::<Vec<_>>();
        Text::from(lines)
    }

    fn height(&self) -> u16 {
        NOTE_LINES.len() as u16
    }
}
