//! Voice channel listening-state widget.
//!
//! A tiny level-meter animation keyed off the tick counter plus the
//! listening banner.

use crate::widgets::{Widget, WidgetContext};
use crate::WidgetKind;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Text},
};

/// Level-meter animation frames, cycled per tick.
const FRAMES: [&str; 4] = [
    "▂ ▅ ▇ ▅ ▂",
    "▃ ▇ ▅ ▂ ▅",
    "▅ ▂ ▃ ▇ ▃",
    "▇ ▅ ▂ ▅ ▂",
];

/// Widget displaying the active listening state.
pub struct VoiceUplinkWidget;

impl VoiceUplinkWidget {
    /// Creates a new `VoiceUplinkWidget`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for VoiceUplinkWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for VoiceUplinkWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::VoiceUplink
    }

    fn render(&self, _width: u16, context: &WidgetContext) -> Text<'static> {
        let frame = FRAMES[(context.tick as usize) % FRAMES.len()];
        Text::from(vec![
            Line::styled(frame, Style::default().fg(Color::Green)).alignment(Alignment::Center),
            Line::styled("LISTENING...", Style::default().fg(Color::Green))
                .alignment(Alignment::Center),
        ])
    }

    fn height(&self) -> u16 {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::feed::MockFeed;

    #[test]
    fn test_kind() {
        assert_eq!(VoiceUplinkWidget::new().kind(), WidgetKind::VoiceUplink);
    }

    #[test]
    fn test_frame_advances_with_tick() {
        let feed = MockFeed::with_seed(1);
        let widget = VoiceUplinkWidget::new();
        let a = widget
            .render(30, &WidgetContext::new(feed.snapshot(), 0))
            .lines[0]
            .to_string();
        let b = widget
            .render(30, &WidgetContext::new(feed.snapshot(), 1))
            .lines[0]
            .to_string();
        assert_ne!(a, b);
    }

    #[test]
    fn test_frame_cycle_wraps() {
        let feed = MockFeed::with_seed(1);
        let widget = VoiceUplinkWidget::new();
        let first = widget
            .render(30, &WidgetContext::new(feed.snapshot(), 0))
            .lines[0]
            .to_string();
        let wrapped = widget
            .render(30, &WidgetContext::new(feed.snapshot(), FRAMES.len() as u64))
            .lines[0]
            .to_string();
        assert_eq!(first, wrapped);
    }
}
