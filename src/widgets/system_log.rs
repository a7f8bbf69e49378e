//! Live kernel event feed widget.
//!
//! The transcript is synthetic and fixed; only the styling varies by
//! event tag.

use crate::widgets::{Widget, WidgetContext};
use crate::WidgetKind;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span, Text},
};

/// Static log entries: timestamp, tag, tag color, message.
const ENTRIES: &[(&str, &str, Color, &str)] = &[
    ("14:32:01", "SYS_INIT", Color::Cyan, "Bootstrapping cluster"),
    ("14:32:05", "AUTH", Color::Green, "Handshake verified"),
    ("14:32:44", "WARN", Color::Yellow, "High latency on pod-4"),
    ("14:33:12", "LOG", Color::DarkGray, "Snapshot saved"),
];

/// Widget displaying recent system log lines.
pub struct SystemLogWidget;

impl SystemLogWidget {
    /// Creates a new `SystemLogWidget`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemLogWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for SystemLogWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::SystemLog
    }

    fn render(&self, _width: u16, _context: &WidgetContext) -> Text<'static> {
        let lines = ENTRIES
            .iter()
            .map(|(ts, tag, color, msg)| {
                Line::from(vec![
                    Span::styled(format!("[{ts}] "), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{tag}: "), Style::default().fg(*color)),
                    Span::styled((*msg).to_string(), Style::default().fg(Color::Gray)),
                ])
            })
            .collect::<Vec<_>>();
        Text::from(lines)
    }

    fn height(&self) -> u16 {
        ENTRIES.len() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::feed::MockFeed;

    #[test]
    fn test_kind() {
        assert_eq!(SystemLogWidget::new().kind(), WidgetKind::SystemLog);
    }

    #[test]
    fn test_renders_all_entries_with_timestamps() {
        let feed = MockFeed::with_seed(1);
        let ctx = WidgetContext::new(feed.snapshot(), 0);
        let text = SystemLogWidget::new().render(40, &ctx);
        assert_eq!(text.lines.len(), ENTRIES.len());
        assert!(text.lines[0].to_string().contains("[14:32:01]"));
        assert!(text.lines[2].to_string().contains("WARN"));
    }
}
