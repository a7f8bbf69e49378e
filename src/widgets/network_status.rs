//! Ping and latency summary widget.
//!
//! Latency wobbles deterministically with the tick counter so the panel
//! reads as live without pulling randomness into the render path.

use crate::widgets::{Widget, WidgetContext};
use crate::WidgetKind;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

/// Widget displaying uplink health.
pub struct NetworkStatusWidget;

impl NetworkStatusWidget {
    /// Creates a new `NetworkStatusWidget`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for NetworkStatusWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// Synthetic round-trip latency in milliseconds for a given tick.
fn latency_ms(tick: u64) -> u64 {
    8 + (tick * 7) % 17
}

impl Widget for NetworkStatusWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::NetworkStatus
    }

    fn render(&self, _width: u16, context: &WidgetContext) -> Text<'static> {
        Text::from(vec![
            Line::styled(
                "ALL SYSTEMS NOMINAL",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(vec![
                Span::styled("uplink   ", Style::default().fg(Color::DarkGray)),
                Span::styled("ok", Style::default().fg(Color::Green)),
            ]),
            Line::from(vec![
                Span::styled("latency  ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{}ms", latency_ms(context.tick)),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ])
    }

    fn height(&self) -> u16 {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::feed::MockFeed;

    #[test]
    fn test_kind() {
        assert_eq!(
            NetworkStatusWidget::new().kind(),
            WidgetKind::NetworkStatus
        );
    }

    #[test]
    fn test_latency_stays_in_band() {
        for tick in 0..100 {
            let ms = latency_ms(tick);
            assert!((8..25).contains(&ms), "latency {ms} out of band");
        }
    }

    #[test]
    fn test_renders_nominal_banner() {
        let feed = MockFeed::with_seed(1);
        let ctx = WidgetContext::new(feed.snapshot(), 3);
        let text = NetworkStatusWidget::new().render(30, &ctx);
        assert!(text.lines[0].to_string().contains("NOMINAL"));
        assert!(text.lines[2].to_string().contains("ms"));
    }
}
