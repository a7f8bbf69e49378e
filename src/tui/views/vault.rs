//! File vault view: source tree plus document preview.
//!
//! The vault contents are a fixed fixture; only the chrome is live.

use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the vault view.
pub fn render(frame: &mut Frame, area: Rect, _app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_tree(frame, chunks[0]);
    render_preview(frame, chunks[1]);
}

/// Renders the static source tree with footer stats.
fn render_tree(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(" SOURCE_DATA ", Style::default().fg(Color::Gray)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(Color::DarkGray);
    let file = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("▾ ", dim),
            Span::styled("00_MISSION_CONTROL", file),
        ]),
        Line::styled("    DASHBOARD.json", Style::default().fg(Color::Yellow)),
        Line::styled("    DATA_METRICS.json", Style::default().fg(Color::Yellow)),
        Line::from(vec![
            Span::styled("▾ ", dim),
            Span::styled("20_GROWTH", Style::default().fg(Color::Green)),
        ]),
        Line::styled(
            "    social_strategy_v1.md",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled("    campaign_ideas.txt", file),
    ];
    if inner.height > lines.len() as u16 + 1 {
        let pad = inner.height as usize - lines.len() - 1;
        lines.extend(std::iter::repeat_with(|| Line::raw("")).take(pad));
        lines.push(Line::styled("4 FILES, 3 FOLDERS        1.2MB USED", dim));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the static document preview.
fn render_preview(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(" PREVIEW ", Style::default().fg(Color::Gray)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Growth_Bot ", Style::default().fg(Color::Green)),
            Span::styled("· $0.04 · Markdown", Style::default().fg(Color::DarkGray)),
        ]),
        Line::raw(""),
        Line::styled(
            "Q1 Growth Strategy",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(
            "Based on the recent cohort analysis, we have identified",
            Style::default().fg(Color::Gray),
        ),
        Line::styled(
            "three key areas for expansion in Q1 2026.",
            Style::default().fg(Color::Gray),
        ),
        Line::raw(""),
        Line::styled("# Key Objectives", Style::default().fg(Color::Green)),
        Line::styled("  · Increase DAU by 15%.", Style::default().fg(Color::Gray)),
        Line::styled(
            "  · Reduce Time-to-Hello-World to 2m.",
            Style::default().fg(Color::Gray),
        ),
        Line::raw(""),
        Line::styled(
            r#"  {"target": "enterprise_tier", "metrics": ["api_latency"]}"#,
            Style::default().fg(Color::DarkGray),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[REJECT]", Style::default().fg(Color::Red)),
            Span::raw("  "),
            Span::styled(
                "[PUBLISH]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
