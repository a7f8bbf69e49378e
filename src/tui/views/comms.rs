//! Secure comms view: voice channel plus the encrypted message stream.

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the comms view.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(area);

    render_voice_channel(frame, chunks[0], app.voice_active);
    render_message_stream(frame, chunks[1]);
}

/// Renders the voice channel panel; `m` flips between standby and
/// listening.
fn render_voice_channel(frame: &mut Frame, area: Rect, active: bool) {
    let accent = if active { Color::Red } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            " SECURE VOICE CHANNEL ",
            Style::default().fg(Color::Gray),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner = if active {
        Line::styled(
            "CHANNEL SECURE // LISTENING...",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled("CHANNEL STANDBY", Style::default().fg(Color::DarkGray))
    };
    let mic = if active {
        Line::styled("((  MIC LIVE  ))", Style::default().fg(Color::Red))
    } else {
        Line::styled("(  mic muted  )", Style::default().fg(Color::DarkGray))
    };

    let lines = vec![
        Line::raw(""),
        banner.alignment(Alignment::Center),
        Line::raw(""),
        mic.alignment(Alignment::Center),
        Line::raw(""),
        Line::styled("[m] toggle channel", Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the fixed chat transcript.
fn render_message_stream(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " ENCRYPTED MESSAGE STREAM ",
            Style::default().fg(Color::Gray),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled("· Uplink Established ·", Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        Line::raw(""),
        Line::from(vec![
            Span::styled("YOU · 2s ago", Style::default().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Right),
        Line::styled("Report status.", Style::default().fg(Color::Blue))
            .alignment(Alignment::Right),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "BOARD",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::styled(
            "All systems nominal. Ready for tasking.",
            Style::default().fg(Color::Gray),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
