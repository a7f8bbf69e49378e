//! Mission protocol board view.
//!
//! Board mode shows the three workflow columns; `v` flips to a
//! dependency summary that lists upstream links instead.

use crate::data::{protocols_in, Priority, Protocol, ProtocolStatus, PROTOCOLS};
use crate::tui::app::App;
use crate::ViewId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the tasks view.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(area);

    let mode = if app.tasks_graph_mode {
        "DEPENDENCY_GRAPH"
    } else {
        "BOARD_VIEW"
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}  ", ViewId::Tasks.title()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("[v] {mode}"), Style::default().fg(Color::DarkGray)),
        ])),
        chunks[0],
    );

    if app.tasks_graph_mode {
        render_dependency_summary(frame, chunks[1]);
    } else {
        render_board(frame, chunks[1]);
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Std => Color::DarkGray,
        Priority::High => Color::Yellow,
        Priority::Critical => Color::Red,
    }
}

/// Renders the three-column board.
fn render_board(frame: &mut Frame, area: Rect) {
    let columns = [
        (ProtocolStatus::Backlog, Color::DarkGray),
        (ProtocolStatus::Active, Color::Green),
        (ProtocolStatus::Validation, Color::Magenta),
    ];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for ((status, accent), chunk) in columns.into_iter().zip(chunks.iter()) {
        let cards = protocols_in(status);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(Span::styled(
                format!(" {} ({}) ", status.label(), cards.len()),
                Style::default().fg(Color::Gray),
            ));
        let inner = block.inner(*chunk);
        frame.render_widget(block, *chunk);

        let mut lines = Vec::new();
        for protocol in cards {
            lines.push(card_header(protocol));
            lines.push(Line::styled(
                format!("  {}", protocol.title),
                Style::default().fg(Color::Gray),
            ));
            lines.push(Line::styled(
                format!(
                    "  {} · {} · due {} · {}%",
                    protocol.kind,
                    protocol.tags.join(","),
                    protocol.due,
                    protocol.progress
                ),
                Style::default().fg(Color::DarkGray),
            ));
            lines.push(Line::raw(""));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn card_header(protocol: &Protocol) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("[{}] ", protocol.id),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("⚑{}", protocol.priority.label()),
            Style::default().fg(priority_color(protocol.priority)),
        ),
        Span::styled(
            format!("  {}", protocol.assignee),
            Style::default().fg(Color::Cyan),
        ),
    ])
}

/// Renders the dependency summary: one line per protocol, showing its
/// upstream links.
fn render_dependency_summary(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " DEPENDENCY GRAPH ",
            Style::default().fg(Color::Gray),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for protocol in PROTOCOLS {
        let upstream = if protocol.dependencies.is_empty() {
            Span::styled("(no upstream)", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                format!("◀── {}", protocol.dependencies.join(", ")),
                Style::default().fg(Color::Green),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<8}", protocol.id),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            upstream,
            Span::styled(
                format!("  {}", protocol.title),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
