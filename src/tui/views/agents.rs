//! Agent roster view: mission queue alongside the fleet cards.

use crate::data::{protocols_in, ProtocolStatus};
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the agents view.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(30)])
        .split(area);

    render_mission_queue(frame, chunks[0], app);
    render_roster(frame, chunks[1], app);
}

/// Renders the backlog protocols waiting for assignment.
fn render_mission_queue(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " MISSION QUEUE ",
            Style::default().fg(Color::Gray),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::styled(
            format!("FLEET: {} AGENTS", app.feed.snapshot().stats.total_agents),
            Style::default().fg(Color::DarkGray),
        ),
        Line::styled("PENDING PROTOCOLS", Style::default().fg(Color::DarkGray)),
    ];
    for protocol in protocols_in(ProtocolStatus::Backlog) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", protocol.id),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                protocol.priority.label(),
                Style::default().fg(Color::Yellow),
            ),
        ]));
        lines.push(Line::styled(
            format!("  {}", protocol.title),
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Bar string visualizing context usage, `width` cells wide.
pub fn context_bar(used: u32, total: u32, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (used as usize * width) / total as usize
    };
    let mut bar = String::with_capacity(width);
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

/// Renders one card per fleet agent.
fn render_roster(frame: &mut Frame, area: Rect, app: &App) {
    let agents = &app.feed.snapshot().agents;
    let constraints: Vec<Constraint> = agents
        .iter()
        .map(|_| Constraint::Length(7))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (agent, chunk) in agents.iter().zip(chunks.iter()) {
        let status_color = match agent.status {
            s if s.is_busy() => Color::Green,
            crate::data::AgentStatus::Error => Color::Red,
            _ => Color::DarkGray,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(status_color))
            .title(Span::styled(
                format!(" {} ", agent.role),
                Style::default().fg(Color::Gray),
            ));
        let inner = block.inner(*chunk);
        frame.render_widget(block, *chunk);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{:<18}", agent.name),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(agent.model, Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                Span::styled("● ", Style::default().fg(status_color)),
                Span::styled(agent.status.label(), Style::default().fg(status_color)),
                Span::styled(
                    format!("  {}", agent.task),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    context_bar(agent.context_used, agent.context_total, 20),
                    Style::default().fg(status_color),
                ),
                Span::styled(
                    format!(" {}k / {}k", agent.context_used, agent.context_total),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::styled(
                format!(
                    "ctx: sys {} · usr {} · rag {} · out {}",
                    agent.breakdown.system,
                    agent.breakdown.user,
                    agent.breakdown.rag,
                    agent.breakdown.output
                ),
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(
                format!("tools: {}", agent.tools.join(", ")),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
