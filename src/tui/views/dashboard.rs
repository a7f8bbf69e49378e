//! Command dashboard view.
//!
//! Renders the five grid sections in store order. The rendering rule for
//! visibility comes straight from the grid design: outside edit mode,
//! hidden sections are omitted from the layout entirely; in edit mode
//! every section renders, hidden ones dimmed with a restore hint, so the
//! user can re-enable them.

use crate::layout::grid::{DashboardGrid, GridSection};
use crate::tui::app::App;
use crate::SectionId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph, Sparkline},
    Frame,
};

/// Daily spend budget used for the budget gauge and metric subtext.
const DAILY_BUDGET: f64 = 5.0;

/// The sections to lay out, in store order, honoring the edit-mode
/// rendering rule.
pub fn visible_entries(grid: &DashboardGrid, editing: bool) -> Vec<GridSection> {
    grid.sections()
        .iter()
        .copied()
        .filter(|s| editing || s.visible)
        .collect()
}

/// Fixed layout height for each section.
fn section_height(id: SectionId) -> u16 {
    match id {
        SectionId::Metrics => 5,
        SectionId::Tokens => 8,
        SectionId::VitalSigns => 5,
        SectionId::Models => 8,
        SectionId::Agents => 5,
    }
}

/// Renders the dashboard view.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let entries = visible_entries(&app.grid, app.grid_editing);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(
        entries
            .iter()
            .map(|s| Constraint::Length(section_height(s.id))),
    );
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_toolbar(frame, chunks[0], app);

    for (i, section) in entries.iter().enumerate() {
        render_section(frame, chunks[i + 1], app, *section);
    }
}

/// Renders the ticker / edit-mode toolbar row.
fn render_toolbar(frame: &mut Frame, area: Rect, app: &App) {
    let ticker = "// LATEST: AGENT \"CTO_CORE\" OPTIMIZED API GATEWAY ROUTING (140ms GAIN)  \
                  // SYSTEM: CACHE PURGE SCHEDULED FOR 03:00 UTC";
    let mode = if app.grid_editing {
        Span::styled(
            format!(" DONE_EDITING [g] {}/5 visible ", app.grid.visible_count()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" CUSTOMIZE_VIEW [g] ", Style::default().fg(Color::DarkGray))
    };
    let line = Line::from(vec![
        Span::styled(ticker, Style::default().fg(Color::Green)),
        Span::raw("  "),
        mode,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders one grid section with its edit-mode chrome.
fn render_section(frame: &mut Frame, area: Rect, app: &App, section: GridSection) {
    if area.height == 0 {
        return;
    }
    let selected = app.grid_editing && app.grid.position(section.id) == app.grid_cursor;

    let mut title = format!(" {} ", section.id.title());
    if app.grid_editing {
        if !section.visible {
            title.push_str("(hidden) ");
        }
        if selected {
            title.push_str("▲▼ ");
        }
    }
    let border_style = if selected {
        Style::default().fg(Color::Green)
    } else if !section.visible {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, Style::default().fg(Color::Gray)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !section.visible {
        // Edit mode only: hidden sections show a restore hint instead of
        // their body.
        let hint = Paragraph::new(Span::styled(
            "hidden · [space] to restore",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(hint, inner);
        return;
    }

    match section.id {
        SectionId::Metrics => render_metrics(frame, inner, app),
        SectionId::Tokens => render_tokens(frame, inner, app),
        SectionId::VitalSigns => render_vital_signs(frame, inner, app),
        SectionId::Models => render_models(frame, inner, app),
        SectionId::Agents => render_agent_grid(frame, inner, app),
    }
}

/// Formats an integer with thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders the four headline metric cards.
fn render_metrics(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.feed.snapshot().stats;
    let cards: [(&str, String, String); 4] = [
        (
            "DAILY SPEND",
            format!("${:.4}", stats.cost_today),
            format!("/ ${DAILY_BUDGET:.2} limit"),
        ),
        (
            "TOKEN VOLUME",
            group_thousands(stats.tokens_today),
            "tokens generated".to_string(),
        ),
        (
            "ACTIVE AGENTS",
            stats.active_sessions.to_string(),
            "swarms deployed".to_string(),
        ),
        (
            "TASKS DONE",
            stats.tasks_completed_today.to_string(),
            "protocols executed".to_string(),
        ),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, value, subtext), chunk) in cards.into_iter().zip(chunks.iter()) {
        let lines = vec![
            Line::styled(title, Style::default().fg(Color::DarkGray)),
            Line::styled(
                value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(subtext, Style::default().fg(Color::DarkGray)),
        ];
        frame.render_widget(Paragraph::new(lines), *chunk);
    }
}

/// Renders the token consumption sparkline.
fn render_tokens(frame: &mut Frame, area: Rect, app: &App) {
    let series = &app.feed.snapshot().token_series;
    let values: Vec<u64> = series.iter().map(|p| p.tokens).collect();
    let peak = values.iter().max().copied().unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(area);

    let sparkline = Sparkline::default()
        .data(&values)
        .style(Style::default().fg(Color::Green));
    frame.render_widget(sparkline, chunks[0]);

    let caption = match (series.first(), series.last()) {
        (Some(first), Some(last)) => format!(
            "{:02}:00 → {:02}:00   peak {}k",
            first.hour,
            last.hour,
            peak / 1000
        ),
        _ => String::new(),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(caption, Style::default().fg(Color::DarkGray))),
        chunks[1],
    );
}

/// Renders the vital sign gauges.
fn render_vital_signs(frame: &mut Frame, area: Rect, app: &App) {
    let snap = app.feed.snapshot();
    let budget_pct = ((snap.stats.cost_today / DAILY_BUDGET) * 100.0).clamp(0.0, 100.0) as u16;
    let memory = snap.health.memory;
    let gauges: [(&str, u16, Color, String); 4] = [
        (
            "BUDGET",
            budget_pct,
            Color::Green,
            format!("${:.2}/${DAILY_BUDGET:.2}", snap.stats.cost_today),
        ),
        (
            "CPU",
            snap.health.cpu.clamp(0.0, 100.0) as u16,
            Color::Cyan,
            format!("{:.1}%", snap.health.cpu),
        ),
        ("ERRORS", 2, Color::Yellow, "2%".to_string()),
        (
            "MEM",
            memory.percent as u16,
            Color::Red,
            format!("{}/{} MB", memory.used_mb, memory.total_mb),
        ),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, percent, color, label), chunk) in gauges.into_iter().zip(chunks.iter()) {
        let gauge = Gauge::default()
            .block(Block::default().title(Span::styled(
                title,
                Style::default().fg(Color::DarkGray),
            )))
            .gauge_style(Style::default().fg(color))
            .percent(percent)
            .label(label);
        frame.render_widget(gauge, *chunk);
    }
}

/// Renders the model battle bars and the project runway panel.
fn render_models(frame: &mut Frame, area: Rect, app: &App) {
    let snap = app.feed.snapshot();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let bars: Vec<Bar> = snap
        .model_metrics
        .iter()
        .map(|m| {
            Bar::default()
                .value(m.efficiency as u64)
                .label(Line::raw(m.model))
                .style(Style::default().fg(Color::Green))
        })
        .collect();
    let chart = BarChart::default()
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0);
    frame.render_widget(chart, chunks[0]);

    let runway = if snap.stats.cost_today < 1.0 {
        Line::styled(
            "RUNWAY: INFINITE",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled(
            "RUNWAY: 32 DAYS",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };
    let lines = vec![
        Line::styled("PROJECT RUNWAY", Style::default().fg(Color::DarkGray)),
        runway,
        Line::styled(
            format!("@ ${:.2} / day", snap.stats.cost_today),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}

/// Renders the active agent grid rows.
fn render_agent_grid(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .feed
        .snapshot()
        .agents
        .iter()
        .map(|agent| {
            let status_color = match agent.status {
                s if s.is_busy() => Color::Green,
                crate::data::AgentStatus::Error => Color::Red,
                _ => Color::DarkGray,
            };
            Line::from(vec![
                Span::styled("▌ ", Style::default().fg(status_color)),
                Span::styled(
                    format!("{:<18}", agent.name),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<9}", agent.status.label()),
                    Style::default().fg(status_color),
                ),
                Span::styled(agent.task, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_utils::{find_row_with_text, render_app_to_buffer};
    use crate::Direction as MoveDirection;

    // -- visible_entries: the edit-mode rendering rule --

    #[test]
    fn test_all_sections_listed_by_default() {
        let grid = DashboardGrid::new();
        let entries = visible_entries(&grid, false);
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_hidden_section_omitted_outside_edit_mode() {
        let mut grid = DashboardGrid::new();
        grid.toggle_visible(SectionId::Tokens);
        let entries = visible_entries(&grid, false);
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|s| s.id != SectionId::Tokens));
    }

    #[test]
    fn test_hidden_section_kept_in_edit_mode() {
        let mut grid = DashboardGrid::new();
        grid.toggle_visible(SectionId::Tokens);
        let entries = visible_entries(&grid, true);
        assert_eq!(entries.len(), 5);
        let tokens = entries
            .iter()
            .find(|s| s.id == SectionId::Tokens)
            .expect("tokens entry present in edit mode");
        assert!(!tokens.visible);
    }

    #[test]
    fn test_entries_follow_store_order() {
        let mut grid = DashboardGrid::new();
        grid.move_section(SectionId::Agents, MoveDirection::Up);
        let entries = visible_entries(&grid, false);
        assert_eq!(entries[3].id, SectionId::Agents);
        assert_eq!(entries[4].id, SectionId::Models);
    }

    // -- group_thousands --

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(190_292), "190,292");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    // -- Buffer rendering --

    #[test]
    fn test_dashboard_renders_section_titles() {
        let app = crate::tui::app::App::for_tests();
        let buffer = render_app_to_buffer(&app, 110, 40);
        assert!(find_row_with_text(&buffer, "MISSION METRICS").is_some());
        assert!(find_row_with_text(&buffer, "TOKEN CONSUMPTION").is_some());
        assert!(find_row_with_text(&buffer, "VITAL SIGNS").is_some());
    }

    #[test]
    fn test_hidden_section_title_absent_outside_edit() {
        let mut app = crate::tui::app::App::for_tests();
        app.grid.toggle_visible(SectionId::VitalSigns);
        let buffer = render_app_to_buffer(&app, 110, 40);
        assert!(find_row_with_text(&buffer, "VITAL SIGNS").is_none());
    }

    #[test]
    fn test_hidden_section_dimmed_in_edit_mode() {
        let mut app = crate::tui::app::App::for_tests();
        app.grid.toggle_visible(SectionId::VitalSigns);
        app.grid_editing = true;
        let buffer = render_app_to_buffer(&app, 110, 40);
        assert!(find_row_with_text(&buffer, "VITAL SIGNS (hidden)").is_some());
        assert!(find_row_with_text(&buffer, "[space] to restore").is_some());
    }

    #[test]
    fn test_metric_card_values_render() {
        let app = crate::tui::app::App::for_tests();
        let buffer = render_app_to_buffer(&app, 110, 40);
        assert!(find_row_with_text(&buffer, "DAILY SPEND").is_some());
        assert!(find_row_with_text(&buffer, "190,292").is_some());
    }
}
