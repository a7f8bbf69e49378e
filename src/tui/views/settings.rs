//! Console settings view.

use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the settings view.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_visual_config(frame, chunks[0], app);
    render_security(frame, chunks[1], app);
}

/// One toggle row with its cursor marker and ON/OFF pill.
fn toggle_line(label: &str, enabled: bool, selected: bool) -> Line<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let pill = if enabled {
        Span::styled(
            "[ ON]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[OFF]", Style::default().fg(Color::DarkGray))
    };
    Line::from(vec![
        Span::styled(
            marker.to_string(),
            Style::default().fg(Color::Green),
        ),
        Span::styled(format!("{label:<24}"), Style::default().fg(Color::Gray)),
        pill,
    ])
}

/// Renders the visual configuration toggles.
fn render_visual_config(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " VISUAL CONFIGURATION ",
            Style::default().fg(Color::Gray),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::raw(""),
        toggle_line(
            "CRT Scanline Overlay",
            app.crt_overlay,
            app.settings_cursor == 0,
        ),
        Line::raw(""),
        toggle_line(
            "Compact Density Mode",
            app.compact_density,
            app.settings_cursor == 1,
        ),
        Line::raw(""),
        Line::styled(
            "[j/k] select  [space] toggle",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the security panel.
fn render_security(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " SECURITY & ACCESS ",
            Style::default().fg(Color::Gray),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::raw(""),
        Line::styled("CURRENT SESSION", Style::default().fg(Color::DarkGray)),
        Line::styled(
            "ID: 94-AE-22",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled("ENCRYPTED (AES-256)", Style::default().fg(Color::Green)),
        Line::raw(""),
        Line::styled(
            format!(
                "STORAGE: {}% ALLOCATED",
                app.feed.snapshot().health.disk_percent
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use crate::tui::test_utils::{find_row_with_text, render_app_to_buffer, row_contains};
    use crate::ViewId;

    #[test]
    fn test_toggles_render_off_by_default() {
        let mut app = crate::tui::app::App::for_tests();
        app.switch_view(ViewId::Settings);
        let buffer = render_app_to_buffer(&app, 120, 40);
        let row = find_row_with_text(&buffer, "CRT Scanline Overlay").expect("toggle row");
        assert!(row_contains(&buffer, row, "[OFF]"));
    }

    #[test]
    fn test_enabled_toggle_shows_on() {
        let mut app = crate::tui::app::App::for_tests();
        app.switch_view(ViewId::Settings);
        app.crt_overlay = true;
        let buffer = render_app_to_buffer(&app, 120, 40);
        let row = find_row_with_text(&buffer, "CRT Scanline Overlay").expect("toggle row");
        assert!(row_contains(&buffer, row, "[ ON]"));
    }

    #[test]
    fn test_security_panel_renders() {
        let mut app = crate::tui::app::App::for_tests();
        app.switch_view(ViewId::Settings);
        let buffer = render_app_to_buffer(&app, 120, 40);
        assert!(find_row_with_text(&buffer, "ID: 94-AE-22").is_some());
        assert!(find_row_with_text(&buffer, "ENCRYPTED (AES-256)").is_some());
    }
}
