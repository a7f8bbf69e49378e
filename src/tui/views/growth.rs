//! Content strategy view: campaign calendar plus the publishing queue.

use crate::data::{PostStatus, SocialPost};
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Days shown on the campaign calendar.
const CAMPAIGN_DAYS: u8 = 30;

/// Renders the growth view.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "CONTENT_STRATEGY // Q1",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_calendar(frame, body[0], &app.feed.snapshot().social_queue);
    render_queue(frame, body[1], &app.feed.snapshot().social_queue);
}

fn status_color(status: PostStatus) -> Color {
    match status {
        PostStatus::Done => Color::Green,
        PostStatus::Scheduled => Color::Blue,
        PostStatus::Draft => Color::DarkGray,
        PostStatus::Idea => Color::Magenta,
    }
}

/// Renders the campaign month as week rows, marking days with posts.
fn render_calendar(frame: &mut Frame, area: Rect, posts: &[SocialPost]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " CAMPAIGN CALENDAR ",
            Style::default().fg(Color::Gray),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::styled(
        "MON   TUE   WED   THU   FRI   SAT   SUN",
        Style::default().fg(Color::DarkGray),
    )];
    for week_start in (1..=CAMPAIGN_DAYS).step_by(7) {
        let mut spans = Vec::new();
        for day in week_start..(week_start + 7).min(CAMPAIGN_DAYS + 1) {
            match posts.iter().find(|p| p.day == day) {
                Some(post) => spans.push(Span::styled(
                    format!("{:>2}{:<4}", day, post.channel.tag()),
                    Style::default()
                        .fg(status_color(post.status))
                        .add_modifier(Modifier::BOLD),
                )),
                None => spans.push(Span::styled(
                    format!("{day:>2}    "),
                    Style::default().fg(Color::DarkGray),
                )),
            }
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "done · scheduled · draft",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the publishing queue detail list.
fn render_queue(frame: &mut Frame, area: Rect, posts: &[SocialPost]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " PUBLISHING QUEUE ",
            Style::default().fg(Color::Gray),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = posts
        .iter()
        .map(|post| {
            Line::from(vec![
                Span::styled(
                    format!("DAY {:02}  ", post.day),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<20}", post.title),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:?}", post.status).to_uppercase(),
                    Style::default().fg(status_color(post.status)),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use crate::tui::test_utils::{find_row_with_text, render_app_to_buffer};
    use crate::ViewId;

    #[test]
    fn test_queue_lists_every_post() {
        let mut app = crate::tui::app::App::for_tests();
        app.switch_view(ViewId::Growth);
        let buffer = render_app_to_buffer(&app, 120, 40);
        assert!(find_row_with_text(&buffer, "Launch Post").is_some());
        assert!(find_row_with_text(&buffer, "Meme Monday").is_some());
        assert!(find_row_with_text(&buffer, "DAY 22").is_some());
    }

    #[test]
    fn test_calendar_header_renders() {
        let mut app = crate::tui::app::App::for_tests();
        app.switch_view(ViewId::Growth);
        let buffer = render_app_to_buffer(&app, 120, 40);
        assert!(find_row_with_text(&buffer, "CAMPAIGN CALENDAR").is_some());
        assert!(find_row_with_text(&buffer, "MON").is_some());
    }
}
