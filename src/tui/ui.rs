//! Main rendering orchestration for the console.
//!
//! Composes the header (navigation tabs), the active view, the widget
//! sidebar, and the overlay layers (add-widget picker, notification
//! toasts) into one frame. All state is read from [`App`]; rendering
//! never mutates anything.

use crate::notify::Toast;
use crate::tui::app::App;
use crate::tui::views;
use crate::widgets::WidgetContext;
use crate::{Severity, ViewId, WidgetKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

/// Title displayed at the left of the header.
const HEADER_TEXT: &str = "MISSION CONSOLE";

/// Version string shown in the header (right-aligned).
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Sidebar width in columns.
const SIDEBAR_WIDTH: u16 = 36;

/// Toast overlay width in columns.
const TOAST_WIDTH: u16 = 40;

/// Accent color for a toast severity.
pub(crate) fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Blue,
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

/// Renders the full console frame.
pub fn render_app(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(5),    // body
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_body(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);

    render_toasts(frame, area, app.notifier.active());
    if app.picker_open {
        render_picker(frame, area, app);
    }
}

/// Renders the header: title, navigation tabs, version.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(HEADER_TEXT.len() as u16 + 2),
            Constraint::Min(10),
            Constraint::Length(VERSION_TEXT.len() as u16),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        HEADER_TEXT,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, chunks[0]);

    let labels: Vec<Line> = ViewId::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::raw(format!("{}:{}", i + 1, short_label(*view))))
        .collect();
    let tabs = Tabs::new(labels)
        .select(app.current_view.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" ");
    frame.render_widget(tabs, chunks[1]);

    let version = Paragraph::new(Span::styled(
        VERSION_TEXT,
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(version, chunks[2]);
}

/// Short tab label for a view.
fn short_label(view: ViewId) -> &'static str {
    match view {
        ViewId::Dashboard => "DASH",
        ViewId::Agents => "AGENTS",
        ViewId::Tasks => "TASKS",
        ViewId::Growth => "GROWTH",
        ViewId::Vault => "VAULT",
        ViewId::Comms => "COMMS",
        ViewId::Settings => "CONFIG",
    }
}

/// Renders the body: active view, plus the sidebar when visible.
fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let content = if app.layouts.sidebar_visible(app.current_view) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(SIDEBAR_WIDTH)])
            .split(area);
        render_sidebar(frame, chunks[1], app);
        chunks[0]
    } else {
        area
    };

    match app.current_view {
        ViewId::Dashboard => views::dashboard::render(frame, content, app),
        ViewId::Agents => views::agents::render(frame, content, app),
        ViewId::Tasks => views::tasks::render(frame, content, app),
        ViewId::Growth => views::growth::render(frame, content, app),
        ViewId::Vault => views::vault::render(frame, content, app),
        ViewId::Comms => views::comms::render(frame, content, app),
        ViewId::Settings => views::settings::render(frame, content, app),
    }
}

/// Renders the widget sidebar for the current view.
///
/// Every mounted instance gets its own titled frame; duplicates render
/// as separate frames. In edit mode the selected frame is highlighted
/// and a key-hint row appears at the bottom.
fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let title = if app.sidebar_editing {
        " WIDGET STACK [EDIT] "
    } else {
        " WIDGET STACK "
    };
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(if app.sidebar_editing {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .title(Span::styled(title, Style::default().fg(Color::Gray)));
    let mut inner = outer.inner(area);
    frame.render_widget(outer, area);

    if app.sidebar_editing && inner.height > 1 {
        let hint_area = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        let hints = Paragraph::new(Span::styled(
            "[a] add  [x] remove  [j/k] select",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hints, hint_area);
        inner.height -= 1;
    }

    let kinds = app.layouts.widgets(app.current_view);
    if kinds.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::raw(""),
            Line::styled("No widgets active", Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            Line::styled("[e] edit, [a] add", Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
        ]);
        frame.render_widget(placeholder, inner);
        return;
    }

    let ctx = WidgetContext::new(app.feed.snapshot(), app.tick_count);
    let mut y = inner.y;
    for (i, kind) in kinds.iter().enumerate() {
        if y >= inner.y + inner.height {
            break;
        }
        let widget = app.registry.create(*kind);
        let info = app.registry.info(*kind);
        let frame_height = (widget.height() + 2).min(inner.y + inner.height - y);
        let slot = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: frame_height,
        };

        let selected = app.sidebar_editing && i == app.sidebar_cursor;
        let border_style = if selected {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut frame_title = format!(" {} {} ", info.glyph, info.title);
        if selected {
            frame_title.push_str("[x] ");
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(frame_title, Style::default().fg(Color::Gray)));
        let body_area = block.inner(slot);
        frame.render_widget(block, slot);
        frame.render_widget(Paragraph::new(widget.render(body_area.width, &ctx)), body_area);

        y += frame_height;
    }
}

/// Renders the footer key hints and the last sync time.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.picker_open {
        "[j/k] select  [enter] add  [esc] close"
    } else if app.sidebar_editing {
        "[j/k] select  [a] add  [x] remove  [e] done"
    } else if app.grid_editing && app.current_view == ViewId::Dashboard {
        "[j/k] select  [K/J] move  [space] show/hide  [g] done"
    } else {
        "[1-7] views  [b] sidebar  [e] edit stack  [g] edit grid  [q] quit"
    };

    let sync = format!(
        "SYNC {}",
        app.feed.snapshot().generated_at.format("%H:%M:%S")
    );
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(sync.len() as u16)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(sync, Style::default().fg(Color::Green))),
        chunks[1],
    );
}

/// Renders the toast overlay, stacked bottom-right, newest at the
/// bottom.
fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    if width < 10 {
        return;
    }
    let x = area.right().saturating_sub(width + 1);

    for (i, toast) in toasts.iter().rev().enumerate() {
        let height = 3u16;
        let bottom_offset = 1 + (i as u16 + 1) * height;
        if bottom_offset + 1 > area.height {
            break;
        }
        let rect = Rect {
            x,
            y: area.bottom() - bottom_offset,
            width,
            height,
        };
        let color = severity_color(toast.severity);
        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} {} ", toast.severity.label(), toast.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        let body = block.inner(rect);
        frame.render_widget(block, rect);
        frame.render_widget(
            Paragraph::new(Span::styled(
                toast.message.clone(),
                Style::default().fg(Color::Gray),
            )),
            body,
        );
    }
}

/// Renders the add-widget picker overlay, centered.
fn render_picker(frame: &mut Frame, area: Rect, app: &App) {
    let height = (WidgetKind::ALL.len() as u16 + 3).min(area.height);
    let width = 46u16.min(area.width);
    let rect = centered_rect(width, height, area);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(
            " ADD WIDGET ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines: Vec<Line> = app
        .registry
        .available()
        .enumerate()
        .map(|(i, info)| {
            let selected = i == app.picker_cursor;
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::styled(
                format!(" {} {:<16} {}", info.glyph, info.title, info.description),
                style,
            )
        })
        .collect();
    lines.push(Line::styled(
        " [enter] add  [esc] close",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(lines), inner);
}

/// A `width` x `height` rect centered within `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
