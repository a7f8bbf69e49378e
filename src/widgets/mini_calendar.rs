//! Month view calendar widget.
//!
//! Renders the current month as a Su-Sa grid with today highlighted.

use crate::widgets::{Widget, WidgetContext};
use crate::WidgetKind;
use chrono::{Datelike, NaiveDate};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

const DAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

/// Widget displaying the current month.
pub struct MiniCalendarWidget;

impl MiniCalendarWidget {
    /// Creates a new `MiniCalendarWidget`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for MiniCalendarWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of days in the given month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .expect("month arithmetic stays in range")
}

/// Builds the week rows for a month: header first, then one line per
/// week, with `today` bold-highlighted.
fn month_lines(year: i32, month: u32, today: u32) -> Vec<Line<'static>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
    let lead = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month);

    let mut lines = vec![Line::styled(
        DAY_HEADER,
        Style::default().fg(Color::DarkGray),
    )];
    let mut week: Vec<Span<'static>> = vec![Span::raw("   ".repeat(lead))];
    let mut slot = lead;

    for day in 1..=days {
        let style = if day == today {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        week.push(Span::styled(format!("{day:>2}"), style));
        week.push(Span::raw(" "));
        slot += 1;
        if slot == 7 {
            lines.push(Line::from(std::mem::take(&mut week)));
            slot = 0;
        }
    }
    if !week.is_empty() {
        lines.push(Line::from(week));
    }
    lines
}

impl Widget for MiniCalendarWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::MiniCalendar
    }

    fn render(&self, _width: u16, context: &WidgetContext) -> Text<'static> {
        let date = context.now.date_naive();
        Text::from(month_lines(date.year(), date.month(), date.day()))
    }

    fn height(&self) -> u16 {
        // Header plus up to six week rows.
        7
    }
}
