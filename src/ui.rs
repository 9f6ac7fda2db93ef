use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::session::{Session, VISIBLE_LINES, WRAP_WIDTH};
use crate::{App, AppState};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Typing => render_typing(&self.session, area, buf),
            AppState::Results => render_results(&self.session, area, buf),
        }
    }
}

fn render_typing(session: &Session, area: Rect, buf: &mut Buffer) {
    // styles for the four character roles
    let correct_style = Style::default().fg(Color::Green);
    let incorrect_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    let pending_style = Style::default().add_modifier(Modifier::DIM);
    let cursor_style = Style::default()
        .add_modifier(Modifier::DIM)
        .add_modifier(Modifier::REVERSED);

    let header_height = 3u16; // header line plus gap
    let body_height = header_height + VISIBLE_LINES as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(body_height) / 2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(VISIBLE_LINES as u16),
            Constraint::Min(0),
        ])
        .split(area);

    let header = Paragraph::new(Span::styled(
        format!(
            "WPM: {} | Time left: {:.1}s",
            session.wpm, session.seconds_remaining
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    header.render(chunks[1], buf);

    // Up to 3 wrapped lines of the target, starting at the scroll offset,
    // each character styled by comparing against the typed buffer.
    let target: Vec<char> = session.target.chars().collect();
    let typed = &session.typed;

    let mut lines: Vec<Line> = Vec::with_capacity(VISIBLE_LINES);
    for line_idx in session.scroll..(session.scroll + VISIBLE_LINES) {
        let start = line_idx * WRAP_WIDTH;
        if start >= target.len() {
            break;
        }
        let end = (start + WRAP_WIDTH).min(target.len());

        let spans: Vec<Span> = (start..end)
            .map(|idx| {
                let c = target[idx].to_string();
                let style = if idx == typed.len() {
                    cursor_style
                } else if idx >= typed.len() {
                    pending_style
                } else if typed[idx] == target[idx] {
                    correct_style
                } else {
                    incorrect_style
                };
                Span::styled(c, style)
            })
            .collect();

        lines.push(Line::from(spans));
    }

    // Centered like the original: left-aligned text in a wrap-width column,
    // clipped when the terminal is narrower than the column.
    let column_width = (WRAP_WIDTH as u16).min(chunks[3].width);
    let column = Rect {
        x: chunks[3].x + (chunks[3].width.saturating_sub(column_width)) / 2,
        y: chunks[3].y,
        width: column_width,
        height: chunks[3].height,
    };

    Paragraph::new(lines).render(column, buf);
}

fn render_results(session: &Session, area: Rect, buf: &mut Buffer) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let italic = Style::default().add_modifier(Modifier::ITALIC);

    let lines = vec![
        Line::from(Span::styled("Test completed!", bold)),
        Line::default(),
        Line::from(Span::raw(format!("WPM: {}", session.wpm))),
        Line::default(),
        Line::from(Span::raw(format!("Accuracy: {:.2}%", session.accuracy))),
        Line::default(),
        Line::from(Span::styled("Press 'r' to restart or 'q' to quit", italic)),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(lines.len() as u16) / 2),
            Constraint::Min(0),
        ])
        .split(area);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(chunks[1], buf);
}
