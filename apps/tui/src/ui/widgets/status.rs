use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, BRAILLE_SIX};

/// One-line footer: spinner while requests are out, then error or status,
/// then when data last arrived.
pub fn render_status_line(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(10),
            Constraint::Length(24),
        ])
        .split(area);

    if app.snapshot.is_loading() {
        let throbber = Throbber::default()
            .label(format!("Loading {}", app.snapshot.outstanding_requests()))
            .style(Style::default().fg(Color::Cyan))
            .throbber_set(BRAILLE_SIX);
        let mut state = app.throbber_state.clone();
        f.render_stateful_widget(throbber, chunks[0], &mut state);
    }

    let pending = app.snapshot.requests.pending_endpoints();
    let message = match &app.snapshot.error {
        Some(error) => Span::styled(error.clone(), Style::default().fg(Color::Red)),
        None if !pending.is_empty() => Span::styled(
            format!("Fetching {}", pending.join(", ")),
            Style::default().fg(Color::Cyan),
        ),
        None => Span::styled(app.status_message.clone(), Style::default().fg(Color::Gray)),
    };
    f.render_widget(Paragraph::new(TextLine::from(message)), chunks[1]);

    let updated = app.snapshot.last_updated.map_or_else(
        || "Not loaded".to_string(),
        |at| format!("Updated {}", at.format("%H:%M:%S")),
    );
    f.render_widget(
        Paragraph::new(updated)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Right),
        chunks[2],
    );
}
