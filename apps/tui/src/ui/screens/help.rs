use crate::app::App;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use climate_atlas::routes::Route;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const LANDING_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "Move between countries"),
    ("←/→", "Move between sectors"),
    ("Enter", "Load the highlighted country and sector"),
    ("/", "Fuzzy search countries"),
    ("m, Tab", "Open the map view"),
    ("r", "Reload countries, summary and the current selection"),
    ("q", "Quit"),
];

const MAP_KEYS: &[(&str, &str)] = &[
    ("↑/↓ PgUp/PgDn", "Move in the focused table"),
    ("Home/End", "Jump to first or last row"),
    ("Tab", "Switch between units and hotspots"),
    ("←/→", "Cycle the sector"),
    ("g", "Toggle global hotspots"),
    ("r", "Reload the current selection"),
    ("h, ESC", "Back to the overview"),
    ("q", "Quit"),
];

pub fn render_help(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(ClearWidget, area);

    let keys = match app.route {
        Route::Landing => LANDING_KEYS,
        Route::MapVisualization => MAP_KEYS,
    };

    let mut lines: Vec<TextLine<'_>> = keys
        .iter()
        .map(|(key, action)| {
            TextLine::from(vec![
                Span::styled(
                    format!("{key:<16}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        format!("API: {}", app.config.api_base),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(TextLine::from(Span::styled(
        "F1, ? or ESC closes this window",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!("Help: {}", app.route.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(paragraph, area);
}
