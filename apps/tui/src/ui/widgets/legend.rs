use climate_atlas::domain::RiskLevel;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const fn risk_color(level: RiskLevel) -> Color {
    let (r, g, b) = level.color_rgb();
    Color::Rgb(r, g, b)
}

pub fn score_color(score: f64) -> Color {
    risk_color(RiskLevel::from_score(score))
}

const fn band_range(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::VeryHigh => "81-100",
        RiskLevel::High => "61-80",
        RiskLevel::Medium => "41-60",
        RiskLevel::Low => "21-40",
        RiskLevel::VeryLow => "0-20",
    }
}

pub fn render_risk_legend(f: &mut Frame<'_>, area: Rect) {
    let lines: Vec<TextLine<'_>> = RiskLevel::ALL
        .iter()
        .map(|level| {
            TextLine::from(vec![
                Span::styled("██ ", Style::default().fg(risk_color(*level))),
                Span::raw(format!("{:<10}", level.label())),
                Span::styled(band_range(*level), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let legend = Paragraph::new(lines).block(
        Block::default()
            .title("Risk Levels")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(legend, area);
}
