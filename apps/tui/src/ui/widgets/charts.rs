use crate::app::App;
use crate::ui::widgets::legend::{risk_color, score_color};
use climate_atlas::domain::RiskLevel;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

const fn short_label(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::VeryHigh => "VHigh",
        RiskLevel::High => "High",
        RiskLevel::Medium => "Med",
        RiskLevel::Low => "Low",
        RiskLevel::VeryLow => "VLow",
    }
}

pub fn render_risk_barchart(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Risk Distribution")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.snapshot.current_choropleth_data.is_empty() {
        let paragraph = Paragraph::new("No units loaded")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let distribution = app.snapshot.risk_distribution();
    let bars: Vec<Bar<'_>> = distribution
        .iter()
        .map(|(level, count)| {
            Bar::default()
                .value(*count as u64)
                .label(TextLine::from(short_label(*level)))
                .style(Style::default().fg(risk_color(*level)))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(risk_color(*level))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max_value = distribution
        .iter()
        .map(|(_, count)| *count as u64)
        .max()
        .unwrap_or(0)
        .max(1);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(5);

    f.render_widget(chart, area);
}

/// Gauge for the average score, labelled with the min/max spread.
pub fn render_range_gauge(app: &App, f: &mut Frame<'_>, area: Rect) {
    let range = app.snapshot.statistics.current_vulnerability_range;
    let ratio = (range.average / 100.0).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title("Vulnerability Range")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .gauge_style(Style::default().fg(score_color(range.average)))
        .ratio(ratio)
        .label(format!(
            "avg {:.1} (min {:.1}, max {:.1})",
            range.average, range.min, range.max
        ));

    f.render_widget(gauge, area);
}
