use crate::app::{App, MapPanel};
use crate::ui::widgets::charts::{render_range_gauge, render_risk_barchart};
use crate::ui::widgets::legend::{risk_color, score_color};
use crate::ui::widgets::tables::{header_style, scroll_offset, selected_row_style};
use climate_atlas::api::{hotspot_label, hotspot_score};
use climate_atlas::routes::Route;
use climate_atlas::store::unit_risk;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs};
use ratatui::Frame;
use serde_json::Value;

pub fn render_maps(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(app, f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_choropleth_table(app, f, body[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .split(body[1]);
    render_risk_barchart(app, f, side[0]);
    render_range_gauge(app, f, side[1]);

    if app.show_global {
        render_global_hotspots(app, f, side[2]);
    } else {
        render_hotspot_table(app, f, side[2]);
    }

    render_maps_footer(f, chunks[2]);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let selection = &app.snapshot.selection;
    let mut country = app
        .snapshot
        .selected_country()
        .map_or_else(|| selection.country.clone(), |country| country.name.clone());
    if app.snapshot.is_default_country() {
        country.push_str(" (default)");
    }

    let sectors = app.snapshot.available_sectors();
    let selected = sectors
        .iter()
        .position(|sector| sector.eq_ignore_ascii_case(&selection.sector))
        .unwrap_or(0);
    let titles = sectors
        .iter()
        .map(|sector| TextLine::from(sector.clone()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .title(format!("{}: {country}", Route::MapVisualization.title()))
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn panel_block(app: &App, panel: MapPanel, title: String) -> Block<'static> {
    let color = if app.focus == panel {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn render_choropleth_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let units = &app.snapshot.current_choropleth_data;
    let block = panel_block(
        app,
        MapPanel::Choropleth,
        format!("Administrative Units ({})", units.len()),
    );

    if units.is_empty() {
        let message = if app.snapshot.is_loading() {
            "Loading units..."
        } else {
            "No vulnerability data for this selection."
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Unit"),
        Cell::from("Score"),
        Cell::from("Value"),
        Cell::from("Risk"),
    ])
    .style(header_style());

    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(units.len(), max_visible_rows, app.selected_unit_index);
    let focused = app.focus == MapPanel::Choropleth;

    let rows = units
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, unit)| {
            let level = unit_risk(unit);
            let style = if focused && index == app.selected_unit_index {
                selected_row_style()
            } else {
                Style::default().fg(risk_color(level))
            };
            Row::new(vec![
                Cell::from(unit.name.clone()),
                Cell::from(format!("{:.1}", unit.raw_score)),
                Cell::from(format!("{:.1}", unit.value)),
                Cell::from(level.label()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Min(14),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);
    f.render_widget(table, area);
}

fn hotspot_rows<'a>(
    hotspots: &'a [Value],
    selected: Option<usize>,
    max_visible_rows: usize,
) -> impl Iterator<Item = Row<'a>> {
    let offset = scroll_offset(hotspots.len(), max_visible_rows, selected.unwrap_or(0));
    hotspots
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(move |(index, hotspot)| {
            let score = hotspot_score(hotspot);
            let style = if selected == Some(index) {
                selected_row_style()
            } else {
                score.map_or_else(Style::default, |score| {
                    Style::default().fg(score_color(score))
                })
            };
            Row::new(vec![
                Cell::from(hotspot_label(hotspot)),
                Cell::from(score.map_or_else(|| "-".to_string(), |score| format!("{score:.1}"))),
            ])
            .style(style)
        })
}

fn render_hotspot_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let hotspots = &app.snapshot.current_hotspots;
    let block = panel_block(
        app,
        MapPanel::Hotspots,
        format!(
            "Hotspots >= {:.0} ({})",
            app.config.hotspot_threshold, app.snapshot.statistics.total_hotspots
        ),
    );

    if hotspots.is_empty() {
        let paragraph = Paragraph::new("No hotspots above the threshold.")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let selected = (app.focus == MapPanel::Hotspots).then_some(app.selected_hotspot_index);
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let rows = hotspot_rows(hotspots, selected, max_visible_rows);

    let table = Table::new(rows, [Constraint::Min(14), Constraint::Length(7)])
        .header(Row::new(vec![Cell::from("Location"), Cell::from("Score")]).style(header_style()))
        .block(block)
        .column_spacing(1);
    f.render_widget(table, area);
}

fn render_global_hotspots(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(
            "Global Hotspots (top {}, >= {:.0})",
            app.config.global_limit, app.config.hotspot_threshold
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let Some(global) = &app.global_hotspots else {
        let paragraph = Paragraph::new("Loading global hotspots...")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    if global.hotspots.is_empty() {
        let paragraph = Paragraph::new("No global hotspots returned.")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let rows = hotspot_rows(&global.hotspots, None, max_visible_rows);
    let table = Table::new(rows, [Constraint::Min(14), Constraint::Length(7)])
        .header(Row::new(vec![Cell::from("Location"), Cell::from("Score")]).style(header_style()))
        .block(block)
        .column_spacing(1);
    f.render_widget(table, area);
}

fn render_maps_footer(f: &mut Frame<'_>, area: Rect) {
    let key = |text: &'static str| {
        Span::styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let line = TextLine::from(vec![
        key("ESC"),
        Span::raw(": Overview   "),
        key("Tab"),
        Span::raw(": Switch panel   "),
        key("←/→"),
        Span::raw(": Sector   "),
        key("g"),
        Span::raw(": Global   "),
        key("r"),
        Span::raw(": Refresh   "),
        key("?"),
        Span::raw(": Help   "),
        key("q"),
        Span::raw(": Quit"),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
