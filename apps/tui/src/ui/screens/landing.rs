use crate::app::App;
use crate::ui::widgets::legend::render_risk_legend;
use crate::ui::widgets::tables::{header_style, scroll_offset, selected_row_style};
use climate_atlas::routes::Route;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

pub fn render_landing(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new(Route::Landing.title())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_summary(app, f, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    render_country_table(app, f, body[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(7)])
        .split(body[1]);
    render_sector_list(app, f, side[0]);
    render_risk_legend(f, side[1]);

    render_landing_footer(app, f, chunks[3]);
}

fn render_summary(app: &App, f: &mut Frame<'_>, area: Rect) {
    let stats = &app.snapshot.statistics;
    let range = stats.current_vulnerability_range;
    let mut lines = vec![TextLine::from(vec![
        Span::styled("Countries: ", Style::default().fg(Color::Yellow)),
        Span::raw(stats.total_countries.to_string()),
        Span::styled("   Hotspots: ", Style::default().fg(Color::Yellow)),
        Span::raw(stats.total_hotspots.to_string()),
        Span::styled("   Average vulnerability: ", Style::default().fg(Color::Yellow)),
        Span::raw(format!("{:.1}", range.average)),
    ])];

    if let Some(summary) = &app.snapshot.system_summary {
        let entries = summary
            .scalar_entries()
            .into_iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("   ");
        lines.push(TextLine::from(Span::styled(
            entries,
            Style::default().fg(Color::Gray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Summary").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_country_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let countries = app.visible_countries();
    let title = if app.search_query.is_empty() {
        format!("Countries ({})", countries.len())
    } else {
        format!("Countries matching \"{}\" ({})", app.search_query, countries.len())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    if countries.is_empty() {
        let message = if app.snapshot.is_loading() {
            "Loading countries..."
        } else {
            "No countries found."
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Name"),
        Cell::from("Code"),
        Cell::from("Sectors"),
        Cell::from("Sources"),
    ])
    .style(header_style());

    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(countries.len(), max_visible_rows, app.selected_country_index);
    let selected_code = &app.snapshot.selection.country;

    let rows = countries
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, country)| {
            let marker = if country.code.eq_ignore_ascii_case(selected_code) {
                "*"
            } else {
                ""
            };
            let style = if index == app.selected_country_index {
                selected_row_style()
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(marker),
                Cell::from(country.name.clone()),
                Cell::from(country.code.clone()),
                Cell::from(country.sectors.len().to_string()),
                Cell::from(country.data_sources.to_string()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(1),
        Constraint::Min(12),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);
    f.render_widget(table, area);
}

fn render_sector_list(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = app
        .highlighted_country()
        .map_or_else(|| "Sectors".to_string(), |country| format!("Sectors in {}", country.name));

    let items: Vec<ListItem<'_>> = app
        .highlighted_sectors()
        .into_iter()
        .enumerate()
        .map(|(index, sector)| {
            let style = if index == app.selected_sector_index {
                selected_row_style()
            } else {
                Style::default()
            };
            ListItem::new(sector).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, area);
}

fn render_landing_footer(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key = |text: &'static str| {
        Span::styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let line = if app.search_active {
        TextLine::from(vec![
            Span::raw("Search: "),
            Span::styled(
                format!("{}_", app.search_query),
                Style::default().fg(Color::White),
            ),
            Span::raw("   "),
            key("Enter"),
            Span::raw(": Keep filter   "),
            key("ESC"),
            Span::raw(": Clear"),
        ])
    } else {
        TextLine::from(vec![
            key("↑/↓"),
            Span::raw(": Country   "),
            key("←/→"),
            Span::raw(": Sector   "),
            key("Enter"),
            Span::raw(": Explore   "),
            key("/"),
            Span::raw(": Search   "),
            key("m"),
            Span::raw(": Maps   "),
            key("r"),
            Span::raw(": Refresh   "),
            key("?"),
            Span::raw(": Help   "),
            key("q"),
            Span::raw(": Quit"),
        ])
    };

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
