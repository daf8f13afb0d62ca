use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App, Store};
use crate::ui;
use climate_atlas::api::{hotspot_label, hotspot_score, GlobalHotspots};
use climate_atlas::config::AppConfig;
use climate_atlas::store::{unit_risk, Selection, Statistics, StoreState};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run the store once without a UI and print what it loaded
pub async fn run_headless(store: &Store, config: &AppConfig, json: bool, global: bool) -> Result<()> {
    store.initialize().await;

    let global_hotspots = if global {
        Some(
            store
                .fetch_global_hotspots(config.hotspot_threshold, config.global_limit)
                .await,
        )
    } else {
        None
    };

    if let Some(error) = store.error() {
        tracing::warn!(%error, "headless run finished with errors");
    }

    let report = build_report(
        store.api_base(),
        store.hotspot_threshold(),
        &store.snapshot(),
        global_hotspots.as_ref(),
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &HeadlessReport) {
    println!("\nClimate Vulnerability Atlas");
    println!("===========================");
    println!("API: {}", report.api_base);
    println!("Hotspot threshold: {:.1}", report.hotspot_threshold);
    println!(
        "Selection: {} / {}",
        report.selection.country, report.selection.sector
    );
    if let Some(updated) = &report.last_updated {
        println!("Last updated: {updated}");
    }
    if let Some(error) = &report.error {
        println!("Error: {error}");
    }
    println!("Requests completed: {}", report.requests_completed);

    let range = report.statistics.current_vulnerability_range;
    println!("\nStatistics:");
    println!("- Countries: {}", report.statistics.total_countries);
    println!("- Hotspots: {}", report.statistics.total_hotspots);
    println!(
        "- Vulnerability: min {:.1} / avg {:.1} / max {:.1}",
        range.min, range.average, range.max
    );

    println!("\nCountries:");
    for country in &report.countries {
        println!(
            "- {} ({}) | {}",
            country.name,
            country.code,
            country.sectors.join(", ")
        );
    }

    println!("\nRisk Distribution:");
    for (level, count) in &report.risk_distribution {
        println!("- {level}: {count}");
    }

    println!("\nUnits:");
    for unit in &report.units {
        println!(
            "- {} | {:.1} | {} | {}",
            unit.name, unit.raw_score, unit.risk_level, unit.color
        );
    }

    println!("\nHotspots:");
    print_hotspots(&report.hotspots);

    if let Some(global) = &report.global_hotspots {
        println!("\nGlobal Hotspots:");
        print_hotspots(global);
    }
}

fn print_hotspots(hotspots: &[HeadlessHotspot]) {
    if hotspots.is_empty() {
        println!("- (none)");
    }
    for hotspot in hotspots {
        match hotspot.score {
            Some(score) => println!("- {} | {score:.1}", hotspot.label),
            None => println!("- {}", hotspot.label),
        }
    }
}

fn build_report(
    api_base: &str,
    hotspot_threshold: f64,
    state: &StoreState,
    global: Option<&GlobalHotspots>,
) -> HeadlessReport {
    let countries = state
        .countries
        .iter()
        .map(|country| HeadlessCountry {
            code: country.code.clone(),
            name: country.name.clone(),
            sectors: country.sectors.clone(),
        })
        .collect();

    let units = state
        .current_choropleth_data
        .iter()
        .map(|unit| {
            let level = unit_risk(unit);
            HeadlessUnit {
                name: unit.name.clone(),
                value: unit.value,
                raw_score: unit.raw_score,
                risk_level: level.label(),
                color: level.color_hex(),
            }
        })
        .collect();

    let risk_distribution = state
        .risk_distribution()
        .into_iter()
        .map(|(level, count)| (level.label().to_string(), count))
        .collect();

    HeadlessReport {
        api_base: api_base.to_string(),
        hotspot_threshold,
        selection: state.selection.clone(),
        statistics: state.statistics.clone(),
        countries,
        units,
        risk_distribution,
        hotspots: headless_hotspots(&state.current_hotspots),
        global_hotspots: global.map(|global| headless_hotspots(&global.hotspots)),
        error: state.error.clone(),
        requests_completed: state.requests.completed(),
        last_updated: state.last_updated.map(|at| at.to_rfc3339()),
    }
}

fn headless_hotspots(hotspots: &[serde_json::Value]) -> Vec<HeadlessHotspot> {
    hotspots
        .iter()
        .map(|hotspot| HeadlessHotspot {
            label: hotspot_label(hotspot),
            score: hotspot_score(hotspot),
        })
        .collect()
}

#[derive(Debug, serde::Serialize)]
struct HeadlessReport {
    api_base: String,
    hotspot_threshold: f64,
    selection: Selection,
    statistics: Statistics,
    countries: Vec<HeadlessCountry>,
    units: Vec<HeadlessUnit>,
    risk_distribution: Vec<(String, usize)>,
    hotspots: Vec<HeadlessHotspot>,
    global_hotspots: Option<Vec<HeadlessHotspot>>,
    error: Option<String>,
    requests_completed: u64,
    last_updated: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessCountry {
    code: String,
    name: String,
    sectors: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessUnit {
    name: String,
    value: f64,
    raw_score: f64,
    risk_level: &'static str,
    color: &'static str,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessHotspot {
    label: String,
    score: Option<f64>,
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code);
            }
            Ok(Event::Resize(_, _)) => {
                // Redrawn on the next pass
            }
            Ok(_) | Err(_) => {}
        }
    }

    tracing::info!(location = %app.location, "event loop finished");
    Ok(())
}
