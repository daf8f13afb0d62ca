// UI module for climate-atlas
// Picks the screen for the current route and draws the shared chrome

pub mod screens;
pub mod widgets;

use crate::app::App;
use climate_atlas::routes::Route;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(f.area());

    match app.route {
        Route::Landing => screens::landing::render_landing(app, f, chunks[0]),
        Route::MapVisualization => screens::maps::render_maps(app, f, chunks[0]),
    }

    widgets::status::render_status_line(app, f, chunks[1]);

    if app.show_help {
        screens::help::render_help(app, f);
    }
}
