use crate::app::state::App;
use climate_atlas::routes::Route;
use crossterm::event::KeyCode;

mod help;
mod landing;
mod maps;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.route {
        Route::Landing => landing::handle_landing_input(app, key),
        Route::MapVisualization => maps::handle_maps_input(app, key),
    }
}
