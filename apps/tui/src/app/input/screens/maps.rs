use crate::app::input::helpers::step_within;
use crate::app::state::{App, MapPanel};
use climate_atlas::routes::Route;
use crossterm::event::KeyCode;

const PAGE: isize = 5;

pub fn handle_maps_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Esc => {
            if app.show_global {
                app.show_global = false;
            } else {
                app.navigate(Route::Landing.path());
            }
        }
        KeyCode::Char('h') => app.navigate(Route::Landing.path()),
        KeyCode::Tab => {
            let target = format!("{}#{}", Route::MapVisualization.path(), app.focus.other().anchor());
            app.navigate(&target);
        }
        KeyCode::Left => app.cycle_sector(false),
        KeyCode::Right => app.cycle_sector(true),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('g') => app.toggle_global_hotspots(),
        KeyCode::Up => move_cursor(app, -1),
        KeyCode::Down => move_cursor(app, 1),
        KeyCode::PageUp => move_cursor(app, -PAGE),
        KeyCode::PageDown => move_cursor(app, PAGE),
        KeyCode::Home => move_cursor(app, isize::MIN / 2),
        KeyCode::End => move_cursor(app, isize::MAX / 2),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    match app.focus {
        MapPanel::Choropleth => {
            let len = app.snapshot.current_choropleth_data.len();
            app.selected_unit_index = step_within(app.selected_unit_index, len, delta);
        }
        MapPanel::Hotspots => {
            let len = app.snapshot.current_hotspots.len();
            app.selected_hotspot_index = step_within(app.selected_hotspot_index, len, delta);
        }
    }
}
