use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use climate_atlas::routes::Route;
use crossterm::event::KeyCode;

pub fn handle_landing_input(app: &mut App, key: KeyCode) {
    if app.search_active {
        handle_search_input(app, key);
        return;
    }

    let countries = app.visible_countries().len();
    let sectors = app.highlighted_sectors().len();

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Esc => {
            if app.search_query.is_empty() {
                app.running = false;
            } else {
                app.clear_search();
            }
        }
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        KeyCode::Up => {
            app.selected_country_index = wrap_decrement(app.selected_country_index, countries);
            app.selected_sector_index = 0;
        }
        KeyCode::Down => {
            app.selected_country_index = wrap_increment(app.selected_country_index, countries);
            app.selected_sector_index = 0;
        }
        KeyCode::Left => {
            app.selected_sector_index = wrap_decrement(app.selected_sector_index, sectors);
        }
        KeyCode::Right => {
            app.selected_sector_index = wrap_increment(app.selected_sector_index, sectors);
        }
        KeyCode::Enter => app.select_highlighted(),
        KeyCode::Char('m') | KeyCode::Tab => app.navigate(Route::MapVisualization.path()),
        KeyCode::Char('r') => app.refresh(),
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => {
            app.search_active = false;
        }
        KeyCode::Backspace => {
            app.search_query.pop();
            app.update_search();
        }
        KeyCode::Char(ch) => {
            app.search_query.push(ch);
            app.update_search();
        }
        _ => {}
    }
}
