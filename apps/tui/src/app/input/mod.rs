mod helpers;
pub mod screens;

use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_input(app: &mut App, key: KeyCode) {
    screens::dispatch_input(app, key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::AppActions;
    use crate::app::state::MapPanel;
    use climate_atlas::api::CountryData;
    use climate_atlas::config::AppConfig;
    use climate_atlas::routes::Route;

    fn app() -> Result<App, Box<dyn std::error::Error>> {
        let config = AppConfig {
            api_base: "http://127.0.0.1:9/api".to_string(),
            ..AppConfig::default()
        };
        Ok(App::new(AppActions::new(&config)?, config))
    }

    #[test]
    fn tab_on_maps_switches_focused_panel() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.navigate("/maps");
        handle_input(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, MapPanel::Hotspots);
        assert_eq!(app.location, "/maps#hotspots");
        handle_input(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, MapPanel::Choropleth);

        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Landing);
        Ok(())
    }

    #[test]
    fn search_mode_captures_letters() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.snapshot.countries = vec![CountryData {
            id: 1,
            name: "Kenya".to_string(),
            code: "kenya".to_string(),
            sectors: vec!["water".to_string()],
            data_sources: 1,
        }];

        handle_input(&mut app, KeyCode::Char('/'));
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.search_query, "q");

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.search_active);
        assert!(app.search_query.is_empty());

        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
        Ok(())
    }

    #[test]
    fn help_swallows_keys_until_closed() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        handle_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        Ok(())
    }
}
