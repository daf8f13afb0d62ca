use crate::app::actions::{ActionEvent, AppActions};
use climate_atlas::api::{CountryData, GlobalHotspots};
use climate_atlas::config::AppConfig;
use climate_atlas::routes::{self, Route, ScrollTarget};
use climate_atlas::store::StoreState;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;

const THROBBER_STEP: Duration = Duration::from_millis(120);

/// Which table has focus on the Maps view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPanel {
    Choropleth,
    Hotspots,
}

impl MapPanel {
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Choropleth => "choropleth",
            Self::Hotspots => "hotspots",
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::Choropleth => Self::Hotspots,
            Self::Hotspots => Self::Choropleth,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub route: Route,
    pub location: String,
    pub actions: AppActions,
    pub snapshot: StoreState,
    pub config: AppConfig,
    pub show_help: bool,
    pub status_message: String,
    pub focus: MapPanel,
    pub selected_country_index: usize,
    pub selected_sector_index: usize,
    pub selected_unit_index: usize,
    pub selected_hotspot_index: usize,
    pub search_active: bool,
    pub search_query: String,
    pub filtered_country_indices: Vec<usize>,
    pub global_hotspots: Option<GlobalHotspots>,
    pub show_global: bool,
    pub throbber_state: ThrobberState,
    pub last_throbber_step: Instant,
}

impl App {
    pub fn new(actions: AppActions, config: AppConfig) -> Self {
        let snapshot = actions.store().snapshot();
        Self {
            running: true,
            route: Route::Landing,
            location: Route::Landing.path().to_string(),
            actions,
            snapshot,
            config,
            show_help: false,
            status_message: String::new(),
            focus: MapPanel::Choropleth,
            selected_country_index: 0,
            selected_sector_index: 0,
            selected_unit_index: 0,
            selected_hotspot_index: 0,
            search_active: false,
            search_query: String::new(),
            filtered_country_indices: Vec::new(),
            global_hotspots: None,
            show_global: false,
            throbber_state: ThrobberState::default(),
            last_throbber_step: Instant::now(),
        }
    }

    /// Applies finished background actions and refreshes the snapshot.
    pub fn update(&mut self) {
        while let Some(event) = self.actions.try_next_event() {
            self.apply_event(event);
        }

        self.snapshot = self.actions.store().snapshot();
        self.clamp_indices();

        if self.snapshot.is_loading() && self.last_throbber_step.elapsed() >= THROBBER_STEP {
            self.throbber_state.calc_next();
            self.last_throbber_step = Instant::now();
        }
    }

    fn apply_event(&mut self, event: ActionEvent) {
        match event {
            ActionEvent::Initialized => {
                self.status_message = "Data loaded".to_string();
                self.sync_country_cursor();
            }
            ActionEvent::SelectionLoaded { country, sector } => {
                self.status_message = format!("Loaded {country} / {sector}");
            }
            ActionEvent::GlobalHotspots(hotspots) => {
                self.status_message = format!("{} global hotspots", hotspots.count);
                self.global_hotspots = Some(hotspots);
            }
        }
    }

    /// Moves to `location`, applying the route table's scroll policy.
    pub fn navigate(&mut self, location: &str) {
        let Some(navigation) = routes::resolve(location) else {
            self.status_message = format!("Error: no view at {location}");
            return;
        };

        self.route = navigation.route;
        self.location = location.to_string();

        match routes::scroll_behavior(&navigation) {
            ScrollTarget::Top => {
                self.selected_unit_index = 0;
                self.selected_hotspot_index = 0;
                self.show_global = false;
            }
            ScrollTarget::Element { id, .. } => match id.as_str() {
                "choropleth" => self.focus = MapPanel::Choropleth,
                "hotspots" => self.focus = MapPanel::Hotspots,
                "global" => self.show_global = true,
                _ => {}
            },
        }
    }

    /// Countries as shown on the Landing list, honouring the search filter.
    pub fn visible_countries(&self) -> Vec<&CountryData> {
        if self.search_query.is_empty() {
            return self.snapshot.countries.iter().collect();
        }
        self.filtered_country_indices
            .iter()
            .filter_map(|index| self.snapshot.countries.get(*index))
            .collect()
    }

    pub fn highlighted_country(&self) -> Option<&CountryData> {
        self.visible_countries()
            .get(self.selected_country_index)
            .copied()
    }

    /// Sectors offered for the highlighted country.
    pub fn highlighted_sectors(&self) -> Vec<String> {
        self.highlighted_country()
            .map(|country| country.sectors.clone())
            .filter(|sectors| !sectors.is_empty())
            .unwrap_or_else(|| self.snapshot.available_sectors())
    }

    pub fn update_search(&mut self) {
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = self
            .snapshot
            .countries
            .iter()
            .enumerate()
            .filter_map(|(index, country)| {
                let name = matcher.fuzzy_match(&country.name, &self.search_query);
                let code = matcher.fuzzy_match(&country.code, &self.search_query);
                name.max(code).map(|score| (score, index))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        self.filtered_country_indices = scored.into_iter().map(|(_, index)| index).collect();
        self.selected_country_index = 0;
        self.selected_sector_index = 0;
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
        self.filtered_country_indices.clear();
        self.sync_country_cursor();
    }

    /// Puts the Landing cursor on the currently selected country.
    pub fn sync_country_cursor(&mut self) {
        let selection = &self.snapshot.selection;
        let found = self.visible_countries().iter().enumerate().find_map(|(index, country)| {
            country
                .code
                .eq_ignore_ascii_case(&selection.country)
                .then(|| {
                    let sector = country
                        .sectors
                        .iter()
                        .position(|sector| sector.eq_ignore_ascii_case(&selection.sector))
                        .unwrap_or(0);
                    (index, sector)
                })
        });

        if let Some((country_index, sector_index)) = found {
            self.selected_country_index = country_index;
            self.selected_sector_index = sector_index;
        }
    }

    /// Commits the highlighted country/sector and opens the map.
    pub fn select_highlighted(&mut self) {
        let Some(country) = self
            .highlighted_country()
            .map(|country| country.code.to_lowercase())
        else {
            self.status_message = "Error: no country highlighted".to_string();
            return;
        };
        let sectors = self.highlighted_sectors();
        let Some(sector) = sectors.get(self.selected_sector_index).cloned() else {
            self.status_message = "Error: no sector available".to_string();
            return;
        };

        self.status_message = format!("Loading {country} / {sector}...");
        self.actions.change_selection(&country, &sector);
        self.navigate(Route::MapVisualization.path());
    }

    /// Cycles the sector on the Maps view, refetching for the new pair.
    pub fn cycle_sector(&mut self, forward: bool) {
        if !self.snapshot.has_multiple_sectors() {
            self.status_message = "Only one sector available".to_string();
            return;
        }

        let sectors = self.snapshot.available_sectors();
        let current = sectors
            .iter()
            .position(|sector| sector.eq_ignore_ascii_case(&self.snapshot.selection.sector))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % sectors.len()
        } else {
            (current + sectors.len() - 1) % sectors.len()
        };

        let country = self.snapshot.selection.country.clone();
        self.status_message = format!("Loading {country} / {}...", sectors[next]);
        self.actions.change_selection(&country, &sectors[next]);
        self.selected_unit_index = 0;
        self.selected_hotspot_index = 0;
    }

    pub fn refresh(&mut self) {
        self.status_message = "Refreshing...".to_string();
        self.global_hotspots = None;
        if self.show_global {
            self.actions
                .fetch_global_hotspots(self.config.hotspot_threshold, self.config.global_limit);
        }
        match self.route {
            Route::Landing => self.actions.initialize(),
            Route::MapVisualization => {
                let selection = self.snapshot.selection.clone();
                self.actions
                    .change_selection(&selection.country, &selection.sector);
            }
        }
    }

    pub fn toggle_global_hotspots(&mut self) {
        if self.show_global {
            self.show_global = false;
            return;
        }
        self.show_global = true;
        if self.global_hotspots.is_none() {
            self.status_message = "Loading global hotspots...".to_string();
            self.actions
                .fetch_global_hotspots(self.config.hotspot_threshold, self.config.global_limit);
        }
    }

    fn clamp_indices(&mut self) {
        let countries = self.visible_countries().len();
        self.selected_country_index = clamp(self.selected_country_index, countries);
        let sectors = self.highlighted_sectors().len();
        self.selected_sector_index = clamp(self.selected_sector_index, sectors);
        self.selected_unit_index = clamp(
            self.selected_unit_index,
            self.snapshot.current_choropleth_data.len(),
        );
        self.selected_hotspot_index =
            clamp(self.selected_hotspot_index, self.snapshot.current_hotspots.len());
    }
}

const fn clamp(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index >= len {
        len - 1
    } else {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Result<App, Box<dyn std::error::Error>> {
        let config = AppConfig {
            api_base: "http://127.0.0.1:9/api".to_string(),
            ..AppConfig::default()
        };
        let actions = AppActions::new(&config)?;
        Ok(App::new(actions, config))
    }

    fn country(code: &str, name: &str, sectors: &[&str]) -> CountryData {
        CountryData {
            id: 0,
            name: name.to_string(),
            code: code.to_string(),
            sectors: sectors.iter().map(ToString::to_string).collect(),
            data_sources: 1,
        }
    }

    #[test]
    fn navigate_with_hash_focuses_panel() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.navigate("/maps#hotspots");
        assert_eq!(app.route, Route::MapVisualization);
        assert_eq!(app.focus, MapPanel::Hotspots);

        app.selected_unit_index = 4;
        app.navigate("/maps");
        assert_eq!(app.selected_unit_index, 0);
        assert_eq!(app.focus, MapPanel::Hotspots);
        Ok(())
    }

    #[test]
    fn unknown_location_keeps_route() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.navigate("/settings");
        assert_eq!(app.route, Route::Landing);
        assert!(app.status_message.starts_with("Error"));
        Ok(())
    }

    #[test]
    fn search_filters_countries_fuzzily() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.snapshot.countries = vec![
            country("ghana", "Ghana", &["agriculture"]),
            country("kenya", "Kenya", &["water", "health"]),
            country("nigeria", "Nigeria", &["agriculture"]),
        ];
        app.search_query = "ken".to_string();
        app.update_search();

        let visible: Vec<_> = app.visible_countries().iter().map(|c| c.code.clone()).collect();
        assert_eq!(visible, vec!["kenya"]);
        assert_eq!(app.highlighted_sectors(), vec!["water", "health"]);

        app.clear_search();
        assert_eq!(app.visible_countries().len(), 3);
        Ok(())
    }

    #[test]
    fn cursor_follows_store_selection() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.snapshot.countries = vec![
            country("KENYA", "Kenya", &["water"]),
            country("GHANA", "Ghana", &["agriculture", "water"]),
        ];
        app.snapshot.selection = climate_atlas::store::Selection::new("ghana", "water");
        app.sync_country_cursor();
        assert_eq!(app.selected_country_index, 1);
        assert_eq!(app.selected_sector_index, 1);
        Ok(())
    }

    #[tokio::test]
    async fn refresh_drops_cached_global_hotspots() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.navigate("/maps");
        app.global_hotspots = Some(GlobalHotspots::default());

        app.refresh();

        assert!(app.global_hotspots.is_none());
        assert_eq!(app.status_message, "Refreshing...");
        Ok(())
    }

    #[test]
    fn clamp_keeps_index_in_range() {
        assert_eq!(clamp(5, 0), 0);
        assert_eq!(clamp(5, 3), 2);
        assert_eq!(clamp(1, 3), 1);
    }
}
