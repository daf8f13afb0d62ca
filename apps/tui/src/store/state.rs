use crate::api::{ChoroplethData, CountryData, SystemSummary, VulnerabilityRange};
use crate::domain::RiskLevel;
use crate::store::requests::RequestTracker;
use crate::store::selection::{Selection, SelectionTag, DEFAULT_COUNTRY, DEFAULT_SECTOR};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub total_countries: usize,
    pub total_hotspots: usize,
    pub current_vulnerability_range: VulnerabilityRange,
}

/// Everything the store knows. Views render from clones of this.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub selection: Selection,
    pub generation: u64,
    pub requests: RequestTracker,
    pub error: Option<String>,
    /// Endpoint whose failure set `error`; its next success clears it.
    pub error_endpoint: Option<String>,
    pub countries: Vec<CountryData>,
    pub current_choropleth_data: Vec<ChoroplethData>,
    pub current_hotspots: Vec<Value>,
    pub system_summary: Option<SystemSummary>,
    pub statistics: Statistics,
    pub last_updated: Option<DateTime<Local>>,
}

impl StoreState {
    pub fn with_selection(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn tag_for(&self, country: &str, sector: &str) -> SelectionTag {
        SelectionTag {
            generation: self.generation,
            country: country.to_string(),
            sector: sector.to_string(),
        }
    }

    pub fn accepts(&self, tag: &SelectionTag) -> bool {
        tag.is_current(&self.selection, self.generation)
    }

    /// Replaces the selection and invalidates every request tagged before it.
    pub fn select(&mut self, country: &str, sector: &str) {
        self.selection = Selection::new(country, sector);
        self.generation += 1;
    }

    pub fn selected_country(&self) -> Option<&CountryData> {
        let wanted = self.selection.country.to_lowercase();
        self.countries
            .iter()
            .find(|country| country.code.to_lowercase() == wanted)
    }

    pub fn available_sectors(&self) -> Vec<String> {
        self.selected_country().map_or_else(
            || vec![DEFAULT_SECTOR.to_string()],
            |country| country.sectors.clone(),
        )
    }

    pub fn is_default_country(&self) -> bool {
        self.selection.country == DEFAULT_COUNTRY
    }

    pub fn has_multiple_sectors(&self) -> bool {
        self.available_sectors().len() > 1
    }

    pub fn is_loading(&self) -> bool {
        self.requests.is_loading()
    }

    pub fn outstanding_requests(&self) -> usize {
        self.requests.outstanding()
    }

    /// Units per risk band, highest band first.
    ///
    /// Uses the unit's `level` when the API sends a known label, else its
    /// raw score.
    pub fn risk_distribution(&self) -> Vec<(RiskLevel, usize)> {
        RiskLevel::ALL
            .iter()
            .map(|band| {
                let count = self
                    .current_choropleth_data
                    .iter()
                    .filter(|unit| unit_risk(unit) == *band)
                    .count();
                (*band, count)
            })
            .collect()
    }
}

pub fn unit_risk(unit: &ChoroplethData) -> RiskLevel {
    RiskLevel::parse(&unit.level).unwrap_or_else(|| RiskLevel::from_score(unit.raw_score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn country(code: &str, sectors: &[&str]) -> CountryData {
        CountryData {
            id: 1,
            name: code.to_string(),
            code: code.to_string(),
            sectors: sectors.iter().map(ToString::to_string).collect(),
            data_sources: 2,
        }
    }

    #[test]
    fn unknown_country_falls_back_to_agriculture() {
        let mut state = StoreState::with_selection(Selection::new("atlantis", "water"));
        state.countries = vec![country("ghana", &["agriculture", "water"])];
        assert_eq!(state.available_sectors(), vec!["agriculture".to_string()]);
        assert!(!state.has_multiple_sectors());
    }

    #[test]
    fn sector_lookup_ignores_case() {
        let mut state = StoreState::with_selection(Selection::new("GHANA", "agriculture"));
        state.countries = vec![country("ghana", &["agriculture", "health"])];
        assert_eq!(state.available_sectors(), vec!["agriculture", "health"]);
        assert!(state.has_multiple_sectors());

        state.selection = Selection::new("kenya", "water");
        state.countries = vec![country("KENYA", &["water"])];
        assert_eq!(state.available_sectors(), vec!["water"]);
    }

    #[test]
    fn default_country_check_is_exact() {
        let mut state = StoreState::default();
        assert!(state.is_default_country());
        state.select("kenya", "agriculture");
        assert!(!state.is_default_country());
    }

    #[test]
    fn select_bumps_generation_and_stales_old_tags() {
        let mut state = StoreState::default();
        let tag = state.tag_for("ghana", "agriculture");
        assert!(state.accepts(&tag));

        state.select("ghana", "agriculture");
        assert!(!state.accepts(&tag));
        assert!(state.accepts(&state.tag_for("ghana", "agriculture")));
        assert!(!state.accepts(&state.tag_for("kenya", "agriculture")));
    }

    #[test]
    fn distribution_prefers_level_then_score() {
        let mut state = StoreState::default();
        state.current_choropleth_data = vec![
            ChoroplethData {
                name: "Accra".into(),
                value: 75.0,
                raw_score: 75.0,
                level: "High".into(),
                data: json!({}),
            },
            ChoroplethData {
                name: "Tamale".into(),
                value: 90.0,
                raw_score: 90.0,
                level: "unknown".into(),
                data: json!({}),
            },
        ];

        let distribution = state.risk_distribution();
        assert_eq!(distribution[0], (RiskLevel::VeryHigh, 1));
        assert_eq!(distribution[1], (RiskLevel::High, 1));
        assert_eq!(distribution.iter().map(|(_, n)| n).sum::<usize>(), 2);
    }
}
