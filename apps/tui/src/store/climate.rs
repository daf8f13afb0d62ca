use crate::api::client::endpoints;
use crate::api::{
    ApiError, ChoroplethPayload, ClimateApi, CountryData, GlobalHotspots, HotspotPayload,
    SystemSummary, Transport,
};
use crate::store::requests::RequestId;
use crate::store::selection::Selection;
use crate::store::state::StoreState;
use chrono::Local;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;

pub const DEFAULT_HOTSPOT_THRESHOLD: f64 = 70.0;
pub const DEFAULT_GLOBAL_LIMIT: usize = 50;

/// Shared climate data store.
///
/// Actions take `&self` so several of them can run concurrently against one
/// store (wrap it in an `Arc` to share it between tasks). The state lock is
/// never held across an `.await`.
#[derive(Debug)]
pub struct ClimateStore<T> {
    api: ClimateApi<T>,
    state: RwLock<StoreState>,
    hotspot_threshold: f64,
}

impl<T: Transport> ClimateStore<T> {
    pub fn new(api: ClimateApi<T>) -> Self {
        Self::with_selection(api, Selection::default())
    }

    pub fn with_selection(api: ClimateApi<T>, selection: Selection) -> Self {
        Self {
            api,
            state: RwLock::new(StoreState::with_selection(selection)),
            hotspot_threshold: DEFAULT_HOTSPOT_THRESHOLD,
        }
    }

    /// Threshold used when hotspots are fetched for the current selection.
    #[must_use]
    pub fn with_hotspot_threshold(mut self, threshold: f64) -> Self {
        self.hotspot_threshold = threshold;
        self
    }

    pub const fn hotspot_threshold(&self) -> f64 {
        self.hotspot_threshold
    }

    pub fn api_base(&self) -> &str {
        self.api.base()
    }

    pub fn snapshot(&self) -> StoreState {
        self.state.read().clone()
    }

    pub fn selection(&self) -> Selection {
        self.state.read().selection.clone()
    }

    pub fn available_sectors(&self) -> Vec<String> {
        self.state.read().available_sectors()
    }

    pub fn is_default_country(&self) -> bool {
        self.state.read().is_default_country()
    }

    pub fn has_multiple_sectors(&self) -> bool {
        self.state.read().has_multiple_sectors()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// GETs `endpoint` through the envelope.
    ///
    /// Failures are logged and recorded in the shared error field before
    /// being handed back. A later success of the same endpoint clears it.
    async fn api_call<D: DeserializeOwned>(&self, endpoint: &str) -> Result<D, ApiError> {
        let pending = PendingRequest::begin(&self.state, endpoint);
        let result = self.api.fetch(endpoint).await;
        drop(pending);

        let mut state = self.state.write();
        match &result {
            Ok(_) => {
                if state.error_endpoint.as_deref() == Some(endpoint) {
                    state.error = None;
                    state.error_endpoint = None;
                }
            }
            Err(err) => {
                tracing::error!(%endpoint, error = %err, "API call failed");
                state.error = Some(format!("Failed to load data from {endpoint}"));
                state.error_endpoint = Some(endpoint.to_string());
            }
        }
        drop(state);

        result
    }

    pub async fn fetch_countries(&self) {
        match self.api_call::<Vec<CountryData>>(endpoints::COUNTRIES).await {
            Ok(countries) => {
                tracing::info!(count = countries.len(), "countries loaded");
                let mut state = self.state.write();
                state.statistics.total_countries = countries.len();
                state.countries = countries;
                state.last_updated = Some(Local::now());
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch countries");
                let mut state = self.state.write();
                state.countries.clear();
                state.statistics.total_countries = 0;
            }
        }
    }

    pub async fn fetch_system_summary(&self) {
        match self.api_call::<SystemSummary>(endpoints::SUMMARY).await {
            Ok(summary) => {
                let mut state = self.state.write();
                if let Some(total) = summary.country_total() {
                    state.statistics.total_countries = total;
                }
                state.system_summary = Some(summary);
                state.last_updated = Some(Local::now());
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch system summary");
                self.state.write().system_summary = None;
            }
        }
    }

    /// Fetches the choropleth for `country`/`sector`.
    ///
    /// The cache is only touched when the pair is still the current selection
    /// once the response arrives; the payload is returned either way.
    pub async fn fetch_choropleth_data(
        &self,
        country: &str,
        sector: &str,
    ) -> Option<ChoroplethPayload> {
        let tag = self.state.read().tag_for(country, sector);
        let endpoint = endpoints::choropleth(country, sector);

        match self.api_call::<ChoroplethPayload>(&endpoint).await {
            Ok(payload) => {
                let mut state = self.state.write();
                if state.accepts(&tag) {
                    state.current_choropleth_data = payload.choropleth_data.clone();
                    state.statistics.current_vulnerability_range = payload.statistics;
                    state.last_updated = Some(Local::now());
                } else {
                    tracing::debug!(%country, %sector, "discarding choropleth for stale selection");
                }
                Some(payload)
            }
            Err(err) => {
                tracing::warn!(%country, %sector, error = %err, "failed to fetch choropleth data");
                let mut state = self.state.write();
                if state.accepts(&tag) {
                    state.current_choropleth_data.clear();
                }
                None
            }
        }
    }

    pub async fn fetch_current_choropleth(&self) -> Option<ChoroplethPayload> {
        let Selection { country, sector } = self.selection();
        self.fetch_choropleth_data(&country, &sector).await
    }

    pub async fn fetch_hotspots(
        &self,
        country: &str,
        sector: &str,
        threshold: f64,
    ) -> Option<HotspotPayload> {
        let tag = self.state.read().tag_for(country, sector);
        let endpoint = endpoints::hotspots(country, sector, threshold);

        match self.api_call::<HotspotPayload>(&endpoint).await {
            Ok(payload) => {
                let mut state = self.state.write();
                if state.accepts(&tag) {
                    state.current_hotspots = payload.hotspots.clone();
                    state.statistics.total_hotspots = payload.hotspot_count;
                    state.last_updated = Some(Local::now());
                } else {
                    tracing::debug!(%country, %sector, "discarding hotspots for stale selection");
                }
                Some(payload)
            }
            Err(err) => {
                tracing::warn!(%country, %sector, error = %err, "failed to fetch hotspots");
                let mut state = self.state.write();
                if state.accepts(&tag) {
                    state.current_hotspots.clear();
                    state.statistics.total_hotspots = 0;
                }
                None
            }
        }
    }

    pub async fn fetch_current_hotspots(&self) -> Option<HotspotPayload> {
        let Selection { country, sector } = self.selection();
        self.fetch_hotspots(&country, &sector, self.hotspot_threshold)
            .await
    }

    /// Hotspots across every country. Not cached.
    pub async fn fetch_global_hotspots(&self, threshold: f64, limit: usize) -> GlobalHotspots {
        let endpoint = endpoints::global_hotspots(threshold, limit);
        match self.api_call::<GlobalHotspots>(&endpoint).await {
            Ok(hotspots) => hotspots,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch global hotspots");
                GlobalHotspots::default()
            }
        }
    }

    /// Switches the selection, then refreshes choropleth and hotspots for it
    /// concurrently.
    pub async fn change_country_and_sector(&self, country: &str, sector: &str) {
        self.state.write().select(country, sector);
        tracing::info!(%country, %sector, "selection changed");

        tokio::join!(
            self.fetch_choropleth_data(country, sector),
            self.fetch_hotspots(country, sector, self.hotspot_threshold),
        );
    }

    pub async fn initialize(&self) {
        tracing::info!(api_base = %self.api.base(), "initializing climate store");
        tokio::join!(
            self.fetch_countries(),
            self.fetch_system_summary(),
            self.fetch_current_choropleth(),
            self.fetch_current_hotspots(),
        );
    }
}

/// Registry entry for one in-flight request; removed on drop so a dropped
/// future never leaves the store looking busy.
struct PendingRequest<'a> {
    state: &'a RwLock<StoreState>,
    id: RequestId,
}

impl<'a> PendingRequest<'a> {
    fn begin(state: &'a RwLock<StoreState>, endpoint: &str) -> Self {
        let id = state.write().requests.begin(endpoint);
        Self { state, id }
    }
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if let Some(elapsed) = self.state.write().requests.finish(self.id) {
            tracing::trace!(?elapsed, "request finished");
        }
    }
}
