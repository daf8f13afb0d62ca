use climate_atlas::api::{ClimateApi, GlobalHotspots, HttpTransport};
use climate_atlas::config::AppConfig;
use climate_atlas::store::{ClimateStore, Selection};
use color_eyre::Result;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub type Store = ClimateStore<HttpTransport>;

/// Completion notices sent back from spawned store actions.
#[derive(Debug)]
pub enum ActionEvent {
    Initialized,
    SelectionLoaded { country: String, sector: String },
    GlobalHotspots(GlobalHotspots),
}

/// Runs store actions in the background so the UI keeps drawing.
#[derive(Debug)]
pub struct AppActions {
    store: Arc<Store>,
    tx: UnboundedSender<ActionEvent>,
    rx: UnboundedReceiver<ActionEvent>,
}

impl AppActions {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_store(Arc::new(build_store(config)?)))
    }

    pub fn with_store(store: Arc<Store>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { store, tx, rx }
    }

    pub const fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn try_next_event(&mut self) -> Option<ActionEvent> {
        self.rx.try_recv().ok()
    }

    pub fn initialize(&self) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            store.initialize().await;
            let _ = tx.send(ActionEvent::Initialized);
        });
    }

    pub fn change_selection(&self, country: &str, sector: &str) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        let (country, sector) = (country.to_string(), sector.to_string());
        tokio::spawn(async move {
            store.change_country_and_sector(&country, &sector).await;
            let _ = tx.send(ActionEvent::SelectionLoaded { country, sector });
        });
    }

    pub fn fetch_global_hotspots(&self, threshold: f64, limit: usize) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let hotspots = store.fetch_global_hotspots(threshold, limit).await;
            let _ = tx.send(ActionEvent::GlobalHotspots(hotspots));
        });
    }
}

pub fn build_store(config: &AppConfig) -> Result<Store> {
    let transport = HttpTransport::new(config.timeout)?;
    let api = ClimateApi::new(config.api_base.clone(), transport);
    let selection = Selection::new(config.country.clone(), config.sector.clone());
    Ok(ClimateStore::with_selection(api, selection).with_hotspot_threshold(config.hotspot_threshold))
}
