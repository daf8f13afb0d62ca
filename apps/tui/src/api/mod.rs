// Client for the climate vulnerability HTTP API

pub mod client;
pub mod error;
#[cfg(test)]
pub mod fake;
pub mod models;
pub mod transport;

pub use client::{ClimateApi, DEFAULT_API_BASE};
pub use error::ApiError;
pub use models::{
    hotspot_label, hotspot_score, ApiEnvelope, ChoroplethData, ChoroplethPayload, CountryData,
    GlobalHotspots, HotspotPayload, SystemSummary, VulnerabilityRange,
};
pub use transport::{HttpTransport, Transport};
