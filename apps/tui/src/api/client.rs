use crate::api::models::ApiEnvelope;
use crate::api::{ApiError, Transport};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Typed access to the climate API over any [`Transport`].
#[derive(Debug, Clone)]
pub struct ClimateApi<T> {
    base: String,
    transport: T,
}

impl<T: Transport> ClimateApi<T> {
    pub fn new(base: impl Into<String>, transport: T) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base, transport }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base)
    }

    /// GETs `endpoint` and unwraps its envelope.
    ///
    /// `data` is only decoded when the envelope reports `success: true`.
    pub async fn fetch<D: DeserializeOwned>(&self, endpoint: &str) -> Result<D, ApiError> {
        let body = self.transport.get(&self.url(endpoint)).await?;
        let envelope: ApiEnvelope<Value> = serde_json::from_value(body)?;

        if !envelope.success {
            return Err(ApiError::Application(envelope.message));
        }

        let data = envelope
            .data
            .ok_or_else(|| ApiError::MissingData(endpoint.to_string()))?;
        Ok(serde_json::from_value(data)?)
    }
}

/// Endpoint paths, relative to the API base.
pub mod endpoints {
    pub const COUNTRIES: &str = "/countries";
    pub const SUMMARY: &str = "/summary";

    pub fn choropleth(country: &str, sector: &str) -> String {
        format!("/{country}/{sector}/choropleth")
    }

    pub fn hotspots(country: &str, sector: &str, threshold: f64) -> String {
        format!("/{country}/{sector}/hotspots?threshold={threshold}")
    }

    pub fn global_hotspots(threshold: f64, limit: usize) -> String {
        format!("/vulnerability/hotspots?threshold={threshold}&limit={limit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeTransport;
    use crate::api::models::{ChoroplethPayload, CountryData, GlobalHotspots, SystemSummary};
    use serde_json::json;

    #[test]
    fn endpoints_format_numbers_shortest() {
        assert_eq!(endpoints::choropleth("ghana", "water"), "/ghana/water/choropleth");
        assert_eq!(
            endpoints::hotspots("ghana", "water", 70.0),
            "/ghana/water/hotspots?threshold=70"
        );
        assert_eq!(
            endpoints::global_hotspots(72.5, 50),
            "/vulnerability/hotspots?threshold=72.5&limit=50"
        );
    }

    #[test]
    fn base_trailing_slash_is_ignored() {
        let api = ClimateApi::new("http://example.test/api/", FakeTransport::new());
        assert_eq!(api.url("/countries"), "http://example.test/api/countries");
    }

    #[tokio::test]
    async fn success_envelope_yields_data() -> Result<(), Box<dyn std::error::Error>> {
        let transport = FakeTransport::new().respond(
            "http://api.test/countries",
            json!({"success": true, "message": "ok", "data": [
                {"id": 1, "name": "Ghana", "code": "GHANA", "sectors": ["agriculture"], "data_sources": 3}
            ]}),
        );
        let api = ClimateApi::new("http://api.test", transport);

        let countries: Vec<CountryData> = api.fetch(endpoints::COUNTRIES).await?;
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].code, "GHANA");
        assert_eq!(countries[0].data_sources, 3);
        Ok(())
    }

    #[tokio::test]
    async fn unsuccessful_envelope_surfaces_message() {
        let transport = FakeTransport::new().respond(
            "http://api.test/summary",
            json!({"success": false, "message": "summary offline", "data": {"ignored": true}}),
        );
        let api = ClimateApi::new("http://api.test", transport);

        let err = api.fetch::<SystemSummary>(endpoints::SUMMARY).await.err();
        assert_eq!(err, Some(ApiError::Application("summary offline".into())));
    }

    #[tokio::test]
    async fn success_without_data_is_an_error() {
        let transport = FakeTransport::new()
            .respond("http://api.test/summary", json!({"success": true, "message": ""}));
        let api = ClimateApi::new("http://api.test", transport);

        let err = api.fetch::<SystemSummary>(endpoints::SUMMARY).await.err();
        assert_eq!(err, Some(ApiError::MissingData("/summary".into())));
    }

    #[tokio::test]
    async fn malformed_payload_is_a_decode_error() {
        let transport = FakeTransport::new().respond(
            "http://api.test/ghana/water/choropleth",
            json!({"success": true, "message": "", "data": {"choropleth_data": "nope"}}),
        );
        let api = ClimateApi::new("http://api.test", transport);

        let result = api
            .fetch::<ChoroplethPayload>(&endpoints::choropleth("ghana", "water"))
            .await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn transport_failure_passes_through() {
        let api = ClimateApi::new("http://api.test", FakeTransport::new());

        let result = api
            .fetch::<GlobalHotspots>(&endpoints::global_hotspots(70.0, 50))
            .await;
        assert!(matches!(result, Err(ref err) if err.is_transport()));
    }
}
