use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{success, message, data}` wrapper around every response.
///
/// `data` is optional so that failure envelopes without a payload still decode.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub meta: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CountryData {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub data_sources: u32,
}

/// One shaded unit of a choropleth map.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChoroplethData {
    pub name: String,
    pub value: f64,
    pub raw_score: f64,
    pub level: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct VulnerabilityRange {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl Default for VulnerabilityRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            average: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChoroplethPayload {
    pub choropleth_data: Vec<ChoroplethData>,
    pub statistics: VulnerabilityRange,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HotspotPayload {
    #[serde(default)]
    pub hotspots: Vec<Value>,
    #[serde(default)]
    pub hotspot_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GlobalHotspots {
    #[serde(default)]
    pub hotspots: Vec<Value>,
    #[serde(default)]
    pub count: usize,
}

/// Free-form system summary. Only `countries.total` is interpreted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SystemSummary(pub Value);

impl SystemSummary {
    /// The summary's country total, when present and positive.
    pub fn country_total(&self) -> Option<usize> {
        self.0
            .pointer("/countries/total")
            .and_then(Value::as_u64)
            .filter(|total| *total > 0)
            .and_then(|total| usize::try_from(total).ok())
    }

    /// Top-level scalar entries, flattened to `key.sub` labels for display.
    pub fn scalar_entries(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();
        if let Value::Object(map) = &self.0 {
            for (key, value) in map {
                match value {
                    Value::Object(inner) => {
                        for (sub, inner_value) in inner {
                            if let Some(text) = scalar_text(inner_value) {
                                entries.push((format!("{key}.{sub}"), text));
                            }
                        }
                    }
                    other => {
                        if let Some(text) = scalar_text(other) {
                            entries.push((key.clone(), text));
                        }
                    }
                }
            }
        }
        entries
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Best-effort display name for an opaque hotspot record.
pub fn hotspot_label(hotspot: &Value) -> String {
    ["name", "district", "region", "country"]
        .iter()
        .find_map(|key| hotspot.get(*key).and_then(Value::as_str))
        .map_or_else(|| "(unnamed)".to_string(), ToString::to_string)
}

/// Best-effort score for an opaque hotspot record.
pub fn hotspot_score(hotspot: &Value) -> Option<f64> {
    ["vulnerability_score", "score", "raw_score", "value"]
        .iter()
        .find_map(|key| hotspot.get(*key).and_then(Value::as_f64))
}
