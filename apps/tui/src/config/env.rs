use crate::api::DEFAULT_API_BASE;
use crate::store::{DEFAULT_COUNTRY, DEFAULT_GLOBAL_LIMIT, DEFAULT_HOTSPOT_THRESHOLD, DEFAULT_SECTOR};
use color_eyre::eyre::{eyre, WrapErr};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const API_BASE_VAR: &str = "CLIMATE_API_BASE";
pub const TIMEOUT_VAR: &str = "CLIMATE_API_TIMEOUT_SECS";
pub const COUNTRY_VAR: &str = "CLIMATE_DEFAULT_COUNTRY";
pub const SECTOR_VAR: &str = "CLIMATE_DEFAULT_SECTOR";
pub const THRESHOLD_VAR: &str = "CLIMATE_HOTSPOT_THRESHOLD";
pub const LIMIT_VAR: &str = "CLIMATE_GLOBAL_LIMIT";
pub const LOG_FILE_VAR: &str = "CLIMATE_LOG_FILE";

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    /// No timeout unless one is configured.
    pub timeout: Option<Duration>,
    pub country: String,
    pub sector: String,
    pub hotspot_threshold: f64,
    pub global_limit: usize,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: None,
            country: DEFAULT_COUNTRY.to_string(),
            sector: DEFAULT_SECTOR.to_string(),
            hotspot_threshold: DEFAULT_HOTSPOT_THRESHOLD,
            global_limit: DEFAULT_GLOBAL_LIMIT,
            log_file: PathBuf::from("climate-atlas.log"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> color_eyre::eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::eyre::Result<Self> {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_base = value(API_BASE_VAR).unwrap_or(defaults.api_base);
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(eyre!("{API_BASE_VAR} must be an http(s) URL, got {api_base}"));
        }

        let timeout = value(TIMEOUT_VAR)
            .map(|raw| {
                raw.parse::<u64>()
                    .wrap_err_with(|| format!("{TIMEOUT_VAR} must be whole seconds, got {raw}"))
            })
            .transpose()?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let hotspot_threshold = value(THRESHOLD_VAR)
            .map(|raw| {
                raw.parse::<f64>()
                    .wrap_err_with(|| format!("{THRESHOLD_VAR} must be a number, got {raw}"))
            })
            .transpose()?
            .unwrap_or(defaults.hotspot_threshold);

        let global_limit = value(LIMIT_VAR)
            .map(|raw| {
                raw.parse::<usize>()
                    .wrap_err_with(|| format!("{LIMIT_VAR} must be a count, got {raw}"))
            })
            .transpose()?
            .unwrap_or(defaults.global_limit);

        Ok(Self {
            api_base,
            timeout,
            country: value(COUNTRY_VAR).unwrap_or(defaults.country),
            sector: value(SECTOR_VAR).unwrap_or(defaults.sector),
            hotspot_threshold,
            global_limit,
            log_file: value(LOG_FILE_VAR).map_or(defaults.log_file, PathBuf::from),
        })
    }
}

/// Loads `.env` and reads the application configuration
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    dotenv().ok();
    AppConfig::from_env()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() -> color_eyre::eyre::Result<()> {
        let config = AppConfig::from_lookup(lookup(&[]))?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base, "http://localhost:5000/api");
        assert!(config.timeout.is_none());
        Ok(())
    }

    #[test]
    fn overrides_are_applied() -> color_eyre::eyre::Result<()> {
        let config = AppConfig::from_lookup(lookup(&[
            (API_BASE_VAR, "https://climate.example/api"),
            (TIMEOUT_VAR, "15"),
            (COUNTRY_VAR, "kenya"),
            (SECTOR_VAR, "water"),
            (THRESHOLD_VAR, "80.5"),
            (LIMIT_VAR, "10"),
            (LOG_FILE_VAR, "/tmp/atlas.log"),
        ]))?;
        assert_eq!(config.api_base, "https://climate.example/api");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.country, "kenya");
        assert_eq!(config.sector, "water");
        assert!((config.hotspot_threshold - 80.5).abs() < f64::EPSILON);
        assert_eq!(config.global_limit, 10);
        assert_eq!(config.log_file, PathBuf::from("/tmp/atlas.log"));
        Ok(())
    }

    #[test]
    fn zero_timeout_means_none() -> color_eyre::eyre::Result<()> {
        let config = AppConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "0")]))?;
        assert!(config.timeout.is_none());
        Ok(())
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(AppConfig::from_lookup(lookup(&[(API_BASE_VAR, "localhost:5000")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(THRESHOLD_VAR, "high")])).is_err());
    }
}
