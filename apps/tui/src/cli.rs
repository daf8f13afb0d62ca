use clap::Parser;
use climate_atlas::config::env as config_env;

#[derive(Debug, Parser)]
#[command(name = "climate-atlas", version, about = "Climate vulnerability atlas")]
pub struct CliArgs {
    /// Print the store's contents and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Include global hotspots in headless output
    #[arg(long)]
    pub global: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the API base URL
    #[arg(long = "api-base", value_name = "URL")]
    pub api_base: Option<String>,

    /// Country to select at start
    #[arg(long, value_name = "CODE")]
    pub country: Option<String>,

    /// Sector to select at start
    #[arg(long, value_name = "NAME")]
    pub sector: Option<String>,

    /// Hotspot vulnerability threshold
    #[arg(long, value_name = "SCORE")]
    pub threshold: Option<f64>,

    /// Maximum number of global hotspots
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Location to open, e.g. "/maps#hotspots"
    #[arg(long, value_name = "PATH", default_value = "/")]
    pub route: String,

    /// Log file used while the TUI is running
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(base) = &self.api_base {
            std::env::set_var(config_env::API_BASE_VAR, base);
        }
        if let Some(country) = &self.country {
            std::env::set_var(config_env::COUNTRY_VAR, country);
        }
        if let Some(sector) = &self.sector {
            std::env::set_var(config_env::SECTOR_VAR, sector);
        }
        if let Some(threshold) = self.threshold {
            std::env::set_var(config_env::THRESHOLD_VAR, threshold.to_string());
        }
        if let Some(limit) = self.limit {
            std::env::set_var(config_env::LIMIT_VAR, limit.to_string());
        }
        if let Some(path) = &self.log_file {
            std::env::set_var(config_env::LOG_FILE_VAR, path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parses_headless_flags() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from([
            "climate-atlas",
            "--headless",
            "--json",
            "--country",
            "kenya",
            "--threshold",
            "75.5",
        ])?;
        assert!(args.headless);
        assert!(args.json);
        assert_eq!(args.country.as_deref(), Some("kenya"));
        assert_eq!(args.threshold, Some(75.5));
        assert_eq!(args.route, "/");
        Ok(())
    }

    #[test]
    fn help_mentions_route_flag() {
        assert!(CliArgs::command().render_help().to_string().contains("--route"));
    }
}
