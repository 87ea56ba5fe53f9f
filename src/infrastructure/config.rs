use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.samsara.com";
const CONFIG_FILE: &str = "config/fleet";
const ENV_PREFIX: &str = "FLEET";

#[derive(Deserialize, Clone)]
pub struct FleetConfig {
    pub samsara: SamsaraSettings,
    pub charts: ChartSettings,
}

#[derive(Deserialize, Clone)]
pub struct SamsaraSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub api_token_file: Option<PathBuf>,
    pub vehicle_page_limit: u32,
    pub history_step_ms: i64,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

pub fn load_fleet_config() -> anyhow::Result<FleetConfig> {
    load_fleet_config_from(CONFIG_FILE)
}

/// Defaults, then the optional config file, then `FLEET_` environment overrides
pub fn load_fleet_config_from(file: &str) -> anyhow::Result<FleetConfig> {
    let settings = config::Config::builder()
        .set_default("samsara.base_url", DEFAULT_BASE_URL)?
        .set_default("samsara.vehicle_page_limit", 512_i64)?
        .set_default("samsara.history_step_ms", 60_000_i64)?
        .set_default("charts.output_dir", "charts")?
        .set_default("charts.width", 1024_i64)?
        .set_default("charts.height", 640_i64)?
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
