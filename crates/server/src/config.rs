use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and cache the parsed configuration. Safe to call
/// multiple times — only the first call reads the file.
///
/// A missing or unparseable file yields the defaults.
pub fn load() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("failed to parse {CONFIG_PATH}: {e} — using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::info!("{CONFIG_PATH} not found ({e}) — using defaults");
            AppConfig::default()
        }
    })
}
