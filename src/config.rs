use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::fetcher::RANDOM_RECIPE_URL;

/// Widget configuration
#[derive(Debug, Deserialize, Clone)]
pub struct WidgetConfig {
    /// Recipe API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Minutes between refresh cycles
    #[serde(default = "default_refresh_minutes")]
    pub refresh_minutes: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: default_timeout(),
            refresh_minutes: default_refresh_minutes(),
        }
    }
}

fn default_endpoint() -> String {
    RANDOM_RECIPE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_refresh_minutes() -> u64 {
    5
}

impl WidgetConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_WIDGET__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_WIDGET__ENDPOINT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_WIDGET")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
