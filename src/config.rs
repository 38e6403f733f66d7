use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    /// Pairs returned when a request gives no limit
    #[serde(default = "default_display_limit")]
    pub display_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    /// Abort a ranking run after this many seconds
    pub timeout_secs: Option<u64>,
    /// Roster snapshot used when a request carries no heroes
    pub roster_path: Option<String>,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
            max_limit: default_max_limit(),
            timeout_secs: None,
            roster_path: None,
        }
    }
}

fn default_display_limit() -> u16 { 250 }
fn default_max_limit() -> u16 { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SUMMON_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SUMMON__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Clamp a requested result count to the configured bounds
    pub fn effective_limit(&self, requested: Option<u16>) -> usize {
        let limit = requested.unwrap_or(self.ranking.display_limit);
        limit.min(self.ranking.max_limit) as usize
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("SUMMON")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
