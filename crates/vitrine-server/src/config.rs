//! Server configuration loading from file and environment variables.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;
use vitrine_assist::AssistConfig;
use vitrine_notify::NotifyConfig;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Upstream chat-completion API settings.
    #[serde(default)]
    pub assistant: AssistConfig,

    /// Contact-notification mail settings.
    #[serde(default)]
    pub notify: NotifyConfig,

    /// Per-route rate limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Busy timeout for SQLite connections, in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Maximum number of pooled SQLite connections.
    #[serde(default = "default_pool_max_size")]
    pub pool_max_size: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "vitrine_server=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

/// Fixed-window per-IP request limits, per minute.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LimitsConfig {
    /// Limit for `POST /api/contact`. Low — a visitor submits a form once.
    #[serde(default = "default_contact_per_minute")]
    pub contact_per_minute: u32,

    /// Limit for `POST /api/chat`.
    #[serde(default = "default_chat_per_minute")]
    pub chat_per_minute: u32,

    /// Limit for everything else.
    #[serde(default = "default_per_minute")]
    pub default_per_minute: u32,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn default_port() -> u16 {
    3000
}

fn default_db_path() -> String {
    "vitrine.db".to_string()
}

fn default_busy_timeout_ms() -> u64 {
    5_000
}

fn default_pool_max_size() -> u32 {
    4
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_contact_per_minute() -> u32 {
    5
}

fn default_chat_per_minute() -> u32 {
    20
}

fn default_per_minute() -> u32 {
    120
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
            pool_max_size: default_pool_max_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            contact_per_minute: default_contact_per_minute(),
            chat_per_minute: default_chat_per_minute(),
            default_per_minute: default_per_minute(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `VITRINE_HOST` overrides `server.host`
/// - `VITRINE_PORT` overrides `server.port`
/// - `VITRINE_DB_PATH` overrides `database.path`
/// - `VITRINE_LOG_LEVEL` overrides `logging.level`
/// - `VITRINE_LOG_JSON` overrides `logging.json` (set to "true" to enable)
/// - `VITRINE_ASSIST_API_KEY` overrides `assistant.api_key`
/// - `VITRINE_NOTIFY_API_KEY` overrides `notify.api_key`
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(host) = std::env::var("VITRINE_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Ok(port) = std::env::var("VITRINE_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Ok(db_path) = std::env::var("VITRINE_DB_PATH") {
        config.database.path = db_path;
    }
    if let Ok(level) = std::env::var("VITRINE_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("VITRINE_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
    if let Ok(key) = std::env::var("VITRINE_ASSIST_API_KEY") {
        config.assistant.api_key = key;
    }
    if let Ok(key) = std::env::var("VITRINE_NOTIFY_API_KEY") {
        config.notify.api_key = key;
    }

    Ok(config)
}
