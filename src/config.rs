//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! probe paths, response headers, logging, and default paths. `AppConfig` is
//! the root configuration struct; every field has a default so an empty file
//! (or no file at all) yields a working server.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

// =============================================================================
// Probe Routes
// =============================================================================

/// Prefix shared by all orchestration-facing endpoints
pub const INTERNAL_PREFIX: &str = "/internal";

/// Liveness probe path
pub const LIVENESS_PATH: &str = formatcp!("{}/isAlive", INTERNAL_PREFIX);

/// Readiness probe path
pub const READINESS_PATH: &str = formatcp!("{}/isReady", INTERNAL_PREFIX);

/// Body returned by both probes
pub const PROBE_RESPONSE: &str = "ok";

// Probe answers must never be served from an intermediary cache
pub const CACHE_CONTROL_PROBE: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "probekit=info,tower_http=info";

/// Default bind host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default connection drain period on shutdown, in seconds
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// How long to wait for in-flight requests once shutdown begins
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }

    /// Resolve `host` and `port` into a bindable address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port ({}:{}): {}",
                    self.host, self.port, e
                ))
            })
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load `path`, falling back to defaults when it is the default path and absent.
    ///
    /// An explicitly named file that does not exist is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_or_default_from(path.as_ref(), Path::new(DEFAULT_CONFIG_PATH))
    }

    fn load_or_default_from(path: &Path, default_path: &Path) -> Result<Self, ConfigError> {
        if path == default_path && !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Apply the `--port` CLI override, if given.
    pub fn with_port_override(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.http.port = port;
        }
        self
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.http.socket_addr()?;
        Ok(config)
    }
}

/// Pick the log filter. Priority: CLI > env > default.
pub fn resolve_log_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
