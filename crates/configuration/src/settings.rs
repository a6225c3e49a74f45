use crate::error::ConfigError;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The root configuration structure for the entire application.
///
/// Every section falls back to its defaults, so an absent `config.toml` is
/// a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub server: ServerConfig,
    pub query: QueryConfig,
    pub logging: LoggingConfig,
}

/// Where the dataset loader finds its two JSON files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub restaurants_path: PathBuf,
    pub orders_path: PathBuf,
    /// Fail startup on an unreadable file instead of serving an empty collection.
    pub strict: bool,
}

/// Bind address of the HTTP layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Page sizes and leaderboard length handed to the analytics engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub restaurants_per_page: usize,
    pub orders_per_page: usize,
    pub top_restaurants: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive. `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs roll daily into this directory instead of stderr.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

// --- Default Implementations ---

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            restaurants_path: PathBuf::from("data/restaurants.json"),
            orders_path: PathBuf::from("data/orders.json"),
            strict: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            restaurants_per_page: 10,
            orders_per_page: 20,
            top_restaurants: 3,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "platter.log".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::ValidationError(format!("server address: {e}")))
    }
}

impl Config {
    /// Rejects values that would make every query degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.restaurants_path.as_os_str().is_empty()
            || self.data.orders_path.as_os_str().is_empty()
        {
            return Err(ConfigError::ValidationError(
                "data paths must not be empty".to_string(),
            ));
        }
        if self.query.restaurants_per_page == 0 || self.query.orders_per_page == 0 {
            return Err(ConfigError::ValidationError(
                "page sizes must be at least 1".to_string(),
            ));
        }
        if self.query.top_restaurants == 0 {
            return Err(ConfigError::ValidationError(
                "top_restaurants must be at least 1".to_string(),
            ));
        }
        EnvFilter::try_new(&self.logging.level).map_err(|e| {
            ConfigError::ValidationError(format!("logging.level '{}': {e}", self.logging.level))
        })?;
        self.server.socket_addr()?;
        Ok(())
    }
}
