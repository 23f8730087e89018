//! API configuration

use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_PORT: i64 = 8000;
const DEFAULT_DATA_FILE: &str = "data/dutydrawback_claims.json";
const DEFAULT_MAX_LOG_SIZE: i64 = 10024;
const DEFAULT_MAX_BODY_SIZE: i64 = 2 * 1024 * 1024;
const DEFAULT_LOG_FILE: &str = "server.log";

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JSON file holding all claims
    pub data_file: PathBuf,
    /// Header and body sizes above this many bytes are not logged in full
    pub max_log_size: usize,
    /// Largest accepted request body in bytes
    pub max_body_size: usize,
    /// Log level
    pub log_level: String,
    /// File that receives a copy of the log; empty disables it
    pub log_file: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT as u16,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            max_log_size: DEFAULT_MAX_LOG_SIZE as usize,
            max_body_size: DEFAULT_MAX_BODY_SIZE as usize,
            log_level: "info".to_string(),
            log_file: Some(DEFAULT_LOG_FILE.to_string()),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables over the defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", DEFAULT_PORT)?
            .set_default("data_file", DEFAULT_DATA_FILE)?
            .set_default("max_log_size", DEFAULT_MAX_LOG_SIZE)?
            .set_default("max_body_size", DEFAULT_MAX_BODY_SIZE)?
            .set_default("log_level", "info")?
            .set_default("log_file", DEFAULT_LOG_FILE)?
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The log file, unless disabled
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(Path::new)
    }
}
