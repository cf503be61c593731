//! Server configuration parsing.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::aggregate::TotalFormula;

/// Server configuration loaded from TOML file.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Server settings.
    pub server: ServerConfig,
    /// Database location.
    pub database: DatabaseConfig,
    /// Aggregation settings.
    #[serde(default)]
    pub aggregation: AggregationConfig,
    /// CORS settings.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server bind settings.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1" or "0.0.0.0").
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory with the dashboard bundle; unmatched non-API paths fall
    /// back to its `index.html` when set.
    pub static_path: Option<String>,
}

/// Database location.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    pub path: PathBuf,
}

/// Aggregation settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Which columns make up a row's total on the leaderboard.
    pub formula: TotalFormula,
}

/// CORS settings for the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allow_origins: Vec<String>,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    pub allow_credentials: bool,
    /// Preflight cache lifetime in seconds.
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allow_origins: vec!["*".to_string()],
            allow_methods: vec!["GET".to_string()],
            allow_headers: vec!["*".to_string()],
            allow_credentials: false,
            max_age: 3600,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Env-filter style level string (e.g. "info" or "flipboard=debug").
    pub level: String,
    pub format: LogFormat,
    /// "stdout", "stderr", or a file path.
    pub output: String,
    pub color: bool,
    pub target: bool,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            output: "stdout".to_string(),
            color: true,
            target: false,
            timestamps: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Get the socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(String, std::io::Error),
    /// TOML parse error.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Failed to read config file '{}': {}", path, e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[server]
bind = "127.0.0.1"
port = 3001
static_path = "dist"

[database]
path = "database.db"

[aggregation]
formula = "individual"

[cors]
allow_origins = ["https://example.com"]

[logging]
level = "debug"
format = "json"
"#;
        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.static_path.as_deref(), Some("dist"));
        assert_eq!(config.database.path, PathBuf::from("database.db"));
        assert_eq!(config.aggregation.formula, TotalFormula::Individual);
        assert_eq!(config.cors.allow_origins, vec!["https://example.com"]);
        assert!(config.cors.enabled);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_defaults() {
        let toml = r#"
[server]
bind = "0.0.0.0"
port = 3001

[database]
path = "database.db"
"#;
        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.aggregation.formula, TotalFormula::Combined);
        assert!(config.cors.enabled);
        assert_eq!(config.cors.allow_methods, vec!["GET"]);
        assert_eq!(config.logging.output, "stdout");
        assert_eq!(config.bind_addr(), "0.0.0.0:3001");
    }
}
