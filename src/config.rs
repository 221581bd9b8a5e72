use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::catalog::{DEFAULT_MAX_RESULTS, DEFAULT_MIN_RESULTS};
use crate::constants::DEMO_USER_ID;

pub const ENV_PORT: &str = "PORT";
pub const ENV_API_URL: &str = "PARTFINDER_API_URL";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub client: ClientConfig,

    pub catalog: CatalogConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// "pretty" or "json"
    pub log_format: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    pub max_db_connections: u32,

    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/partfinder.db".to_string(),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,

    /// `*` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix.
    pub api_base_url: String,

    pub request_timeout_seconds: u64,

    /// Identifier sent with every search so it lands in history.
    pub user_id: i32,

    /// Where the bearer token is kept. Defaults to the user config dir.
    pub credentials_path: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            request_timeout_seconds: 10,
            user_id: DEMO_USER_ID,
            credentials_path: None,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn credentials_file(&self) -> PathBuf {
        if let Some(path) = &self.credentials_path {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|dir| dir.join("partfinder"))
            .unwrap_or_else(|| PathBuf::from(".partfinder"))
            .join("auth_token")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub min_results: usize,

    pub max_results: usize,

    /// When set, identical searches return identical parts.
    pub seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            min_results: DEFAULT_MIN_RESULTS,
            max_results: DEFAULT_MAX_RESULTS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
        }
    }
}

impl Config {
    /// Loads the first config file found, then applies `.env` and process
    /// environment overrides.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::load_file()?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        for path in &Self::config_paths() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT).filter(|v| !v.trim().is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_PORT} value: {port}"))?;
        }

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.client.api_base_url = url.trim().to_string();
        }

        if let Some(db) = lookup(ENV_DATABASE_URL).filter(|v| !v.trim().is_empty()) {
            self.general.database_path = db.trim().to_string();
        }

        Ok(())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("partfinder").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".partfinder").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.client.api_base_url.trim().is_empty() {
            anyhow::bail!("client.api_base_url cannot be empty");
        }

        url::Url::parse(&self.client.api_base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.client.api_base_url))?;

        if self.client.request_timeout_seconds == 0 {
            anyhow::bail!("client.request_timeout_seconds must be > 0");
        }

        if self.catalog.min_results == 0 {
            anyhow::bail!("catalog.min_results must be > 0");
        }

        if self.catalog.min_results > self.catalog.max_results {
            anyhow::bail!(
                "catalog.min_results ({}) cannot exceed catalog.max_results ({})",
                self.catalog.min_results,
                self.catalog.max_results
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.client.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.client.request_timeout_seconds, 10);
        assert_eq!(config.client.user_id, 1);
        assert_eq!(config.catalog.min_results, 8);
        assert_eq!(config.catalog.max_results, 22);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[catalog]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [catalog]
            seed = 7
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.catalog.seed, Some(7));
        assert_eq!(config.catalog.min_results, 8);
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("PORT", "8081"),
            ("PARTFINDER_API_URL", "http://parts.internal:8081/api"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]);

        let mut config = Config::default();
        config
            .apply_env_overrides(|key| env.get(key).map(|v| (*v).to_string()))
            .unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.client.api_base_url, "http://parts.internal:8081/api");
        assert_eq!(config.general.database_path, "sqlite::memory:");
    }

    #[test]
    fn test_bad_port_override() {
        let mut config = Config::default();
        let result = config.apply_env_overrides(|key| (key == "PORT").then(|| "http".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.catalog.min_results = 30;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.catalog.min_results = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.client.api_base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.client.request_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_credentials_path() {
        let mut config = Config::default();
        config.client.credentials_path = Some("/tmp/pf-token".to_string());
        assert_eq!(config.client.credentials_file(), PathBuf::from("/tmp/pf-token"));
    }
}
