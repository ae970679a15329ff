use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (API_BASE, DATABASE_URL)
    /// 2. Environment variables (MEALSU__API__BASE_URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("api.base_url", "http://127.0.0.1:8080/api/v1")?
            .set_default("database.url", "sqlite:mealsu.db")?
            .set_default("database.max_connections", 1)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Missing file is fine, defaults cover everything
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALSU")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_base) = env::var("API_BASE") {
            builder = builder.set_override("api.base_url", api_base)?;
        }
        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let base_url = Url::parse(&self.api.base_url)
            .map_err(|e| format!("API base URL is invalid: {e}"))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err("API base URL must use http or https".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, max_connections: u32) -> Config {
        Config {
            api: ApiConfig {
                base_url: base_url.to_string(),
            },
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections,
            },
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config("http://127.0.0.1:8080/api/v1", 1).validate().is_ok());
        assert!(config("https://api.mealsu.app/api/v1", 4).validate().is_ok());
    }

    #[test]
    fn test_validation_bad_url() {
        assert!(config("not a url", 1).validate().is_err());
        assert!(config("ftp://example.com/api", 1).validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        assert!(config("http://127.0.0.1:8080/api/v1", 0).validate().is_err());
    }
}
