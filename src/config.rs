use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML from config file at {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("Failed to load config from environment: {0}")]
    Env(#[from] envy::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base of the in-flight service API, including its `/api` segment.
    pub ordering_api_url: String,
    pub flight_api_url: String,
    pub locale: String,
    pub log_dir: String,
}

// Partial config for layering
#[derive(Deserialize, Default, Debug)]
struct PartialClientConfig {
    ordering_api_url: Option<String>,
    flight_api_url: Option<String>,
    locale: Option<String>,
    log_dir: Option<String>,
}

fn default_ordering_api_url() -> String {
    "http://127.0.0.1:5000/api".to_string()
}

fn default_flight_api_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_locale() -> String {
    "pt-BR".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ordering_api_url: default_ordering_api_url(),
            flight_api_url: default_flight_api_url(),
            locale: default_locale(),
            log_dir: default_log_dir(),
        }
    }
}

impl ClientConfig {
    /// File, then `.env` and process environment on top, then defaults.
    /// A missing file is not an error.
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let file_config = match config_path {
            Some(path) => Self::read_file(path)?,
            None => PartialClientConfig::default(),
        };
        let env_config: PartialClientConfig = envy::from_env()?;

        Ok(Self::merge(env_config, file_config))
    }

    fn read_file(path_str: &str) -> Result<PartialClientConfig, ConfigError> {
        let path = Path::new(path_str);
        if !path.exists() {
            return Ok(PartialClientConfig::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path_str.to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path_str.to_string(),
            source,
        })
    }

    // Environment overrides file.
    fn merge(env: PartialClientConfig, file: PartialClientConfig) -> Self {
        Self {
            ordering_api_url: env
                .ordering_api_url
                .or(file.ordering_api_url)
                .unwrap_or_else(default_ordering_api_url),
            flight_api_url: env
                .flight_api_url
                .or(file.flight_api_url)
                .unwrap_or_else(default_flight_api_url),
            locale: env.locale.or(file.locale).unwrap_or_else(default_locale),
            log_dir: env.log_dir.or(file.log_dir).unwrap_or_else(default_log_dir),
        }
    }
}
