//! Configuration management

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerConfig {
    pub listen_addr: String,
    pub command_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SecurityConfig {
    /// Shared slash command token
    pub token: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

/// Items provisioned by the `seed` command
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SeedConfig {
    pub items: Vec<SeedItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SeedItem {
    pub category: String,
    pub name: String,
}

impl SeedItem {
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "lending-bot".to_string(),
            },
            server: ServerConfig {
                listen_addr: "0.0.0.0:8000".to_string(),
                command_path: "/mm/command".to_string(),
            },
            security: SecurityConfig {
                token: String::new(),
            },
            database: DatabaseConfig {
                path: PathBuf::from("lending.db"),
            },
            seed: SeedConfig {
                items: vec![
                    SeedItem::new("umbrella", "우산1"),
                    SeedItem::new("umbrella", "우산2"),
                    SeedItem::new("charger_c", "C타입 충전기1"),
                ],
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        Config::default().with_env()
    }

    /// Apply environment overrides on top of this config
    pub fn with_env(mut self) -> Self {
        if let Ok(token) = std::env::var("MM_TOKEN") {
            self.security.token = token;
        }

        if let Ok(path) = std::env::var("LENDING_DB_PATH") {
            self.database.path = PathBuf::from(path);
        }

        if let Ok(addr) = std::env::var("LENDING_LISTEN_ADDR") {
            self.server.listen_addr = addr;
        }

        self
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .listen_addr
            .parse()
            .map_err(|e| ConfigError::InvalidValue(format!("listen-addr {}: {}", self.server.listen_addr, e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.server.command_path.starts_with('/') {
            return Err(ConfigError::InvalidValue(format!(
                "command-path must start with '/': {}",
                self.server.command_path
            )));
        }
        if self.database.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("database.path".to_string()));
        }
        self.listen_addr()?;
        Ok(())
    }
}
