use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub data_dragon: DataDragonConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataDragonConfig {
    pub base_url: String,
}

impl Default for DataDragonConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ddragon.leagueoflegends.com".to_string(),
        }
    }
}

impl Config {
    /// Reads `config.toml` (path overridable via CONFIG_PATH). Environment
    /// variables override file values; with no file at all the service can
    /// start from DATABASE_URL alone.
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        let config_result = std::fs::read_to_string(&config_path);

        let mut config: Config = match config_result {
            Ok(config_str) => toml::from_str(&config_str).map_err(|e| {
                AppError::ConfigError(format!("Failed to parse {config_path}: {e}"))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let database_url = env::var("DATABASE_URL").map_err(|_| {
                    AppError::ConfigError(format!(
                        "DATABASE_URL is not set and no config file found at {config_path}"
                    ))
                })?;

                Config {
                    server: ServerConfig {
                        host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                        port: env::var("SERVER_PORT")
                            .ok()
                            .and_then(|v| v.parse().ok())
                            .unwrap_or(8080),
                    },
                    database: DatabaseConfig {
                        url: database_url,
                        max_connections: env::var("DB_MAX_CONNECTIONS")
                            .ok()
                            .and_then(|v| v.parse().ok())
                            .unwrap_or(10),
                    },
                    data_dragon: DataDragonConfig::default(),
                }
            }
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "Failed to read config file {config_path}: {e}"
                )));
            }
        };

        // Env overrides apply even when the file exists
        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            config.database.url = v;
        }
        if let Ok(v) = env::var("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            config.database.max_connections = mc;
        }
        if let Ok(v) = env::var("DDRAGON_BASE_URL") {
            config.data_dragon.base_url = v;
        }

        Ok(config)
    }
}
