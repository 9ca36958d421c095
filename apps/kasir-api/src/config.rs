//! Server configuration.
//!
//! Loaded from a `.env` file when present, then from the process
//! environment.
//!
//! | Variable             | Required | Default   |
//! |----------------------|----------|-----------|
//! | `DB_CONN`            | yes      |           |
//! | `PORT`               | no       | `8080`    |
//! | `HOST`               | no       | `0.0.0.0` |
//! | `DB_MAX_CONNECTIONS` | no       | `5`       |

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use kasir_db::DbConfig;

/// Kasir API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind.
    pub host: String,

    /// HTTP port.
    pub port: u16,

    /// SQLite connection string.
    pub db_conn: String,

    /// Pool size for the store.
    pub db_max_connections: u32,
}

impl AppConfig {
    /// Load configuration from `.env` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_conn = lookup("DB_CONN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingRequired("DB_CONN".to_string()))?;

        Ok(AppConfig {
            host: lookup("HOST")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            db_conn,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
        })
    }

    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HOST".to_string()))
    }

    /// Store configuration derived from this config.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.db_conn.as_str()).max_connections(self.db_max_connections)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("DB_CONN", "sqlite://kasir.db")])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_conn, "sqlite://kasir.db");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DB_CONN", "sqlite://other.db"),
            ("PORT", "3000"),
            ("HOST", "127.0.0.1"),
            ("DB_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(config.db_config().max_connections, 12);
        assert_eq!(config.db_config().url, "sqlite://other.db");
    }

    #[test]
    fn test_db_conn_is_required() {
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[])),
            Err(ConfigError::MissingRequired("DB_CONN".to_string()))
        );
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[("DB_CONN", "  ")])),
            Err(ConfigError::MissingRequired("DB_CONN".to_string()))
        );
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[("DB_CONN", "sqlite://k.db"), ("PORT", "eighty")])),
            Err(ConfigError::InvalidValue("PORT".to_string()))
        );
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[
                ("DB_CONN", "sqlite://k.db"),
                ("DB_MAX_CONNECTIONS", "-1"),
            ])),
            Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))
        );
    }

    #[test]
    fn test_bad_host() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DB_CONN", "sqlite://k.db"),
            ("HOST", "not a host"),
        ]))
        .unwrap();
        assert!(config.socket_addr().is_err());
    }
}
