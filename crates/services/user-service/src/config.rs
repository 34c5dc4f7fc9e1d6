//! User service configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use common::{RedisConfig, ServiceConfig};

/// Configuration errors detected at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid USER_SERVICE_STORAGE: {0}")]
    InvalidStorage(String),
}

/// Storage backend holding user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Process-local ordered sequence, lost on restart
    #[default]
    Memory,
    /// Redis key-value store
    Redis,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            "redis" | "kv" => Ok(StorageBackend::Redis),
            other => Err(format!(
                "unknown storage backend '{}', expected 'memory' or 'redis'",
                other
            )),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::Redis => write!(f, "redis"),
        }
    }
}

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Bind address and logging
    pub service: ServiceConfig,
    /// Which repository implementation to wire
    pub storage: StorageBackend,
    /// Redis connection, used when `storage` is `Redis`
    pub redis: RedisConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any variable source.
    ///
    /// Blank values count as unset. Where two variables name the same setting
    /// the first one holding a usable value wins.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let storage = match var("USER_SERVICE_STORAGE") {
            Some(raw) => raw.parse::<StorageBackend>().map_err(ConfigError::InvalidStorage)?,
            None => defaults.storage,
        };

        Ok(Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                host: var("USER_SERVICE_HOST").unwrap_or(defaults.service.host),
                port: ["USER_SERVICE_PORT", "PORT"]
                    .into_iter()
                    .find_map(|key| var(key)?.trim().parse().ok())
                    .unwrap_or(defaults.service.port),
                log_level: var("LOG_LEVEL").unwrap_or(defaults.service.log_level),
            },
            storage,
            redis: RedisConfig {
                url: ["USER_SERVICE_REDIS_URL", "REDIS_URL"]
                    .into_iter()
                    .find_map(|key| var(key))
                    .unwrap_or(defaults.redis.url),
            },
        })
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                ..ServiceConfig::default()
            },
            storage: StorageBackend::default(),
            redis: RedisConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!("memory".parse(), Ok(StorageBackend::Memory));
        assert_eq!(" Redis ".parse(), Ok(StorageBackend::Redis));
        assert_eq!("kv".parse(), Ok(StorageBackend::Redis));
        assert!("postgres".parse::<StorageBackend>().is_err());
    }

    fn load(vars: &[(&str, &str)]) -> Result<UserServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UserServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_from_lookup_nothing_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.service.host, "0.0.0.0");
        assert_eq!(config.service.port, 3000);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.redis.url, "redis://127.0.0.1:6379");
    }

    #[test]
    fn test_port_falls_back_to_generic_port() {
        assert_eq!(load(&[("PORT", "8080")]).unwrap().service.port, 8080);
        assert_eq!(
            load(&[("USER_SERVICE_PORT", "9000"), ("PORT", "8080")])
                .unwrap()
                .service
                .port,
            9000
        );
    }

    #[test]
    fn test_unusable_service_port_does_not_hide_generic_port() {
        assert_eq!(
            load(&[("USER_SERVICE_PORT", ""), ("PORT", "8080")])
                .unwrap()
                .service
                .port,
            8080
        );
        assert_eq!(
            load(&[("USER_SERVICE_PORT", "eighty"), ("PORT", "8080")])
                .unwrap()
                .service
                .port,
            8080
        );
        assert_eq!(load(&[("PORT", "99999")]).unwrap().service.port, 3000);
    }

    #[test]
    fn test_redis_url_fallback() {
        let config = load(&[("REDIS_URL", "redis://cache:6379")]).unwrap();
        assert_eq!(config.redis.url, "redis://cache:6379");

        let config = load(&[
            ("USER_SERVICE_REDIS_URL", "redis://users:6379"),
            ("REDIS_URL", "redis://cache:6379"),
        ])
        .unwrap();
        assert_eq!(config.redis.url, "redis://users:6379");
    }

    #[test]
    fn test_storage_selection() {
        let config = load(&[("USER_SERVICE_STORAGE", "redis"), ("USER_SERVICE_HOST", "127.0.0.1")])
            .unwrap();
        assert_eq!(config.storage, StorageBackend::Redis);
        assert_eq!(config.service.bind_address(), "127.0.0.1:3000");

        assert_eq!(
            load(&[("USER_SERVICE_STORAGE", " ")]).unwrap().storage,
            StorageBackend::Memory
        );
    }

    #[test]
    fn test_invalid_storage_is_an_error() {
        let err = load(&[("USER_SERVICE_STORAGE", "postgres")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStorage(ref msg) if msg.contains("postgres")));
    }

    #[test]
    fn test_defaults() {
        let config = UserServiceConfig::default();
        assert_eq!(config.service.service_name, "user-service");
        assert_eq!(config.service.port, 3000);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.redis.url, "redis://127.0.0.1:6379");
    }
}
