use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DIST_DIR: &str = "../frontend/dist";
pub const DEFAULT_CACHE_MAX_AGE: u64 = 3600;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Settings for the static host, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub cache_max_age: u64,
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset or blank keys fall back
    /// to their defaults, values that are set but unparsable are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value,
                expected: "a port number",
            })?,
            None => DEFAULT_PORT,
        };
        let cache_max_age = match get("CACHE_MAX_AGE") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "CACHE_MAX_AGE",
                value,
                expected: "a number of seconds",
            })?,
            None => DEFAULT_CACHE_MAX_AGE,
        };

        Ok(Self {
            port,
            dist_dir: get("DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR)),
            cache_max_age,
            sentry_dsn: get("SENTRY_DSN"),
        })
    }

    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.cache_max_age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.cache_max_age, DEFAULT_CACHE_MAX_AGE);
        assert_eq!(config.sentry_dsn, None);
    }

    #[test]
    fn reads_every_key() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("DIST_DIR", "/srv/printmaster"),
            ("CACHE_MAX_AGE", "60"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
        ])
        .unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/printmaster"));
        assert_eq!(config.cache_control(), "public, max-age=60");
        assert_eq!(config.sentry_dsn.as_deref(), Some("https://key@sentry.example/1"));
    }

    #[test]
    fn blank_values_fall_back() {
        let config = config_from(&[("PORT", "  "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.sentry_dsn, None);
    }

    #[test]
    fn rejects_unparsable_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string(),
                expected: "a port number",
            }
        );
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn rejects_negative_cache_age() {
        assert!(config_from(&[("CACHE_MAX_AGE", "-1")]).is_err());
    }
}
