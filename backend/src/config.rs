//! Environment-driven server settings.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (`BIND_ADDR`, default `0.0.0.0`).
    pub bind_addr: String,
    /// Listen port (`PORT`, default 3000).
    pub port: u16,
    /// JSON order dataset; the built-in sample is served when unset.
    pub orders_file: Option<PathBuf>,
    /// Where the frontend should send users without a session.
    pub login_url: String,
    /// Allowed CORS origin; any origin when unset.
    pub cors_allow_origin: Option<String>,
}

impl ServerConfig {
    /// Read the settings from the process environment; blank values count
    /// as unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().with_context(|| format!("invalid PORT `{raw}`"))?,
            None => 3000,
        };

        Ok(Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            orders_file: non_empty("ORDERS_FILE").map(PathBuf::from),
            login_url: non_empty("LOGIN_URL").unwrap_or_else(|| "/login".to_string()),
            cors_allow_origin: non_empty("CORS_ALLOW_ORIGIN"),
        })
    }

    /// `host:port` for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config_from(&[]).expect("defaults");
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
        assert_eq!(config.orders_file, None);
        assert_eq!(config.login_url, "/login");
        assert_eq!(config.cors_allow_origin, None);
    }

    #[test]
    fn reads_overrides_and_ignores_blank_values() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("ORDERS_FILE", "./data/orders.json"),
            ("LOGIN_URL", "  "),
            ("CORS_ALLOW_ORIGIN", "http://localhost:8081"),
        ])
        .expect("overrides");
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.orders_file, Some(PathBuf::from("./data/orders.json")));
        assert_eq!(config.login_url, "/login");
        assert_eq!(config.cors_allow_origin.as_deref(), Some("http://localhost:8081"));
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(config_from(&[("PORT", "http")]).is_err());
    }
}
