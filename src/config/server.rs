//! Server configuration.
//!
//! Values are resolved in this order, later sources winning:
//! 1. Built-in defaults
//! 2. An optional TOML file (`--config` or `BOOKSTASH_CONFIG`)
//! 3. `BOOKSTASH_*` environment variables
//! 4. Explicit command-line flags, applied by the binary

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const ENV_PREFIX: &str = "BOOKSTASH";
pub const CONFIG_ENV: &str = "BOOKSTASH_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    /// How long the settings cache serves a snapshot before reloading.
    pub settings_ttl_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> std::result::Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("bookstash.db")
    }

    #[must_use]
    pub fn settings_ttl(&self) -> Duration {
        Duration::from_secs(self.settings_ttl_secs)
    }

    /// Loads `path` when given (a missing file is an error), otherwise the
    /// file named by `BOOKSTASH_CONFIG` if set, otherwise defaults. Process
    /// environment overrides are applied on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("failed to read {}: {e}", path.display()))
                })?;
                Self::from_toml(&content)?
            }
            None => Self::default(),
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Applies `BOOKSTASH_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}_{suffix}"));

        if let Some(host) = var("HOST") {
            self.host = host;
        }
        if let Some(port) = var("PORT") {
            self.port = port
                .parse()
                .map_err(|_| Error::Config(format!("{ENV_PREFIX}_PORT is not a port: {port}")))?;
        }
        if let Some(dir) = var("DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(ttl) = var("SETTINGS_TTL") {
            self.settings_ttl_secs = ttl.parse().map_err(|_| {
                Error::Config(format!("{ENV_PREFIX}_SETTINGS_TTL is not a number: {ttl}"))
            })?;
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_dir: PathBuf::from("./data"),
            settings_ttl_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert!(config.db_path().ends_with("bookstash.db"));
        assert_eq!(config.settings_ttl(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml("port = 9000\ndata_dir = \"/var/lib/bookstash\"").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.db_path(), PathBuf::from("/var/lib/bookstash/bookstash.db"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ServerConfig::from_toml("port = \"many\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = ServerConfig::from_toml("host = \"0.0.0.0\"\nport = 9000").unwrap();
        config
            .apply_overrides(env(&[
                ("BOOKSTASH_PORT", "7000"),
                ("BOOKSTASH_SETTINGS_TTL", "0"),
            ]))
            .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 7000);
        assert_eq!(config.settings_ttl_secs, 0);
    }

    #[test]
    fn test_bad_env_port_is_rejected() {
        let mut config = ServerConfig::default();
        let err = config
            .apply_overrides(env(&[("BOOKSTASH_PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("BOOKSTASH_PORT")));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = ServerConfig::load(Some(&temp.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("absent.toml")));
    }
}
