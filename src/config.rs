// src/config.rs
//! Server configuration.

use std::num::ParseIntError;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// | Variable       | Default   |
    /// |----------------|-----------|
    /// | `ECHOBOT_HOST` | `0.0.0.0` |
    /// | `ECHOBOT_PORT` | `8000`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("ECHOBOT_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("ECHOBOT_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|source| ConfigError::InvalidPort {
                var: "ECHOBOT_PORT",
                value,
                source,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_all_interfaces_on_8000() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn reads_host_and_port() {
        let config =
            Config::from_lookup(lookup(&[("ECHOBOT_HOST", "127.0.0.1"), ("ECHOBOT_PORT", "9001")]))
                .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9001");
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[("ECHOBOT_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("ECHOBOT_PORT"));

        assert!(Config::from_lookup(lookup(&[("ECHOBOT_PORT", "70000")])).is_err());
    }
}
