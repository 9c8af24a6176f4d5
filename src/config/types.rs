//! Configuration types for pulpit
//!
//! This module contains configuration structures and related types
//! used throughout the application.

use log::LevelFilter;
use std::fmt;

use super::constants::*;

/// Address of the media backend, resolved once by the connectivity probe
/// and passed explicitly to everything that talks to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Hostname of the backend
    pub host: String,
    /// Port of the backend
    pub port: u16,
}

impl BackendConfig {
    /// Creates a backend address from a host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns the base URL of the backend
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Returns an absolute URL for the given path on this backend
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_HOST, DEFAULT_BACKEND_PORT)
    }
}

impl fmt::Display for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    /// Address of the media backend before probing
    pub backend: BackendConfig,
    /// Timeout for each health-check attempt in seconds
    pub probe_timeout: u64,
    /// Log level
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            probe_timeout: HEALTH_PROBE_TIMEOUT_SECS,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend hostname
    pub fn with_backend_host(mut self, host: impl Into<String>) -> Self {
        self.backend.host = host.into();
        self
    }

    /// Sets the backend port
    pub fn with_backend_port(mut self, port: u16) -> Self {
        self.backend.port = port;
        self
    }

    /// Sets the health-check attempt timeout
    pub fn with_probe_timeout(mut self, timeout: u64) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Sets the log level
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.backend.host, DEFAULT_BACKEND_HOST);
        assert_eq!(config.backend.port, DEFAULT_BACKEND_PORT);
        assert_eq!(config.probe_timeout, HEALTH_PROBE_TIMEOUT_SECS);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_backend_host("media.example.org")
            .with_backend_port(8080)
            .with_probe_timeout(10)
            .with_log_level(LevelFilter::Debug);

        assert_eq!(config.backend.host, "media.example.org");
        assert_eq!(config.backend.port, 8080);
        assert_eq!(config.probe_timeout, 10);
    }

    #[test]
    fn test_backend_base_url() {
        let backend = BackendConfig::default();
        assert_eq!(backend.base_url(), "http://localhost:5000");
        assert_eq!(
            backend.endpoint("/api/health"),
            "http://localhost:5000/api/health"
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_BACKEND_PORT, 5000);
        assert_eq!(HEALTH_PROBE_TIMEOUT_SECS, 3);
        assert_eq!(LOG_LEVEL_ENV_VAR, "PULPIT_LOG");
    }
}
