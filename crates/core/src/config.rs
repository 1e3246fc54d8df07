//! Configuration management for printadm

use crate::error::{ConfigError, Result};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fixed path of the XML-RPC endpoint on the application server.
pub const RPC_PATH: &str = "/rpc/api/xmlrpc";

/// Main configuration structure for printadm
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PrintadmConfig {
    /// Application server connection settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the application server's XML-RPC endpoint.
///
/// The endpoint URL is always derived from `host`, `port` and `use_tls`;
/// it is never stored, so the three fields cannot drift out of sync with
/// the address actually dialled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name or IP address of the host running the application server
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the application server listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Use HTTPS instead of HTTP. The server conventionally listens for TLS
    /// on a different port (9192 by default), so change `port` along with
    /// this flag.
    #[serde(default)]
    pub use_tls: bool,
    /// Log raw XML-RPC request and response bodies at the transport layer
    #[serde(default)]
    pub verbose: bool,
    /// Overall timeout for one call, in seconds. `None` inherits whatever
    /// the HTTP transport defaults to; set it explicitly for predictable
    /// failure behaviour on unreachable servers.
    #[serde(default)]
    pub timeout: Option<u64>,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    9191
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            use_tls: false,
            verbose: false,
            timeout: None,
        }
    }
}

impl ServerConfig {
    /// Create a configuration for the given host and port, keeping the
    /// remaining options at their defaults.
    pub fn new<S: Into<String>>(host: S, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// The full URL of the XML-RPC endpoint, derived from the current
    /// `host`, `port` and `use_tls` values.
    pub fn endpoint_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{}://{}:{}{}", scheme, self.host, self.port, RPC_PATH)
    }

    /// Call timeout as a `Duration`, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

impl PrintadmConfig {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from: {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileError {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let config: PrintadmConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::FileError {
                reason: format!("failed to parse {}: {}", path.display(), e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("Saving configuration to: {}", path.display());

        let contents = toml::to_string_pretty(self).map_err(|e| ConfigError::FileError {
            reason: format!("failed to serialize configuration: {}", e),
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::FileError {
                reason: format!("failed to create {}: {}", parent.display(), e),
            })?;
        }

        std::fs::write(path, contents).map_err(|e| ConfigError::FileError {
            reason: format!("failed to write {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    /// Load configuration from the usual locations, falling back to the
    /// defaults when no file is found.
    ///
    /// Search order: `printadm.toml` and `.printadm.toml` in the working
    /// directory, `printadm/config.toml` under the user configuration
    /// directory, then `~/.printadm.toml`.
    pub fn load_with_fallback() -> Self {
        let mut config_paths = vec![
            PathBuf::from("printadm.toml"),
            PathBuf::from(".printadm.toml"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("printadm").join("config.toml"));
        }
        if let Some(home_dir) = dirs::home_dir() {
            config_paths.push(home_dir.join(".printadm.toml"));
        }

        for config_path in config_paths {
            if config_path.exists() {
                match Self::load_from_file(&config_path) {
                    Ok(config) => {
                        info!("Using configuration from: {}", config_path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!(
                            "Failed to load config from {}: {}",
                            config_path.display(),
                            e
                        );
                    }
                }
            }
        }

        debug!("No configuration file found, using defaults");
        Self::default()
    }

    /// Merge configuration with environment variables
    pub fn merge_with_env(&mut self) {
        if let Ok(host) = std::env::var("PRINTADM_HOST") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("PRINTADM_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.server.port = port;
            }
        }

        if let Ok(timeout) = std::env::var("PRINTADM_TIMEOUT") {
            if let Ok(timeout) = timeout.parse::<u64>() {
                self.server.timeout = Some(timeout);
            }
        }

        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            if let Ok(level) = rust_log.parse() {
                self.logging.level = level;
            }
        }

        debug!("Configuration merged with environment variables");
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "server.host".to_string(),
                reason: "host cannot be empty".to_string(),
            }
            .into());
        }

        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: "server.port".to_string(),
                reason: "port cannot be 0".to_string(),
            }
            .into());
        }

        if self.server.timeout == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "server.timeout".to_string(),
                reason: "timeout must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 9191);
        assert!(!config.use_tls);
        assert!(!config.verbose);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_endpoint_url_derivation() {
        let config = ServerConfig::default();
        assert_eq!(config.endpoint_url(), "http://localhost:9191/rpc/api/xmlrpc");

        let config = ServerConfig {
            host: "printsrv".to_string(),
            port: 9192,
            use_tls: true,
            ..ServerConfig::default()
        };
        assert_eq!(
            config.endpoint_url(),
            "https://printsrv:9192/rpc/api/xmlrpc"
        );
    }

    #[test]
    fn test_endpoint_url_tracks_field_changes() {
        let mut config = ServerConfig::new("10.0.0.7", 9191);
        assert_eq!(config.endpoint_url(), "http://10.0.0.7:9191/rpc/api/xmlrpc");

        config.use_tls = true;
        config.port = 9192;
        assert_eq!(
            config.endpoint_url(),
            "https://10.0.0.7:9192/rpc/api/xmlrpc"
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = PrintadmConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: PrintadmConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.server.host, deserialized.server.host);
        assert_eq!(config.server.port, deserialized.server.port);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let config: PrintadmConfig = toml::from_str("[server]\nhost = \"printsrv\"\n").unwrap();
        assert_eq!(config.server.host, "printsrv");
        assert_eq!(config.server.port, 9191);
        assert!(!config.server.use_tls);
    }

    #[test]
    fn test_config_file_operations() {
        let mut config = PrintadmConfig::default();
        config.server.port = 9192;
        let temp_file = NamedTempFile::new().unwrap();

        config.save_to_file(temp_file.path()).unwrap();

        let loaded = PrintadmConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.server.port, 9192);
    }

    #[test]
    fn test_config_validation() {
        let mut config = PrintadmConfig::default();
        assert!(config.validate().is_ok());

        config.server.port = 0;
        assert!(config.validate().is_err());

        config.server.port = 9191;
        config.server.timeout = Some(0);
        assert!(config.validate().is_err());

        config.server.timeout = Some(30);
        config.server.host = String::new();
        assert!(config.validate().is_err());
    }
}
