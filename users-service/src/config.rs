//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: USERS_, nested keys separated by `__`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/users-service/config.toml
//! 4. System directory: /etc/users-service/config.toml
//! 5. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "USERS_";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,

    /// Users collection configuration
    #[serde(default)]
    pub users: UsersConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Address to bind
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format (json, pretty)
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Version reported by the health and info endpoints
    #[serde(default = "default_version")]
    pub version: String,
}

impl ServiceConfig {
    /// Socket address the server binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in MB
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// Enable panic recovery middleware
    #[serde(default = "default_true")]
    pub catch_panic: bool,

    /// Enable compression
    #[serde(default = "default_true")]
    pub compression: bool,

    /// CORS mode (permissive, restrictive)
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,

    /// Enable request ID generation and propagation
    #[serde(default = "default_true")]
    pub request_id: bool,

    /// Security response headers
    #[serde(default)]
    pub security_headers: SecurityHeadersConfig,
}

impl MiddlewareConfig {
    /// Body limit in bytes
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb * 1024 * 1024
    }
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            catch_panic: true,
            compression: true,
            cors_mode: default_cors_mode(),
            request_id: true,
            security_headers: SecurityHeadersConfig::default(),
        }
    }
}

/// Security response headers configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityHeadersConfig {
    /// Apply security headers at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Send `X-Content-Type-Options: nosniff`
    #[serde(default = "default_true")]
    pub x_content_type_options: bool,

    /// `X-Frame-Options` value (empty disables the header)
    #[serde(default = "default_frame_options")]
    pub x_frame_options: String,

    /// Send `X-XSS-Protection: 0`
    #[serde(default = "default_true")]
    pub x_xss_protection: bool,

    /// `Referrer-Policy` value (empty disables the header)
    #[serde(default = "default_referrer_policy")]
    pub referrer_policy: String,

    /// Optional `Permissions-Policy` value
    #[serde(default)]
    pub permissions_policy: Option<String>,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            x_content_type_options: true,
            x_frame_options: default_frame_options(),
            x_xss_protection: true,
            referrer_policy: default_referrer_policy(),
            permissions_policy: None,
        }
    }
}

/// Users collection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersConfig {
    /// Populate the collection with the two seed records at startup
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

// Default value functions
fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_true() -> bool {
    true
}

fn default_body_limit_mb() -> usize {
    1
}

fn default_cors_mode() -> String {
    "permissive".to_string()
}

fn default_frame_options() -> String {
    "SAMEORIGIN".to_string()
}

fn default_referrer_policy() -> String {
    "no-referrer".to_string()
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Config files are merged lowest priority first, so the working
    /// directory file wins over the XDG and system files. Environment
    /// variables override every file.
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Bypasses the XDG and system directories. Environment variables still
    /// take precedence over the file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }

    /// Config file paths in priority order (highest first)
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix("users-service");
        if let Ok(path) = xdg_dirs.place_config_file("config.toml") {
            paths.push(path);
        }

        paths.push(PathBuf::from("/etc/users-service/config.toml"));

        paths
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "users-service".to_string(),
                host: default_host(),
                port: default_port(),
                log_level: default_log_level(),
                log_format: default_log_format(),
                timeout_secs: default_timeout(),
                environment: default_environment(),
                version: default_version(),
            },
            middleware: MiddlewareConfig::default(),
            users: UsersConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.port, 3000);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.service.version, "1.0.0");
        assert_eq!(config.middleware.cors_mode, "permissive");
        assert_eq!(config.middleware.body_limit_bytes(), 1024 * 1024);
        assert!(config.users.seed);
    }

    #[test]
    fn test_bind_addr() {
        let config = Config::default();
        assert_eq!(config.service.bind_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.service.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[service]
name = "users-test"
port = 4100
log_format = "pretty"

[middleware]
cors_mode = "restrictive"

[middleware.security_headers]
x_frame_options = "DENY"

[users]
seed = false
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.service.name, "users-test");
        assert_eq!(config.service.port, 4100);
        assert_eq!(config.service.log_format, "pretty");
        // Unset keys keep their defaults
        assert_eq!(config.service.timeout_secs, 30);
        assert_eq!(config.middleware.cors_mode, "restrictive");
        assert_eq!(config.middleware.security_headers.x_frame_options, "DENY");
        assert!(config.middleware.security_headers.x_content_type_options);
        assert!(!config.users.seed);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.service.name, "users-service");
        assert_eq!(config.service.port, 3000);
    }
}
