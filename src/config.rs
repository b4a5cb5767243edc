use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::validation::resolver::DEFAULT_DOH_ENDPOINT;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// # Service Configuration
///
/// Read from the process environment after `.env` has been loaded.
///
/// | variable | default |
/// |---|---|
/// | `SERVER_HOST` | `127.0.0.1` |
/// | `SERVER_PORT` | `8080` |
/// | `DOH_ENDPOINT` | `https://cloudflare-dns.com/dns-query` |
/// | `DNS_TIMEOUT_MS` | `3000` |
/// | `DISPOSABLE_DOMAINS_FILE` | unset |
/// | `ROLE_LOCAL_PARTS_FILE` | unset |
/// | `LOG_FORMAT` | `compact` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub doh_endpoint: String,
    pub dns_timeout: Duration,
    pub disposable_domains_file: Option<PathBuf>,
    pub role_local_parts_file: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            doh_endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            dns_timeout: Duration::from_millis(3000),
            disposable_domains_file: None,
            role_local_parts_file: None,
            log_format: LogFormat::Compact,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get("SERVER_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                expected: "a port number",
                value,
            })?,
            None => defaults.port,
        };

        let dns_timeout = match get("DNS_TIMEOUT_MS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DNS_TIMEOUT_MS",
                        expected: "a positive number of milliseconds",
                        value,
                    });
                }
            },
            None => defaults.dns_timeout,
        };

        let log_format = match get("LOG_FORMAT") {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "compact" => LogFormat::Compact,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "LOG_FORMAT",
                        expected: "`compact` or `json`",
                        value,
                    });
                }
            },
            None => defaults.log_format,
        };

        Ok(Self {
            host: get("SERVER_HOST").unwrap_or(defaults.host),
            port,
            doh_endpoint: get("DOH_ENDPOINT").unwrap_or(defaults.doh_endpoint),
            dns_timeout,
            disposable_domains_file: get("DISPOSABLE_DOMAINS_FILE").map(PathBuf::from),
            role_local_parts_file: get("ROLE_LOCAL_PARTS_FILE").map(PathBuf::from),
            log_format,
        })
    }
}
