//! Storefront configuration
//!
//! Values come from a `.env` file (if present) and the process environment;
//! environment variables take precedence over `.env` values.
//!
//! ## Keys
//! - `STOREFRONT_API_URL`: base URL of the storefront API (default `http://127.0.0.1:5000`)
//! - `STOREFRONT_TIMEOUT_SECS`: per-request timeout in seconds (default `10`)
//! - `STOREFRONT_LOG_LEVEL`: tracing level for the bundler crates (default `info`)

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use url::Url;

use shared::SharedError;
use crate::error::{BundlerError, BundlerResult};

pub const API_URL_KEY: &str = "STOREFRONT_API_URL";
pub const TIMEOUT_KEY: &str = "STOREFRONT_TIMEOUT_SECS";
pub const LOG_LEVEL_KEY: &str = "STOREFRONT_LOG_LEVEL";

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Connection settings shared by the HTTP collaborators
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub api_base_url: Url,
    pub request_timeout: Duration,
    pub log_level: String,
}

impl StorefrontConfig {
    fn with_defaults(api_base_url: Url) -> Self {
        Self {
            api_base_url,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Config pointing at an explicit base URL, other values defaulted
    pub fn with_base_url(base_url: &str) -> BundlerResult<Self> {
        Ok(Self::with_defaults(parse_base_url(base_url)?))
    }

    /// Load from `.env` (if present) and the process environment
    pub fn from_env() -> BundlerResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();
        Self::from_vars(std::env::vars())
    }

    /// Load from a specific `.env` file, with the process environment taking precedence
    pub fn from_env_file(path: impl AsRef<Path>) -> BundlerResult<Self> {
        let path = path.as_ref();
        let file_vars = dotenvy::from_path_iter(path)
            .map_err(|e| BundlerError::ConfigError {
                message: format!("cannot read {}: {e}", path.display()),
            })?
            .collect::<Result<Vec<(String, String)>, _>>()
            .map_err(|e| BundlerError::ConfigError {
                message: format!("cannot parse {}: {e}", path.display()),
            })?;

        let mut vars: HashMap<String, String> = file_vars.into_iter().collect();
        for key in [API_URL_KEY, TIMEOUT_KEY, LOG_LEVEL_KEY] {
            if let Ok(value) = std::env::var(key) {
                vars.insert(key.to_string(), value);
            }
        }

        Self::from_vars(vars)
    }

    /// Build from key/value pairs; unknown keys are ignored
    pub fn from_vars<I, K, V>(vars: I) -> BundlerResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut api_base_url = None;
        let mut request_timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        let mut log_level = DEFAULT_LOG_LEVEL.to_string();

        for (key, value) in vars {
            let value: String = value.into();
            match key.as_ref() {
                API_URL_KEY => api_base_url = Some(parse_base_url(&value)?),
                TIMEOUT_KEY => request_timeout = parse_timeout(&value)?,
                LOG_LEVEL_KEY => log_level = parse_log_level(&value)?,
                _ => {}
            }
        }

        let api_base_url = match api_base_url {
            Some(url) => url,
            None => parse_base_url(DEFAULT_API_URL)?,
        };

        Ok(Self {
            api_base_url,
            request_timeout,
            log_level,
        })
    }

    /// Install the tracing subscriber at the configured level
    pub fn init_logging(&self) {
        shared::logging::init_tracing_with_level(Some(&self.log_level));
    }

    /// Resolve an API path against the base URL
    pub fn endpoint(&self, path: &str) -> BundlerResult<Url> {
        Ok(self.api_base_url.join(path.trim_start_matches('/'))?)
    }
}

fn invalid(field: &str, value: &str) -> BundlerError {
    SharedError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
    }
    .into()
}

/// Base URLs always end with `/` so relative joins keep any path prefix
fn parse_base_url(value: &str) -> BundlerResult<Url> {
    let trimmed = value.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&normalized)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(API_URL_KEY, value));
    }
    Ok(url)
}

fn parse_timeout(value: &str) -> BundlerResult<Duration> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(invalid(TIMEOUT_KEY, value)),
    }
}

fn parse_log_level(value: &str) -> BundlerResult<String> {
    let level = value.trim().to_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(invalid(LOG_LEVEL_KEY, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_vars() {
        let config = StorefrontConfig::from_vars([
            (API_URL_KEY, "https://shop.example/store"),
            (TIMEOUT_KEY, "3"),
            (LOG_LEVEL_KEY, "DEBUG"),
            ("UNRELATED", "ignored"),
        ])
        .unwrap();

        assert_eq!(config.api_base_url.as_str(), "https://shop.example/store/");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_values() {
        let bad_timeout = StorefrontConfig::from_vars([(TIMEOUT_KEY, "0")]);
        assert!(matches!(
            bad_timeout,
            Err(BundlerError::Shared(SharedError::InvalidConfig { .. }))
        ));

        let bad_level = StorefrontConfig::from_vars([(LOG_LEVEL_KEY, "loud")]);
        assert!(bad_level.is_err());

        let bad_scheme = StorefrontConfig::from_vars([(API_URL_KEY, "ftp://shop.example")]);
        assert!(bad_scheme.is_err());

        let not_a_url = StorefrontConfig::from_vars([(API_URL_KEY, "not a url")]);
        assert!(matches!(not_a_url, Err(BundlerError::InvalidUrl(_))));
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let config = StorefrontConfig::with_base_url("https://shop.example/store").unwrap();
        assert_eq!(
            config.endpoint("/api/products").unwrap().as_str(),
            "https://shop.example/store/api/products"
        );
        assert_eq!(
            config.endpoint("api/cart/add/7").unwrap().as_str(),
            "https://shop.example/store/api/cart/add/7"
        );
    }

    #[test]
    fn test_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "STOREFRONT_TIMEOUT_SECS=7").unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "UNRELATED_KEY=whatever").unwrap();

        let config = StorefrontConfig::from_env_file(file.path()).unwrap();

        // The process environment may override the file, so only assert what it cannot touch
        if std::env::var(TIMEOUT_KEY).is_err() {
            assert_eq!(config.request_timeout, Duration::from_secs(7));
        }
    }

    #[test]
    fn test_missing_env_file() {
        let result = StorefrontConfig::from_env_file("/definitely/not/here/.env");
        assert!(matches!(result, Err(BundlerError::ConfigError { .. })));
    }
}
