//! Service roots and HTTP client tuning.

use crate::{Error, ErrorContext, Result};
use std::env;
use std::time::Duration;
use url::Url;

const DEFAULT_API_HOST: &str = "http://localhost:8080";

/// HTTP client tuning knobs. Minimal production-friendly defaults,
/// env-overridable.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl HttpOptions {
    /// Defaults overridden by `PLATFORM_HTTP_TIMEOUT_SECS`,
    /// `PLATFORM_HTTP_POOL_MAX_IDLE_PER_HOST` and
    /// `PLATFORM_HTTP_POOL_IDLE_TIMEOUT_SECS` where set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout: env::var("PLATFORM_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            pool_max_idle_per_host: env::var("PLATFORM_HTTP_POOL_MAX_IDLE_PER_HOST")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(defaults.pool_max_idle_per_host),
            pool_idle_timeout: env::var("PLATFORM_HTTP_POOL_IDLE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.pool_idle_timeout),
        }
    }
}

/// Where the administrative services live.
///
/// Two roots mirror the platform's deployment: `platform_base` for the
/// configuration/code-rule services, `iam_base` for user and role endpoints.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub platform_base: Url,
    pub iam_base: Url,
    pub http: HttpOptions,
}

impl ClientConfig {
    pub fn new(platform_base: &str, iam_base: &str) -> Result<Self> {
        Ok(Self {
            platform_base: parse_base(platform_base, "platform_base")?,
            iam_base: parse_base(iam_base, "iam_base")?,
            http: HttpOptions::default(),
        })
    }

    /// Build from `PLATFORM_API_HOST` (default `http://localhost:8080`),
    /// appending the standard `/hpfm` and `/iam` service prefixes.
    pub fn from_env() -> Result<Self> {
        let host = env::var("PLATFORM_API_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.to_string());
        let host = host.trim_end_matches('/');
        let mut config = Self::new(&format!("{host}/hpfm"), &format!("{host}/iam"))?;
        config.http = HttpOptions::from_env();
        Ok(config)
    }

    pub fn with_http_options(mut self, http: HttpOptions) -> Self {
        self.http = http;
        self
    }
}

fn parse_base(raw: &str, field: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| {
        Error::configuration_with_context(
            "invalid base URL",
            ErrorContext::new()
                .with_field_path(field)
                .with_details(e.to_string()),
        )
    })
}
