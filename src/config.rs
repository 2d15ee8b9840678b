use std::env;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::endpoints::{ApiEndpoints, Endpoint};
use crate::error::ConfigError;

/// Primary base URL variable
pub const API_BASE_URL_ENV: &str = "VITE_API_BASE_URL";
/// Backend URL fallback
pub const BACKEND_URL_ENV: &str = "VITE_BACKEND_URL";
/// API URL fallback
pub const API_URL_ENV: &str = "VITE_API_URL";

/// Base URL variables in priority order; the first non-blank value wins
pub const BASE_URL_VARS: [&str; 3] = [API_BASE_URL_ENV, BACKEND_URL_ENV, API_URL_ENV];

static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Root address every endpoint URL is derived from, without a trailing slash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Trim `raw` and strip one trailing slash. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let normalized = trimmed.strip_suffix('/').unwrap_or(trimmed);
        Some(BaseUrl(normalized.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the base URL through `lookup`, trying each of [`BASE_URL_VARS`] in order
pub fn resolve_base_url_with<F>(lookup: F) -> Result<BaseUrl, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for name in BASE_URL_VARS {
        match lookup(name) {
            Some(value) => match BaseUrl::parse(&value) {
                Some(base_url) => {
                    tracing::debug!("Base URL resolved from {}", name);
                    return Ok(base_url);
                }
                None => tracing::debug!("{} is set but blank, skipping", name),
            },
            None => tracing::debug!("{} has no usable value", name),
        }
    }

    Err(ConfigError::MissingConfiguration {
        checked: BASE_URL_VARS.to_vec(),
    })
}

/// Resolve the base URL from the process environment
pub fn resolve_base_url() -> Result<BaseUrl, ConfigError> {
    resolve_base_url_with(read_env)
}

/// Read a process variable; values that are not valid unicode count as absent
fn read_env(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => {
            tracing::debug!("{} is not set", name);
            None
        }
        Err(env::VarError::NotUnicode(_)) => {
            tracing::debug!("{} is set but is not valid unicode, skipping", name);
            None
        }
    }
}

/// Resolved base URL together with its derived endpoint table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: BaseUrl,
    pub endpoints: ApiEndpoints,
}

impl ApiConfig {
    pub fn new(base_url: BaseUrl) -> Self {
        let endpoints = ApiEndpoints::from_base(&base_url);
        ApiConfig {
            base_url,
            endpoints,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        resolve_base_url().map(ApiConfig::new)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        resolve_base_url_with(lookup).map(ApiConfig::new)
    }

    /// Build from an explicit URL, applying the same normalization as the env lookup
    pub fn from_base_url(raw: &str) -> Result<Self, ConfigError> {
        BaseUrl::parse(raw)
            .map(ApiConfig::new)
            .ok_or_else(|| ConfigError::MissingConfiguration {
                checked: BASE_URL_VARS.to_vec(),
            })
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> &str {
        self.endpoints.get(endpoint)
    }

    pub fn log_startup(&self) {
        tracing::info!("API configuration loaded:");
        tracing::info!("  Base URL: {}", self.base_url);
        for (endpoint, url) in self.endpoints.iter() {
            tracing::info!("  {}: {}", endpoint.name(), url);
        }
    }
}

/// Resolve the configuration from the environment once for the whole process.
///
/// Later calls return the stored instance without re-reading the environment.
/// A failed resolution stores nothing, so a later call may still succeed.
pub fn init() -> Result<&'static ApiConfig, ConfigError> {
    if let Some(config) = API_CONFIG.get() {
        return Ok(config);
    }

    let config = ApiConfig::from_env()?;
    Ok(API_CONFIG.get_or_init(|| config))
}

/// The process-wide configuration, if [`init`] has succeeded
pub fn api_config() -> Option<&'static ApiConfig> {
    API_CONFIG.get()
}
