// SPDX-License-Identifier: MPL-2.0
//! Immutable runtime configuration for the control panel.
//!
//! Values are resolved once at start-up, highest priority first:
//! 1. CLI argument (`--api-url`, base URL only)
//! 2. Environment variables (`CAM_LENS_API_URL`, `CAM_LENS_API_KEY`,
//!    `CAM_LENS_ACCESS_PASSWORD`)
//! 3. `settings.toml`
//! 4. Values baked in at build time through the same environment variable names
//!
//! The result is shared behind an `Arc` and never mutated afterwards.

use super::{
    Config, DEFAULT_API_BASE_URL, DEFAULT_GRID_COLUMNS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_STATUS_TIMEOUT_SECS, MAX_GRID_COLUMNS, MAX_REQUEST_TIMEOUT_SECS,
    MAX_STATUS_TIMEOUT_SECS, MIN_GRID_COLUMNS, MIN_REQUEST_TIMEOUT_SECS,
    MIN_STATUS_TIMEOUT_SECS,
};
use std::fmt;
use std::time::Duration;

pub const ENV_API_URL: &str = "CAM_LENS_API_URL";
pub const ENV_API_KEY: &str = "CAM_LENS_API_KEY";
pub const ENV_ACCESS_PASSWORD: &str = "CAM_LENS_ACCESS_PASSWORD";

const BUILD_API_URL: Option<&str> = option_env!("CAM_LENS_API_URL");
const BUILD_API_KEY: Option<&str> = option_env!("CAM_LENS_API_KEY");
const BUILD_ACCESS_PASSWORD: Option<&str> = option_env!("CAM_LENS_ACCESS_PASSWORD");

/// The page access secret.
///
/// An unset or empty secret never matches, so a missing configuration
/// behaves exactly like a wrong password.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccessSecret(Option<String>);

impl AccessSecret {
    #[must_use]
    pub fn new(secret: Option<String>) -> Self {
        Self(secret.filter(|s| !s.is_empty()))
    }

    /// Byte-for-byte comparison against the configured secret.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match &self.0 {
            Some(secret) => secret.as_bytes() == candidate.as_bytes(),
            None => false,
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Debug for AccessSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("AccessSecret(<redacted>)"),
            None => f.write_str("AccessSecret(<unset>)"),
        }
    }
}

/// Resolved, read-only configuration handed to the components that need it.
#[derive(Clone)]
pub struct PanelConfig {
    api_base_url: String,
    api_key: Option<String>,
    access_secret: AccessSecret,
    request_timeout: Duration,
    status_timeout: Duration,
    grid_columns: usize,
}

impl fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelConfig")
            .field("api_base_url", &self.api_base_url)
            .field("api_key_set", &self.api_key.is_some())
            .field("access_secret", &self.access_secret)
            .field("request_timeout", &self.request_timeout)
            .field("status_timeout", &self.status_timeout)
            .field("grid_columns", &self.grid_columns)
            .finish()
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            access_secret: AccessSecret::default(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            status_timeout: Duration::from_secs(u64::from(DEFAULT_STATUS_TIMEOUT_SECS)),
            grid_columns: DEFAULT_GRID_COLUMNS as usize,
        }
    }
}

impl PanelConfig {
    /// Resolves the panel configuration from the file config, the process
    /// environment and an optional `--api-url` CLI value.
    #[must_use]
    pub fn resolve(config: &Config, cli_api_url: Option<String>) -> Self {
        Self::resolve_with_env(config, cli_api_url, |name| std::env::var(name).ok())
    }

    /// Same as [`PanelConfig::resolve`] with an injectable environment lookup.
    pub fn resolve_with_env(
        config: &Config,
        cli_api_url: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        // Credentials are compared byte for byte, so only an empty value counts as unset.
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        let api_base_url = non_blank(cli_api_url)
            .or_else(|| non_blank(env(ENV_API_URL)))
            .or_else(|| non_blank(config.api.base_url.clone()))
            .or_else(|| non_blank(BUILD_API_URL.map(str::to_string)))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let api_key = non_empty(env(ENV_API_KEY))
            .or_else(|| non_empty(config.api.api_key.clone()))
            .or_else(|| non_empty(BUILD_API_KEY.map(str::to_string)));

        let access_password = non_empty(env(ENV_ACCESS_PASSWORD))
            .or_else(|| non_empty(config.access.password.clone()))
            .or_else(|| non_empty(BUILD_ACCESS_PASSWORD.map(str::to_string)));

        let request_timeout_secs = config
            .api
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        let status_timeout_secs = config
            .gallery
            .status_timeout_secs
            .unwrap_or(DEFAULT_STATUS_TIMEOUT_SECS)
            .clamp(MIN_STATUS_TIMEOUT_SECS, MAX_STATUS_TIMEOUT_SECS);
        let grid_columns = config
            .gallery
            .columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS);

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_key,
            access_secret: AccessSecret::new(access_password),
            request_timeout: Duration::from_secs(request_timeout_secs),
            status_timeout: Duration::from_secs(u64::from(status_timeout_secs)),
            grid_columns: grid_columns as usize,
        }
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn access_secret(&self) -> &AccessSecret {
        &self.access_secret
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// How long a capture status message stays on screen.
    #[must_use]
    pub fn status_timeout(&self) -> Duration {
        self.status_timeout
    }

    #[must_use]
    pub fn grid_columns(&self) -> usize {
        self.grid_columns
    }

    /// Builder-style override used by tests and the headless helpers.
    #[must_use]
    pub fn with_api(mut self, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_string();
        self.api_key = api_key;
        self
    }

    /// Builder-style override of the access secret.
    #[must_use]
    pub fn with_access_secret(mut self, secret: impl Into<String>) -> Self {
        self.access_secret = AccessSecret::new(Some(secret.into()));
        self
    }
}
