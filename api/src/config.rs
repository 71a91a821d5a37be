//! Executor configuration.
//!
//! An [`ApiConfig`] holds everything an [`Executor`](crate::Executor) needs:
//! the service address, Basic auth credentials, the content type preference
//! and an optional timeout. Embedding applications normally construct it
//! directly; [`ApiConfig::from_env`] reads the conventional `CCB_*` variables
//! for command-line use.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::content_type::ContentType;
use crate::error::ConfigError;

/// Environment variable holding the service base URL.
pub const ENV_BASE_URL: &str = "CCB_BASE_URL";
/// Environment variable holding the Basic auth username.
pub const ENV_USERNAME: &str = "CCB_USERNAME";
/// Environment variable holding the Basic auth password.
pub const ENV_PASSWORD: &str = "CCB_PASSWORD";
/// Optional environment variable selecting `json` or `xml`.
pub const ENV_CONTENT_TYPE: &str = "CCB_CONTENT_TYPE";
/// Optional environment variable with a request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "CCB_TIMEOUT_SECS";

/// Immutable connection settings for an executor.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL every request is sent to.
    pub base_url: Url,
    /// Basic auth username.
    pub username: String,
    /// Basic auth password.
    pub password: String,
    /// Body format for requests and responses.
    pub content_type: ContentType,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Creates a configuration with JSON bodies and no timeout.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `base_url` does not parse.
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            username: username.into(),
            password: password.into(),
            content_type: ContentType::default(),
            timeout: None,
        })
    }

    /// Reads the configuration from the process environment.
    ///
    /// `CCB_BASE_URL`, `CCB_USERNAME` and `CCB_PASSWORD` are required.
    /// `CCB_CONTENT_TYPE` defaults to `json`; `CCB_TIMEOUT_SECS` is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::missing_env(key));

        let mut config = Self::new(
            &require(ENV_BASE_URL)?,
            require(ENV_USERNAME)?,
            require(ENV_PASSWORD)?,
        )?;

        if let Some(raw) = get(ENV_CONTENT_TYPE) {
            config.content_type = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::UnknownContentType { value: raw.clone() })?;
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw.clone() })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("content_type", &self.content_type)
            .field("timeout", &self.timeout)
            .finish()
    }
}
