//! Configuration management for the client.

use std::env;
use std::time::Duration;

/// Default base URL of the form service API.
pub const DEFAULT_API_URL: &str = "https://dynamic.backsoul.com.co";

/// Default base URL of the public site that renders published forms.
pub const DEFAULT_PUBLIC_URL: &str = "https://www.dynamicform.site";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Form service API base, without trailing slash
    pub api_url: String,
    /// Public site base, without trailing slash
    pub public_url: String,
    /// Per-request timeout enforced by the HTTP transport
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("DYNAFORM_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let public_url =
            lookup("DYNAFORM_PUBLIC_URL").unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string());

        let timeout = match lookup("DYNAFORM_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => None,
        };

        Ok(Self::new(api_url, public_url).with_timeout(timeout))
    }

    /// Build a configuration from explicit base URLs.
    pub fn new(api_url: impl Into<String>, public_url: impl Into<String>) -> Self {
        Self {
            api_url: trim_base(api_url.into()),
            public_url: trim_base(public_url.into()),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid DYNAFORM_TIMEOUT_SECS value: {0}")]
    InvalidTimeout(String),
}
