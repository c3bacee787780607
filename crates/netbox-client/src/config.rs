//! Client configuration
//!
//! Resolves the target server and API token from the environment, falling
//! back to a local development server and a placeholder token.

use std::env;
use std::fmt;
use std::time::Duration;

use tracing::warn;

/// Environment variable holding the NetBox base URL
pub const NETBOX_URL_ENV: &str = "NETBOX_URL";
/// Environment variable holding the API token
pub const NETBOX_API_TOKEN_ENV: &str = "NETBOX_API_TOKEN";
/// Environment variable holding the request timeout in seconds
pub const NETBOX_TIMEOUT_ENV: &str = "NETBOX_TIMEOUT_SECS";

/// Server used when `NETBOX_URL` is unset
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
/// Placeholder token used when `NETBOX_API_TOKEN` is unset.
///
/// Not a credential. Only useful against a throwaway dev instance seeded
/// with this exact token.
pub const PLACEHOLDER_API_TOKEN: &str = "0123456789abcdef0123456789abcdef01234567";
/// Request timeout used when `NETBOX_TIMEOUT_SECS` is unset or unparsable
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a NetBox instance
#[derive(Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Base URL without trailing slash (e.g. `http://localhost:8000`)
    pub server_url: String,
    /// API token sent as `Authorization: Token <token>`
    pub api_token: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.uses_placeholder_token() { "<placeholder>" } else { "<redacted>" };
        f.debug_struct("Configuration")
            .field("server_url", &self.server_url)
            .field("api_token", &token)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL, PLACEHOLDER_API_TOKEN)
    }
}

impl Configuration {
    /// Build a configuration from explicit values.
    pub fn new(server_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read `NETBOX_URL`, `NETBOX_API_TOKEN` and `NETBOX_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through `lookup`; unset or empty values take the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let server_url = non_empty(NETBOX_URL_ENV).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let api_token =
            non_empty(NETBOX_API_TOKEN_ENV).unwrap_or_else(|| PLACEHOLDER_API_TOKEN.to_string());

        let timeout = match non_empty(NETBOX_TIMEOUT_ENV) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!("Ignoring invalid {}={:?}, using default", NETBOX_TIMEOUT_ENV, raw);
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        let config = Self::new(server_url, api_token).with_timeout(timeout);
        if config.uses_placeholder_token() {
            warn!(
                "Using the placeholder API token against {}; set {} for a real server",
                config.server_url, NETBOX_API_TOKEN_ENV
            );
        }
        config
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether the built-in placeholder token is in use.
    pub fn uses_placeholder_token(&self) -> bool {
        self.api_token == PLACEHOLDER_API_TOKEN
    }

    /// Value for the `Authorization` header
    pub fn auth_header(&self) -> String {
        format!("Token {}", self.api_token)
    }
}
