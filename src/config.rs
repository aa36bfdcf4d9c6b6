//! Connection settings for the admin API
//!
//! Resolved once in `main` from CLI flags (with environment variable
//! fallback handled by clap) and passed by reference to everything that
//! talks to the service.

use std::time::Duration;

/// API base URL used when neither `--base-url` nor `LOUIE_API_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Per-request timeout applied to every admin API call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Admin API base URL, normalized to have no trailing slash.
    pub base_url: String,
    /// Bearer token sent in the `Authorization` header of every request.
    pub token: String,
}

impl Config {
    /// Build a config, normalizing the base URL.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }
}
