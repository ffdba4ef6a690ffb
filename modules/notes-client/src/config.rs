use std::env;
use std::time::Duration;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Base URL of the notes backend, e.g. "https://notes.example.com"
    pub const API_URL: &str = "NOTES_API_URL";
    /// Per-request timeout in whole seconds
    pub const TIMEOUT_SECS: &str = "NOTES_API_TIMEOUT_SECS";
}

/// Default values
pub mod defaults {
    pub const API_URL: &str = "http://localhost:8000";
    pub const TIMEOUT_SECS: u64 = 30;
}

/// Connection settings handed to [`crate::NotesClient`] at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_URL.to_string(),
            timeout: Duration::from_secs(defaults::TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings from any key/value source. Missing keys use [`defaults`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(env_vars::API_URL)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| defaults::API_URL.to_string());

        let timeout_secs = match lookup(env_vars::TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    log::warn!(
                        "Ignoring invalid {}={:?}, using {}s",
                        env_vars::TIMEOUT_SECS,
                        raw,
                        defaults::TIMEOUT_SECS
                    );
                    defaults::TIMEOUT_SECS
                }
            },
            None => defaults::TIMEOUT_SECS,
        };

        Self::default()
            .with_base_url(&base_url)
            .with_timeout(Duration::from_secs(timeout_secs))
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
