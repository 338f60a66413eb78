//! Client configuration resolved from the build environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is static, so values are captured at compile time with
//! `option_env!` and parsed through `ClientConfig::from_values`, which keeps
//! the parsing rules testable without touching the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Period of the live-rides poll.
    pub poll_interval_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Optional:
    /// - `ECORIDE_API_URL`: default `http://localhost:5000`
    /// - `ECORIDE_POLL_INTERVAL_MS`: default 5000
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("ECORIDE_API_URL"), option_env!("ECORIDE_POLL_INTERVAL_MS"))
    }

    /// Parse raw values. Blank URLs and zero or non-numeric intervals fall back
    /// to their defaults.
    pub fn from_values(base_url: Option<&str>, poll_interval_ms: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_owned();
        let poll_interval_ms = poll_interval_ms
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        Self { base_url, poll_interval_ms }
    }

    /// Root that relative API paths resolve against.
    pub fn api_root(&self) -> String {
        format!("{}/api", self.base_url)
    }

    /// Absolute URL of the backend liveness probe.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}
