use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NtopngConfig {
    /// Base URL of the ntopng web interface, e.g. `http://localhost:3000`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub auth_method: AuthMethod,

    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_scrape_interval")]
    pub scrape_interval: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout: String,

    /// Empty disables periodic re-resolution of interface ids.
    #[serde(default)]
    pub interface_refresh_interval: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    Cookie,
    Basic,
    #[default]
    None,
}

impl NtopngConfig {
    pub fn scrape_interval(&self) -> Result<Duration, DomainError> {
        parse_interval(&self.scrape_interval)
    }

    pub fn request_timeout(&self) -> Result<Duration, DomainError> {
        parse_interval(&self.request_timeout)
    }

    pub fn interface_refresh_interval(&self) -> Result<Option<Duration>, DomainError> {
        if self.interface_refresh_interval.trim().is_empty() {
            return Ok(None);
        }
        parse_interval(&self.interface_refresh_interval).map(Some)
    }
}

impl Default for NtopngConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            auth_method: AuthMethod::default(),
            user: String::new(),
            password: String::new(),
            scrape_interval: default_scrape_interval(),
            request_timeout: default_request_timeout(),
            interface_refresh_interval: String::new(),
        }
    }
}

/// Parses duration strings such as `30s`, `1m30s` or `2h`. Zero is rejected.
pub fn parse_interval(value: &str) -> Result<Duration, DomainError> {
    let interval = match humantime::parse_duration(value.trim()) {
        Ok(interval) => interval,
        Err(e) => return Err(invalid_interval(value, &e.to_string())),
    };

    if interval.is_zero() {
        return Err(invalid_interval(value, "interval must be non-zero"));
    }

    Ok(interval)
}

fn invalid_interval(value: &str, reason: &str) -> DomainError {
    DomainError::IntervalParse {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn default_endpoint() -> String {
    "http://localhost:3000".to_string()
}

fn default_scrape_interval() -> String {
    "30s".to_string()
}

fn default_request_timeout() -> String {
    "10s".to_string()
}
