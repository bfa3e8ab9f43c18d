//! Push configuration: target URL, cadence, credentials, and payload.
//!
//! A [`PushConfig`] describes everything one push attempt needs. The URL is
//! kept as a plain string so request construction can fail per cycle instead
//! of at startup; callers that want early feedback run [`validate_push_url`]
//! once before entering the loop.

use std::fmt;
use std::time::Duration;

use reqwest::Url;
use serde::Serialize;

use crate::error::{PushError, Result};

/// Environment variable holding the optional push token.
pub const PUSH_TOKEN_VAR: &str = "PUSH_TOKEN";

/// Interval used when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// HTTP method of a push attempt. Derived from the configuration, never set
/// directly: a token or a payload forces POST, otherwise the push is a GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub(crate) fn as_http(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// Monitor-facing status carried in the optional form body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PushStatus {
    #[default]
    Up,
    Down,
}

/// Optional form-encoded body of a push.
///
/// The defaults (`status=up&msg=OK&ping=`) match what push monitors expect
/// from a plain liveness signal; `ping` stays an empty string unless the
/// caller has a latency figure to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub status: PushStatus,
    pub msg: String,
    pub ping: String,
}

impl Default for StatusReport {
    fn default() -> Self {
        Self {
            status: PushStatus::Up,
            msg: "OK".to_string(),
            ping: String::new(),
        }
    }
}

/// Static inputs of a push attempt, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushConfig {
    /// Target URL of the monitoring endpoint.
    pub url: String,
    /// Wait duration between consecutive pushes.
    pub interval: Duration,
    /// Optional auth token, sent via the `X-Push-Token` header.
    pub token: Option<String>,
    /// Optional static form body.
    pub payload: Option<StatusReport>,
}

impl PushConfig {
    /// Create a configuration for `url` with the default interval, no token,
    /// and no body.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            interval: DEFAULT_INTERVAL,
            token: None,
            payload: None,
        }
    }

    /// Replace the push interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Attach an auth token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Attach a form body.
    pub fn with_payload(mut self, payload: StatusReport) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Token to send, if one is configured and non-empty.
    pub fn auth_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Method of every attempt under this configuration.
    pub fn method(&self) -> Method {
        if self.auth_token().is_some() || self.payload.is_some() {
            Method::Post
        } else {
            Method::Get
        }
    }
}

/// Read the push token from the environment. Unset and empty both mean
/// "no token".
pub fn token_from_env() -> Option<String> {
    std::env::var(PUSH_TOKEN_VAR).ok().filter(|t| !t.is_empty())
}

/// Parse an interval given as a number of seconds (fractional allowed).
pub fn parse_interval(s: &str) -> Result<Duration> {
    let secs: f64 = s.trim().parse().map_err(|_| {
        PushError::Config(format!("invalid interval '{s}': expected a number of seconds"))
    })?;

    Duration::try_from_secs_f64(secs).map_err(|_| {
        PushError::Config(format!(
            "invalid interval '{s}': must be a non-negative number of seconds that fits a Duration"
        ))
    })
}

/// Check that `url` parses as an http(s) URL.
pub fn validate_push_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url)
        .map_err(|e| PushError::Config(format!("invalid push URL '{url}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(PushError::Config(format!(
            "unsupported URL scheme '{other}': only http and https are supported"
        ))),
    }
}
