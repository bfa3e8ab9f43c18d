//! Push senders - trait seam plus the reqwest-backed implementation.

use async_trait::async_trait;
use tracing::debug;

use crate::config::PushConfig;
use crate::error::Result;

/// Header carrying the push token on authenticated pushes.
pub const PUSH_TOKEN_HEADER: &str = "X-Push-Token";

/// Result of a single push cycle.
///
/// A cycle either reached the endpoint and got a 2xx back, or it failed.
/// Everything else, from a URL that never parses to a 500 from the
/// server, collapses into `Failure` with a human-readable reason; the
/// loop treats them all the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Request was sent and answered with a 2xx status.
    Success,
    /// Anything else, with the reason to report.
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// A sender performs one push attempt per call.
///
/// The service loop only sees this trait, so tests swap in recording
/// fakes without touching the network.
#[async_trait]
pub trait PushSender: Send + Sync {
    /// Attempt a single push. Never errors: failures are data.
    async fn send(&self, config: &PushConfig) -> Outcome;
}

/// Sender backed by a shared reqwest client.
///
/// The client keeps reqwest's defaults: no request timeout, so a stalled
/// endpoint delays the next cycle instead of failing early.
pub struct HttpSender {
    client: reqwest::Client,
}

impl HttpSender {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Build the request for one push without sending it.
    ///
    /// Construction can fail on its own (malformed URL), and the caller
    /// reports that exactly like a transport failure.
    fn build_request(&self, config: &PushConfig) -> Result<reqwest::Request> {
        let mut builder = self
            .client
            .request(config.method().as_http(), &config.url);

        if let Some(token) = config.auth_token() {
            builder = builder.header(PUSH_TOKEN_HEADER, token);
        }
        if let Some(report) = &config.payload {
            builder = builder.form(report);
        }

        Ok(builder.build()?)
    }
}

impl Default for HttpSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PushSender for HttpSender {
    async fn send(&self, config: &PushConfig) -> Outcome {
        let request = match self.build_request(config) {
            Ok(request) => request,
            Err(e) => return Outcome::Failure(e.to_string()),
        };

        debug!("Sending {} push to {}", config.method(), config.url);

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    Outcome::Success
                } else {
                    Outcome::Failure(format!("server responded with {status}"))
                }
            }
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }
}
