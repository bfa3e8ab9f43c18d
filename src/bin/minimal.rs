//! Minimal hardcoded push loop.
//!
//! The snippet-style counterpart to the `pushbeat` CLI: endpoint, token, and
//! cadence are compile-time constants, and every push is a POST carrying the
//! default `status=up&msg=OK&ping=` form body plus the token header. Edit the
//! constants and run with `cargo run --bin pushbeat-minimal`.

use std::time::Duration;

use pushbeat::config::{PushConfig, StatusReport};
use pushbeat::pusher::PusherService;

const PUSH_URL: &str = "https://example.com/api/push";
const PUSH_TOKEN: &str = "your-token";
const INTERVAL_SECS: u64 = 60;

#[tokio::main]
async fn main() {
    let config = PushConfig::new(PUSH_URL)
        .with_interval(Duration::from_secs(INTERVAL_SECS))
        .with_token(PUSH_TOKEN)
        .with_payload(StatusReport::default());

    PusherService::new(config).run().await;
}
