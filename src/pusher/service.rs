//! The push loop: tick, send, report, forever.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::config::PushConfig;
use crate::pusher::sender::{HttpSender, Outcome, PushSender};

/// tokio's interval panics on a zero period, so an interval of zero
/// runs at the shortest period the timer accepts.
const MIN_TICK: Duration = Duration::from_millis(1);

/// Drives a sender on a fixed cadence and reports every cycle.
///
/// The loop never exits and never escalates: a failed push is printed
/// and the next tick happens one full interval later, same as a
/// successful one. Ticks that fall behind (a slow endpoint holding the
/// cycle past the interval) are delayed rather than bunched, so two
/// pushes are never closer together than the configured interval.
pub struct PusherService {
    config: PushConfig,
    sender: Arc<dyn PushSender>,
}

impl PusherService {
    pub fn new(config: PushConfig) -> Self {
        Self::with_sender(config, Arc::new(HttpSender::new()))
    }

    pub fn with_sender(config: PushConfig, sender: Arc<dyn PushSender>) -> Self {
        Self { config, sender }
    }

    /// Run the push loop. The first push fires immediately.
    pub async fn run(self) {
        let period = self.config.interval.max(MIN_TICK);
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "Pushing to {} every {:?} ({})",
            self.config.url,
            self.config.interval,
            self.config.method()
        );

        loop {
            ticker.tick().await;
            let outcome = self.sender.send(&self.config).await;
            println!("{}", status_line(&outcome, self.config.interval));
        }
    }
}

/// One line per cycle, success or not.
fn status_line(outcome: &Outcome, interval: Duration) -> String {
    match outcome {
        Outcome::Success => format!("Pushed! Sleeping for {interval:?}"),
        Outcome::Failure(reason) => format!("Error: {reason}. Sleeping for {interval:?}"),
    }
}
