//! Pushbeat - dead man's switch heartbeat client for push monitoring endpoints

pub mod config;
pub mod error;
pub mod pusher;

pub use config::PushConfig;
pub use error::{PushError, Result};
pub use pusher::{HttpSender, Outcome, PushSender, PusherService};
