//! Heartbeat pusher - the periodic push loop and its HTTP sender.

mod sender;
mod service;

pub use sender::{HttpSender, Outcome, PushSender, PUSH_TOKEN_HEADER};
pub use service::PusherService;
