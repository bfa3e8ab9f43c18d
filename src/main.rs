use std::process::exit;
use std::time::Duration;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pushbeat::config::{self, PushConfig};
use pushbeat::pusher::PusherService;

#[derive(Parser, Debug)]
#[command(name = "pushbeat", version)]
#[command(about = "Push a liveness heartbeat to an HTTP monitoring endpoint, forever", long_about = None)]
#[command(
    after_help = "Set PUSH_TOKEN to authenticate: pushes then switch from GET to POST and \
                  carry the token in the X-Push-Token header."
)]
struct Cli {
    /// Push URL of the monitoring endpoint
    url: String,

    /// Seconds to wait between pushes
    #[arg(
        value_name = "INTERVAL_SECONDS",
        value_parser = config::parse_interval,
        allow_negative_numbers = true
    )]
    interval: Option<Duration>,
}

/// clap exits with 2 on usage errors; this tool exits with 1.
fn usage_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Parse arguments, exiting on a usage error after printing it.
fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        let code = usage_exit_code(err.kind());
        let _ = err.print();
        exit(code);
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = parse_cli();

    config::validate_push_url(&cli.url)
        .with_context(|| format!("cannot push to '{}'", cli.url))?;

    let mut push = PushConfig::new(cli.url);
    if let Some(interval) = cli.interval {
        push = push.with_interval(interval);
    }
    if let Some(token) = config::token_from_env() {
        info!("PUSH_TOKEN is set, pushing via POST");
        push = push.with_token(token);
    }

    PusherService::new(push).run().await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_url_only_leaves_interval_unset() {
        let cli = Cli::try_parse_from(["pushbeat", "http://example.com/api/push"]).unwrap();
        assert_eq!(cli.url, "http://example.com/api/push");
        assert!(cli.interval.is_none());
    }

    #[test]
    fn test_cli_parses_interval_seconds() {
        let cli =
            Cli::try_parse_from(["pushbeat", "http://example.com/api/push", "30"]).unwrap();
        assert_eq!(cli.interval, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_cli_requires_url() {
        let err = Cli::try_parse_from(["pushbeat"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("Usage:"));
    }

    #[test]
    fn test_usage_errors_exit_with_one() {
        assert_eq!(usage_exit_code(ErrorKind::MissingRequiredArgument), 1);
        assert_eq!(usage_exit_code(ErrorKind::ValueValidation), 1);
        assert_eq!(usage_exit_code(ErrorKind::UnknownArgument), 1);
    }

    #[test]
    fn test_help_and_version_exit_clean() {
        assert_eq!(usage_exit_code(ErrorKind::DisplayHelp), 0);
        assert_eq!(usage_exit_code(ErrorKind::DisplayVersion), 0);
    }

    #[test]
    fn test_cli_rejects_unparseable_interval() {
        assert!(Cli::try_parse_from(["pushbeat", "http://example.com", "soon"]).is_err());
    }

    #[test]
    fn test_cli_rejects_negative_interval() {
        assert!(Cli::try_parse_from(["pushbeat", "http://example.com", "-5"]).is_err());
    }
}
