use tracing_subscriber::EnvFilter;

use crate::args::LogLevel;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the stderr subscriber. `--log-level` wins over `RUST_LOG`.
pub fn init(level: Option<LogLevel>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_DIRECTIVE.into()),
    };

    // A second init (e.g. several runs in one test process) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
