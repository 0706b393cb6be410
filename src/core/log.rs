//! Logging initialization

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, filter::Targets, fmt, prelude::*};

/// Installs the global subscriber.
///
/// Fallback decisions are logged at WARN, so they stay visible without `--verbose`.
pub fn init_logging(verbose: bool) {
    let (crate_level, default_directive) = if verbose {
        (LevelFilter::DEBUG, "debug")
    } else {
        (LevelFilter::WARN, "warn")
    };
    let crate_filter = Targets::new()
        .with_target(env!("CARGO_CRATE_NAME"), crate_level)
        .with_default(LevelFilter::WARN);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(crate_filter)
        .with(env_filter)
        .init();
}
