use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a full `tracing` filter directive.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Picks the filter: `-v`/`-vv` win, then `FOLIO_LOG`, then the configured level.
pub(super) fn filter(verbose: u8, configured: &str) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(configured)),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    }
}

/// Installs the stderr subscriber. Stdout stays reserved for command output.
pub(super) fn init(verbose: u8, configured: &str) {
    let _ = tracing_subscriber::registry()
        .with(filter(verbose, configured))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
