//! Logging setup for the command-line tools.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` is used as given when set; otherwise the level is WARN.
/// `verbose` raises the global level to DEBUG in either case. Logs go to
/// stderr so stdout stays reserved for command output.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose, rust_log.as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let rust_log = rust_log.filter(|directives| !directives.trim().is_empty());
    match (verbose, rust_log) {
        (false, Some(directives)) => EnvFilter::new(directives),
        (true, Some(directives)) => {
            EnvFilter::new(directives).add_directive(tracing::Level::DEBUG.into())
        }
        (true, None) => EnvFilter::new("debug"),
        (false, None) => EnvFilter::new("warn"),
    }
}
