//! Logging setup: events go to stderr so reports on stdout stay clean.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Maps `-v` occurrences to the default level.
pub fn default_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber.
///
/// `directives` (from `ARMORY_LOG` or `RUST_LOG`) refine the default level set by
/// `verbose`; invalid directives are ignored.
pub fn setup_logging(verbose: u8, directives: Option<&str>) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .parse_lossy(directives.unwrap_or_default());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
