//! Diagnostic logging setup for the `neo` binary.
//!
//! Diagnostics go to stderr so that query results printed on stdout stay
//! clean. `RUST_LOG` directives take precedence over the `--log-level` flag.

use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

pub fn init_logging(level: &str) {
    let (default_level, invalid) = match level.parse::<LevelFilter>() {
        Ok(parsed) => (parsed, false),
        Err(_) => (LevelFilter::INFO, true),
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default());

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).init();

    if invalid {
        tracing::warn!("Invalid log level '{}', defaulting to 'info'", level);
    }
}
