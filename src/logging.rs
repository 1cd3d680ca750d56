//! Logging setup
//!
//! `RUST_LOG` wins over the configured level; `-v` raises the configured
//! level. Logs go to stderr so command output on stdout stays parseable.

use tracing_subscriber::EnvFilter;

/// Filter directive for the configured level and the CLI verbosity count.
///
/// Verbosity never lowers a plain level that is already more verbose, and
/// custom directives such as `editor_host=trace` are kept as written.
pub fn level_directive(configured: &str, verbose: u8) -> String {
    let requested = match verbose {
        0 => return configured.to_string(),
        1 => "info",
        _ => "debug",
    };
    match (verbosity_rank(configured), verbosity_rank(requested)) {
        (Some(current), Some(wanted)) if current < wanted => requested.to_string(),
        _ => configured.to_string(),
    }
}

fn verbosity_rank(level: &str) -> Option<u8> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Some(0),
        "error" => Some(1),
        "warn" => Some(2),
        "info" => Some(3),
        "debug" => Some(4),
        "trace" => Some(5),
        _ => None,
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(configured: &str, verbose: u8) {
    let directive = level_directive(configured, verbose);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
