//! Tracing subscriber setup for the command-line front end.
//!
//! The library only emits `tracing` events (and `log` records from config
//! loading); installing a subscriber is left to the host. `RUST_LOG` takes
//! precedence over the `-v` count.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count when `RUST_LOG` is unset
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "skinplan=info",
        2 => "skinplan=debug",
        _ => "skinplan=trace",
    }
}

/// Install a stderr formatter. Calling it twice is harmless; the second
/// call reports an error that callers may ignore.
pub fn init_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
