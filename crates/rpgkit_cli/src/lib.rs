//! Shared setup for the `rpgkit-*` binaries.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub fn derive_default_log_filter(if_quiet: bool) -> &'static str {
    if if_quiet { "warn" } else { "info" }
}

/// Install the `fmt` subscriber; `RUST_LOG` overrides the default level.
pub fn init_tracing(if_quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(derive_default_log_filter(if_quiet)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
