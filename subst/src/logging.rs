//! Diagnostics for `subst` runs.
//!
//! Two output channels, never mixed:
//!
//! - **stdout**: the one confirmation line (or nothing with `--quiet`), so
//!   scripts can capture it verbatim.
//! - **stderr**: `tracing` events (config resolution, staged writes, the
//!   replacement-contains-search warning) and the final error report.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
///
/// `--quiet` also drops the replacement-contains-search warning.
pub fn default_directive(quiet: bool) -> &'static str {
    if quiet { "error" } else { "warn" }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins over the default directive:
///
/// ```bash
/// RUST_LOG=subst=debug subst --path index.tsx --dry-run
/// ```
pub fn init(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
