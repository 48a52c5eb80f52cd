//! Installs a `tracing_subscriber` registry which prints spans and
//! events to stdout, filtered by the environment.
//!
//! ```bash
//! RUST_LOG=streetmatch=debug
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
///
/// Returns `false` if a global subscriber was already installed.
pub fn initialize_tracer() -> bool {
    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
