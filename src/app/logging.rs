//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

fn default_directive(debug: bool) -> &'static str {
    if debug { "debug" } else { "warn" }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the level chosen by `debug`.
///
/// Repeated calls keep the first subscriber.
pub fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
