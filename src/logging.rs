//! Subscriber setup for the binary. The library only emits `tracing` events.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a stderr fmt subscriber. `RUST_LOG` wins over `verbose`.
/// Safe to call more than once.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let default = if verbose { "pkglock=debug" } else { "pkglock=warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        // a subscriber may already be set by an embedding application
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .without_time()
            .try_init();
    });
}
