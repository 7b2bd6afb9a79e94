use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static INIT_TRACING: Once = Once::new();

/// Installs a formatting subscriber for tests, once per process.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. Output goes through the test
/// writer so it is captured per test.
pub fn init_test_tracing() {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // Another subscriber may already be installed by the test binary.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}
