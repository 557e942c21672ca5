pub mod builders;
pub mod fake_image;

use std::sync::Once;
use execlaunch::cli::LogLevel;
use execlaunch::logging::filter_directives;
use tracing_subscriber::{fmt, EnvFilter};

pub use fake_image::FakeProcessImage;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Defaults to the launcher's own `debug` events (exec attempts and
/// failures) with dependencies at `warn`. Override with e.g.:
/// `RUST_LOG=execlaunch=trace cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(filter_directives(Some(LogLevel::Debug), None)));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Run a future with a 5-second timeout.
#[allow(dead_code)]
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("Test timed out after 5 seconds")
}
