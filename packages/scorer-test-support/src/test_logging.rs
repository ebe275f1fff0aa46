//! Unified test logging initialization
//!
//! One initialization path shared by unit tests and integration tests, so
//! log capture behaves the same everywhere.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    // TEST_LOG wins over RUST_LOG so test runs can be tuned without
    // touching the filter the binary uses.
    for var in ["TEST_LOG", "RUST_LOG"] {
        if let Ok(directives) = std::env::var(var) {
            return EnvFilter::new(directives);
        }
    }
    EnvFilter::new(DEFAULT_FILTER)
}

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe; calling it from every test is fine. The filter
/// is taken from `TEST_LOG`, then `RUST_LOG`, then defaults to `"warn"`.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(env_filter())
            .with_test_writer() // cargo/nextest output capture
            .without_time() // stable output
            .try_init()
            .ok(); // tolerate an already-installed subscriber
    });
}
