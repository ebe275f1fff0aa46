//! Shared configuration for the domain property suites.

use proptest::prelude::ProptestConfig;

/// Helper to get proptest config from environment.
///
/// Increase cases locally with: `PROPTEST_CASES=800 cargo test`.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32); // Low default for fast CI

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
