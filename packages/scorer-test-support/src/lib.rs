//! Scorer test support utilities
//!
//! Shared helpers for the scorer test suites, currently unified logging
//! initialization for unit and integration tests.

pub mod test_logging;
