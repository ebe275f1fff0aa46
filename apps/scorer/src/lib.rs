#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod store;

// Re-exports for public API
pub use config::Config;
pub use domain::errors::{DomainError, RosterError};
pub use domain::reducer::MatchAction;
pub use domain::state::{
    CheckoutMode, GameMode, Match, MatchPhase, Player, Score, Settings, Team,
};
pub use domain::validate::{PendingScore, Prompt};
pub use error::AppError;
pub use services::match_flow::{MatchFlow, TurnOutcome};
pub use store::{MatchStore, PlayerStore, StoreError};

// Prelude for test convenience
pub mod prelude {
    pub use super::config::*;
    pub use super::domain::checkout::*;
    pub use super::domain::state::*;
    pub use super::domain::stats::*;
    pub use super::error::*;
    pub use super::services::match_flow::*;
    pub use super::store::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorer_test_support::test_logging::init();
}
