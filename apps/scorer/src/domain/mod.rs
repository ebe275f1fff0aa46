//! Domain layer: pure match state, validation, statistics, and suggestions.

pub mod checkout;
pub mod errors;
pub mod input;
pub mod reducer;
pub mod roster;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod teams;
pub mod validate;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_checkout;
#[cfg(test)]
mod tests_reducer;
#[cfg(test)]
mod tests_roster;

// Re-exports for ergonomics
pub use checkout::{suggest_checkouts, Combination, Dart, Multiplier};
pub use errors::{DomainError, RosterError};
pub use input::ScoreInput;
pub use reducer::{apply, MatchAction};
pub use snapshot::{restore, snapshot, MatchSnapshot};
pub use state::{
    CheckoutMode, GameMode, LegResult, Match, MatchPhase, Player, PlayerId, Score, Settings, Team,
    TeamId,
};
pub use validate::{validate_entry, PendingScore, Prompt};
