//! Turn entry validation.
//!
//! Failures are reported in a fixed order: format, range, forbidden score,
//! overscore. The range check runs on the effective score, so a remaining
//! target above the current remainder surfaces as out-of-range.

use crate::domain::errors::DomainError;
use crate::domain::input::ScoreInput;
use crate::domain::rules;
use crate::domain::state::{require_current_team, require_running, Match};

/// What the host must still ask before the entry can be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Nothing outstanding; the entry is ready.
    None,
    /// Visit started inside the checkout window: how many darts went at a
    /// finish (0..=3)?
    CheckoutDarts,
    /// Leg-ending visit with `ask_number_of_throws` set: how many darts did
    /// the final visit use (1..=3)?
    FinalThrows,
}

/// A validated visit awaiting confirmation.
///
/// `remaining_before` ties the entry to the state it was validated against;
/// the reducer refuses entries that no longer match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingScore {
    pub score: u16,
    pub remaining_before: u16,
    pub remaining_after: u16,
    pub checkout_attempts: u8,
    pub throws: u8,
    pub prompt: Prompt,
}

/// Validate the current thrower's entry text against the live match.
pub fn validate_entry(m: &Match, text: &str) -> Result<PendingScore, DomainError> {
    require_running(m, "validate_entry")?;
    let team = require_current_team(m, "validate_entry")?;
    let remaining_before = m.remaining_score(team.id);
    let input: ScoreInput = text.parse()?;
    validate_turn(input, remaining_before, m.settings.ask_number_of_throws)
}

/// Core validation against a pre-throw remainder.
pub fn validate_turn(
    input: ScoreInput,
    remaining_before: u16,
    ask_number_of_throws: bool,
) -> Result<PendingScore, DomainError> {
    let effective = match input {
        ScoreInput::Literal(v) => i32::from(v),
        ScoreInput::RemainingTarget(t) => i32::from(remaining_before) - i32::from(t),
    };

    if effective < 0 || effective > i32::from(rules::MAX_TURN_SCORE) {
        return Err(DomainError::OutOfRange(effective));
    }
    let score = effective as u16;
    if score == rules::FORBIDDEN_SCORE {
        return Err(DomainError::ForbiddenScore);
    }
    if score > remaining_before {
        return Err(DomainError::overscore(score, remaining_before));
    }

    let remaining_after = remaining_before - score;
    let prompt = if rules::in_checkout_window(remaining_before) {
        Prompt::CheckoutDarts
    } else if remaining_after == 0 && ask_number_of_throws {
        Prompt::FinalThrows
    } else {
        Prompt::None
    };

    Ok(PendingScore {
        score,
        remaining_before,
        remaining_after,
        checkout_attempts: 0,
        throws: rules::DARTS_PER_TURN,
        prompt,
    })
}

/// Fold a checkout-darts answer into the entry: `dart_count` darts went at
/// a finish, leaving `3 - dart_count` plain throws.
pub fn apply_checkout_darts(
    entry: &PendingScore,
    dart_count: u8,
) -> Result<PendingScore, DomainError> {
    if entry.prompt != Prompt::CheckoutDarts {
        return Err(DomainError::invariant(
            "no checkout-darts prompt outstanding",
        ));
    }
    if dart_count > rules::DARTS_PER_TURN {
        return Err(DomainError::InvalidDartCount(dart_count));
    }
    Ok(PendingScore {
        checkout_attempts: dart_count,
        throws: rules::DARTS_PER_TURN - dart_count,
        prompt: Prompt::None,
        ..entry.clone()
    })
}

/// Fold a final-visit throws answer into the entry.
pub fn apply_final_throws(entry: &PendingScore, throws: u8) -> Result<PendingScore, DomainError> {
    if entry.prompt != Prompt::FinalThrows {
        return Err(DomainError::invariant("no final-throws prompt outstanding"));
    }
    if throws == 0 || throws > rules::DARTS_PER_TURN {
        return Err(DomainError::InvalidDartCount(throws));
    }
    Ok(PendingScore {
        throws,
        prompt: Prompt::None,
        ..entry.clone()
    })
}

/// Decline an outstanding prompt; the defaults stand (no checkout attempts,
/// a full three throws).
pub fn decline_prompt(entry: &PendingScore) -> PendingScore {
    PendingScore {
        prompt: Prompt::None,
        ..entry.clone()
    }
}
