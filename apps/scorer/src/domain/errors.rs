use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Domain-level error type for turn entry and state validation.
///
/// The first four variants are the turn-entry failures, listed in the order
/// the validator reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Entry text does not match the input grammar.
    InvalidInputFormat(String),
    /// Effective score falls outside 0..=180.
    OutOfRange(i32),
    /// 179 cannot be scored with three darts.
    ForbiddenScore,
    /// Score would take the team's remaining below zero.
    Overscore { score: u16, remaining: u16 },
    /// Prompt answer outside the allowed dart count.
    InvalidDartCount(u8),
    /// Saved match data failed structural validation.
    CorruptSnapshot(String),
    /// Internal invariant breached.
    InvariantViolation(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidInputFormat(s) => write!(f, "not a valid score entry: {s:?}"),
            DomainError::OutOfRange(v) => write!(f, "score {v} is outside 0..=180"),
            DomainError::ForbiddenScore => write!(f, "179 cannot be scored with three darts"),
            DomainError::Overscore { score, remaining } => {
                write!(f, "score {score} exceeds the remaining {remaining}")
            }
            DomainError::InvalidDartCount(n) => write!(f, "dart count {n} is outside 0..=3"),
            DomainError::CorruptSnapshot(s) => write!(f, "corrupt snapshot: {s}"),
            DomainError::InvariantViolation(s) => write!(f, "invariant violated: {s}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_input(text: impl Into<String>) -> Self {
        Self::InvalidInputFormat(text.into())
    }

    pub fn overscore(score: u16, remaining: u16) -> Self {
        Self::Overscore { score, remaining }
    }

    pub fn corrupt_snapshot(detail: impl Into<String>) -> Self {
        Self::CorruptSnapshot(detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::InvariantViolation(detail.into())
    }
}

/// Errors from player roster edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Player name is empty after trimming.
    EmptyName,
    /// A player with this name already exists.
    DuplicateName(String),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RosterError::EmptyName => write!(f, "player name must not be empty"),
            RosterError::DuplicateName(name) => {
                write!(f, "a player named {name:?} already exists")
            }
        }
    }
}

impl Error for RosterError {}
