//! Turn entry grammar.
//!
//! An entry is either a literal points value (`"26"`) or a remaining target
//! (`"r40"` / `"R40"`): score whatever brings the thrower's remainder down
//! to the target. Digits only, no leading zeros, at most three digits.

use std::str::FromStr;

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreInput {
    /// Points scored this visit.
    Literal(u16),
    /// Desired remainder after this visit.
    RemainingTarget(u16),
}

impl FromStr for ScoreInput {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (is_target, digits) = match s.strip_prefix(['R', 'r']) {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let valid = match digits.as_bytes() {
            [] => false,
            [b'0'] => true,
            [b'0', ..] => false,
            bytes => bytes.len() <= 3 && bytes.iter().all(u8::is_ascii_digit),
        };
        if !valid {
            return Err(DomainError::invalid_input(s));
        }

        // At most three digits, so this always fits u16.
        let value: u16 = digits
            .parse()
            .map_err(|_| DomainError::invalid_input(s))?;

        Ok(if is_target {
            ScoreInput::RemainingTarget(value)
        } else {
            ScoreInput::Literal(value)
        })
    }
}
