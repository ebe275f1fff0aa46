//! Checkout suggestions.
//!
//! Combinations are enumerated over a fixed 62-dart catalogue, shortest
//! first, catalogue order within each length. The last dart of every
//! suggestion carries the multiplier the checkout mode demands.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::rules;
use crate::domain::state::CheckoutMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplier {
    Single,
    Double,
    Triple,
}

impl Multiplier {
    pub fn factor(self) -> u16 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
            Multiplier::Triple => 3,
        }
    }

    fn letter(self) -> char {
        match self {
            Multiplier::Single => 'S',
            Multiplier::Double => 'D',
            Multiplier::Triple => 'T',
        }
    }
}

/// One board segment: multiplier plus face value (bull is 25).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dart {
    pub multiplier: Multiplier,
    pub value: u16,
}

impl Dart {
    pub const fn new(multiplier: Multiplier, value: u16) -> Self {
        Self { multiplier, value }
    }

    pub fn points(self) -> u16 {
        self.multiplier.factor() * self.value
    }
}

impl Display for Dart {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.multiplier.letter(), self.value)
    }
}

/// Number of catalogue darts: bull double, single bull, then triple,
/// double, single for each of the twenty segments.
pub const CATALOGUE_SIZE: usize = 62;

/// The suggestion catalogue in preference order: D25, S25, then
/// T20 D20 S20 down to T1 D1 S1.
pub fn catalogue() -> [Dart; CATALOGUE_SIZE] {
    let mut darts = [Dart::new(Multiplier::Single, 0); CATALOGUE_SIZE];
    darts[0] = Dart::new(Multiplier::Double, 25);
    darts[1] = Dart::new(Multiplier::Single, 25);
    let mut i = 2;
    for value in (1..=20).rev() {
        darts[i] = Dart::new(Multiplier::Triple, value);
        darts[i + 1] = Dart::new(Multiplier::Double, value);
        darts[i + 2] = Dart::new(Multiplier::Single, value);
        i += 3;
    }
    darts
}

/// A suggested finish. The finisher is mandatory; setup darts are thrown
/// before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination {
    pub first: Option<Dart>,
    pub second: Option<Dart>,
    pub finisher: Dart,
}

impl Combination {
    fn single(finisher: Dart) -> Self {
        Self {
            first: None,
            second: None,
            finisher,
        }
    }

    fn double(first: Dart, finisher: Dart) -> Self {
        Self {
            first: Some(first),
            second: None,
            finisher,
        }
    }

    fn triple(first: Dart, second: Dart, finisher: Dart) -> Self {
        Self {
            first: Some(first),
            second: Some(second),
            finisher,
        }
    }

    /// Darts in throw order, finisher last.
    pub fn darts(&self) -> impl Iterator<Item = Dart> + '_ {
        self.first
            .into_iter()
            .chain(self.second)
            .chain(Some(self.finisher))
    }

    pub fn dart_count(&self) -> usize {
        1 + usize::from(self.first.is_some()) + usize::from(self.second.is_some())
    }

    pub fn total(&self) -> u16 {
        self.darts().map(Dart::points).sum()
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut sep = "";
        for dart in self.darts() {
            write!(f, "{sep}{dart}")?;
            sep = " ";
        }
        Ok(())
    }
}

/// The multiplier a checkout mode demands of the final dart.
pub fn finish_multiplier(mode: CheckoutMode) -> Multiplier {
    match mode {
        CheckoutMode::Simple => Multiplier::Single,
        CheckoutMode::Double => Multiplier::Double,
        CheckoutMode::Triple => Multiplier::Triple,
    }
}

/// Suggest up to `limit` ways to finish `remaining`.
///
/// Remainders outside the checkout window get nothing.
pub fn suggest_checkouts(remaining: u16, mode: CheckoutMode, limit: usize) -> Vec<Combination> {
    if limit == 0 || remaining == 0 || !rules::in_checkout_window(remaining) {
        return Vec::new();
    }

    let finish = finish_multiplier(mode);
    let darts = catalogue();
    let mut out = Vec::new();

    for last in darts {
        if last.multiplier == finish && last.points() == remaining {
            out.push(Combination::single(last));
            if out.len() == limit {
                return out;
            }
        }
    }

    for first in darts {
        if first.points() >= remaining {
            continue;
        }
        for last in darts {
            if last.multiplier == finish && first.points() + last.points() == remaining {
                out.push(Combination::double(first, last));
                if out.len() == limit {
                    return out;
                }
            }
        }
    }

    for first in darts {
        if first.points() >= remaining {
            continue;
        }
        for second in darts {
            if first.points() + second.points() >= remaining {
                continue;
            }
            for last in darts {
                if last.multiplier == finish
                    && first.points() + second.points() + last.points() == remaining
                {
                    out.push(Combination::triple(first, second, last));
                    if out.len() == limit {
                        return out;
                    }
                }
            }
        }
    }

    out
}
