use crate::domain::state::GameMode;

/// Darts thrown in a regulation visit.
pub const DARTS_PER_TURN: u8 = 3;

/// Highest score a three-dart visit can reach (triple 20 three times).
pub const MAX_TURN_SCORE: u16 = 180;

/// 179 is unreachable with three darts; 177 (T20 T20 T19) is the next
/// score below 180.
pub const FORBIDDEN_SCORE: u16 = 179;

/// Remainders below this bound can be finished within a single visit.
pub const CHECKOUT_BOUND: u16 = 170;

// Below 170 but no three-dart combination reaches them.
pub const UNREACHABLE_CHECKOUTS: [u16; 7] = [169, 168, 166, 165, 163, 162, 159];

/// Whether a pre-throw remainder counts as a checkout opportunity.
pub fn in_checkout_window(remaining: u16) -> bool {
    remaining < CHECKOUT_BOUND && !UNREACHABLE_CHECKOUTS.contains(&remaining)
}

/// Leg wins required to take the match.
///
/// FirstTo n ends at n wins; BestOf n ends at the majority of n.
pub fn wins_needed(mode: GameMode, number_of_legs: u16) -> u16 {
    match mode {
        GameMode::FirstTo => number_of_legs,
        GameMode::BestOf => number_of_legs / 2 + number_of_legs % 2,
    }
}

/// Legs the scoreboard counts up to ("leg x of y").
///
/// FirstTo n: every team may win n-1 legs before someone takes the nth.
/// BestOf n: n legs are scheduled outright.
pub fn max_legs(mode: GameMode, number_of_legs: u16, team_count: usize) -> usize {
    match mode {
        GameMode::FirstTo => (number_of_legs as usize - 1) * team_count + 1,
        GameMode::BestOf => number_of_legs as usize,
    }
}

/// Whether one more leg win for a team on `wins` ends the match.
pub fn is_winning_throw(wins: u16, mode: GameMode, number_of_legs: u16) -> bool {
    wins + 1 >= wins_needed(mode, number_of_legs)
}
