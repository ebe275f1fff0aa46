//! Test-only match builders for domain unit tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::reducer::{apply, MatchAction};
use crate::domain::state::{CheckoutMode, GameMode, Match, MatchPhase, Player, Settings, Team};
use crate::domain::validate::{PendingScore, Prompt};

/// Arguments for [`make_match`]; defaults give a two-team singles 501,
/// first to 3 legs, team 0 starting.
#[derive(Debug, Clone)]
pub struct MakeMatchArgs {
    pub teams: usize,
    pub players_per_team: usize,
    pub starting_score: u16,
    pub game_mode: GameMode,
    pub checkout_mode: CheckoutMode,
    pub number_of_legs: u16,
    pub starting_team: usize,
    pub ask_number_of_throws: bool,
}

impl Default for MakeMatchArgs {
    fn default() -> Self {
        Self {
            teams: 2,
            players_per_team: 1,
            starting_score: 501,
            game_mode: GameMode::FirstTo,
            checkout_mode: CheckoutMode::Double,
            number_of_legs: 3,
            starting_team: 0,
            ask_number_of_throws: false,
        }
    }
}

/// Running match with players "p0", "p1", ... spread across teams in order.
pub fn make_match(args: MakeMatchArgs) -> Match {
    let mut player_id = 0;
    let teams = (0..args.teams)
        .map(|team_id| {
            let players = (0..args.players_per_team)
                .map(|_| {
                    let p = Player::new(player_id, format!("p{player_id}"));
                    player_id += 1;
                    p
                })
                .collect();
            Team::new(team_id, players)
        })
        .collect();

    Match {
        teams,
        scores: Vec::new(),
        settings: Settings {
            game_mode: args.game_mode,
            checkout_mode: args.checkout_mode,
            starting_score: args.starting_score,
            number_of_legs: args.number_of_legs,
            starting_team: args.starting_team,
            random_starting_team: false,
            display_score: true,
            ask_number_of_throws: args.ask_number_of_throws,
        },
        curr_leg_idx: 0,
        curr_team_idx: args.starting_team,
        phase: MatchPhase::Running,
        winner: None,
    }
}

/// Seeded RNG for reducer calls; only the random starting draw reads it.
pub fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0xDA127)
}

/// Ready-to-record entry for the current thrower, full three throws.
pub fn entry(m: &Match, score: u16) -> PendingScore {
    entry_with(m, score, 0, 3)
}

/// Ready-to-record entry with explicit checkout bookkeeping.
pub fn entry_with(m: &Match, score: u16, checkout_attempts: u8, throws: u8) -> PendingScore {
    let team = m.current_team().expect("running match has a current team");
    let remaining_before = m.remaining_score(team.id);
    PendingScore {
        score,
        remaining_before,
        remaining_after: remaining_before - score,
        checkout_attempts,
        throws,
        prompt: Prompt::None,
    }
}

/// Record one visit for the current thrower.
pub fn record(m: &Match, score: u16) -> Match {
    apply(m, MatchAction::RecordScore(entry(m, score)), &mut test_rng())
}

/// Record a sequence of visits in order.
pub fn record_all(m: &Match, scores: &[u16]) -> Match {
    scores.iter().fold(m.clone(), |m, &s| record(&m, s))
}
