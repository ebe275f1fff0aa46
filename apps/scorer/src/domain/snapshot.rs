//! Serde model for match persistence.
//!
//! Snapshot types mirror the domain types field by field; the domain stays
//! serde-free. `restore` re-validates structure so a hand-edited or corrupt
//! file can never smuggle an impossible state past the reducer.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::errors::DomainError;
use crate::domain::rules;
use crate::domain::state::{
    CheckoutMode, GameMode, Match, MatchPhase, Player, Score, Settings, Team,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: i32,
    pub name: String,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
        }
    }
}

impl PlayerSnapshot {
    pub fn into_player(self) -> Player {
        Player {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub id: usize,
    pub players: Vec<PlayerSnapshot>,
    pub curr_player_idx: usize,
    pub wins: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameModeSnapshot {
    FirstTo,
    BestOf,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CheckoutModeSnapshot {
    Simple,
    Double,
    Triple,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PhaseSnapshot {
    Initialized,
    Running,
    Over,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    pub game_mode: GameModeSnapshot,
    pub checkout_mode: CheckoutModeSnapshot,
    pub starting_score: u16,
    pub number_of_legs: u16,
    pub starting_team: usize,
    pub random_starting_team: bool,
    pub display_score: bool,
    pub ask_number_of_throws: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub id: usize,
    pub player: PlayerSnapshot,
    pub team_id: usize,
    pub leg: usize,
    pub score: u16,
    pub remaining: u16,
    pub checkout_attempts: u8,
    pub throws: u8,
}

/// Top-level persisted document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub teams: Vec<TeamSnapshot>,
    pub scores: Vec<ScoreSnapshot>,
    pub settings: SettingsSnapshot,
    pub curr_leg_idx: usize,
    pub curr_team_idx: usize,
    pub phase: PhaseSnapshot,
    pub winner: Option<usize>,
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
}

/// Entry point: capture the current match for persistence.
pub fn snapshot(m: &Match) -> MatchSnapshot {
    MatchSnapshot {
        teams: m
            .teams
            .iter()
            .map(|t| TeamSnapshot {
                id: t.id,
                players: t.players.iter().map(PlayerSnapshot::from).collect(),
                curr_player_idx: t.curr_player_idx,
                wins: t.wins,
            })
            .collect(),
        scores: m
            .scores
            .iter()
            .map(|s| ScoreSnapshot {
                id: s.id,
                player: PlayerSnapshot::from(&s.player),
                team_id: s.team_id,
                leg: s.leg,
                score: s.score,
                remaining: s.remaining,
                checkout_attempts: s.checkout_attempts,
                throws: s.throws,
            })
            .collect(),
        settings: SettingsSnapshot {
            game_mode: match m.settings.game_mode {
                GameMode::FirstTo => GameModeSnapshot::FirstTo,
                GameMode::BestOf => GameModeSnapshot::BestOf,
            },
            checkout_mode: match m.settings.checkout_mode {
                CheckoutMode::Simple => CheckoutModeSnapshot::Simple,
                CheckoutMode::Double => CheckoutModeSnapshot::Double,
                CheckoutMode::Triple => CheckoutModeSnapshot::Triple,
            },
            starting_score: m.settings.starting_score,
            number_of_legs: m.settings.number_of_legs,
            starting_team: m.settings.starting_team,
            random_starting_team: m.settings.random_starting_team,
            display_score: m.settings.display_score,
            ask_number_of_throws: m.settings.ask_number_of_throws,
        },
        curr_leg_idx: m.curr_leg_idx,
        curr_team_idx: m.curr_team_idx,
        phase: match m.phase {
            MatchPhase::Initialized => PhaseSnapshot::Initialized,
            MatchPhase::Running => PhaseSnapshot::Running,
            MatchPhase::Over => PhaseSnapshot::Over,
        },
        winner: m.winner,
        saved_at: OffsetDateTime::now_utc(),
    }
}

/// Rebuild a match from a snapshot, validating structure on the way in.
pub fn restore(snap: MatchSnapshot) -> Result<Match, DomainError> {
    let m = Match {
        teams: snap
            .teams
            .into_iter()
            .map(|t| Team {
                id: t.id,
                players: t.players.into_iter().map(PlayerSnapshot::into_player).collect(),
                curr_player_idx: t.curr_player_idx,
                wins: t.wins,
            })
            .collect(),
        scores: snap
            .scores
            .into_iter()
            .map(|s| Score {
                id: s.id,
                player: s.player.into_player(),
                team_id: s.team_id,
                leg: s.leg,
                score: s.score,
                remaining: s.remaining,
                checkout_attempts: s.checkout_attempts,
                throws: s.throws,
            })
            .collect(),
        settings: Settings {
            game_mode: match snap.settings.game_mode {
                GameModeSnapshot::FirstTo => GameMode::FirstTo,
                GameModeSnapshot::BestOf => GameMode::BestOf,
            },
            checkout_mode: match snap.settings.checkout_mode {
                CheckoutModeSnapshot::Simple => CheckoutMode::Simple,
                CheckoutModeSnapshot::Double => CheckoutMode::Double,
                CheckoutModeSnapshot::Triple => CheckoutMode::Triple,
            },
            starting_score: snap.settings.starting_score,
            number_of_legs: snap.settings.number_of_legs,
            starting_team: snap.settings.starting_team,
            random_starting_team: snap.settings.random_starting_team,
            display_score: snap.settings.display_score,
            ask_number_of_throws: snap.settings.ask_number_of_throws,
        },
        curr_leg_idx: snap.curr_leg_idx,
        curr_team_idx: snap.curr_team_idx,
        phase: match snap.phase {
            PhaseSnapshot::Initialized => MatchPhase::Initialized,
            PhaseSnapshot::Running => MatchPhase::Running,
            PhaseSnapshot::Over => MatchPhase::Over,
        },
        winner: snap.winner,
    };
    validate_structure(&m)?;
    Ok(m)
}

/// Structural invariants every stored match must satisfy.
fn validate_structure(m: &Match) -> Result<(), DomainError> {
    fn corrupt(detail: impl Into<String>) -> DomainError {
        DomainError::corrupt_snapshot(detail)
    }

    match (m.phase, m.winner) {
        (MatchPhase::Over, None) => {
            return Err(corrupt("phase is Over but no winner is recorded"))
        }
        (MatchPhase::Over, Some(w)) if w >= m.teams.len() => {
            return Err(corrupt(format!("winner index {w} out of range")))
        }
        (MatchPhase::Initialized | MatchPhase::Running, Some(_)) => {
            return Err(corrupt("winner recorded before the match is over"))
        }
        _ => {}
    }

    if m.phase == MatchPhase::Initialized {
        if !m.scores.is_empty() {
            return Err(corrupt("initialized match carries score entries"));
        }
        return Ok(());
    }

    if m.teams.is_empty() {
        return Err(corrupt("running match has no teams"));
    }
    if m.curr_team_idx >= m.teams.len() {
        return Err(corrupt(format!(
            "current team index {} out of range",
            m.curr_team_idx
        )));
    }
    if m.settings.starting_team >= m.teams.len() {
        return Err(corrupt(format!(
            "starting team {} out of range",
            m.settings.starting_team
        )));
    }
    if m.settings.starting_score == 0 || m.settings.number_of_legs == 0 {
        return Err(corrupt("starting score and legs must be positive"));
    }
    for team in &m.teams {
        if team.players.is_empty() {
            return Err(corrupt(format!("team {} has no players", team.id)));
        }
        if team.curr_player_idx >= team.players.len() {
            return Err(corrupt(format!(
                "team {} player index {} out of range",
                team.id, team.curr_player_idx
            )));
        }
    }

    for (idx, s) in m.scores.iter().enumerate() {
        if s.id != idx {
            return Err(corrupt(format!("score id {} at position {idx}", s.id)));
        }
        if s.score > rules::MAX_TURN_SCORE || s.score == rules::FORBIDDEN_SCORE {
            return Err(corrupt(format!("impossible visit score {}", s.score)));
        }
        if s.checkout_attempts > rules::DARTS_PER_TURN || s.throws > rules::DARTS_PER_TURN {
            return Err(corrupt("dart counts above three"));
        }
        if s.leg > m.curr_leg_idx {
            return Err(corrupt(format!("score entry in future leg {}", s.leg)));
        }
        if !m.teams.iter().any(|t| t.id == s.team_id) {
            return Err(corrupt(format!("score entry for unknown team {}", s.team_id)));
        }
    }

    // Replay each team's legs: remainders must count down consistently and
    // nothing may follow a finished leg.
    for team in &m.teams {
        let mut zero_remainders = 0u16;
        for leg in 0..=m.curr_leg_idx {
            let mut remaining = m.settings.starting_score;
            let mut finished = false;
            for s in m.team_leg_scores(team.id, leg) {
                if finished {
                    return Err(corrupt(format!(
                        "team {} keeps scoring after finishing leg {leg}",
                        team.id
                    )));
                }
                if s.score > remaining {
                    return Err(corrupt(format!(
                        "team {} overshoots in leg {leg}",
                        team.id
                    )));
                }
                remaining -= s.score;
                if s.remaining != remaining {
                    return Err(corrupt(format!(
                        "team {} remainder mismatch in leg {leg}",
                        team.id
                    )));
                }
                if remaining == 0 {
                    finished = true;
                    zero_remainders += 1;
                }
            }
        }
        if team.wins != zero_remainders {
            return Err(corrupt(format!(
                "team {} wins {} but {} finished legs",
                team.id, team.wins, zero_remainders
            )));
        }
    }

    if let (MatchPhase::Over, Some(w)) = (m.phase, m.winner) {
        if m.teams[w].wins < m.wins_needed() {
            return Err(corrupt("match marked over below the win threshold"));
        }
    }

    Ok(())
}
