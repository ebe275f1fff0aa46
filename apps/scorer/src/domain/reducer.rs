//! Match state machine.
//!
//! `apply` is a pure transition: it never mutates the input and returns the
//! next state. Structurally invalid actions return the input unchanged;
//! hosts validate up front and treat a silent no-op as a bug to log.

use rand::Rng;

use crate::domain::rules;
use crate::domain::state::{
    leg_opener, next_index, prev_index, Match, MatchPhase, Score, Settings, Team,
};
use crate::domain::validate::{PendingScore, Prompt};

/// Every way a match value can change.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchAction {
    /// Reset counters and start leg 0 with the given lineup.
    CreateMatch {
        settings: Settings,
        teams: Vec<Team>,
    },
    /// Record a validated visit for the current thrower.
    RecordScore(PendingScore),
    /// Remove the latest visit and roll its effects back.
    UndoLastScore,
    /// Manual correction of whose turn it is.
    SetActiveTeam { team_idx: usize },
    /// Manual correction of who throws next within a team.
    SetActivePlayer { team_idx: usize, player_idx: usize },
}

/// Apply one action. The RNG only feeds the random starting-team draw.
pub fn apply<R: Rng + ?Sized>(m: &Match, action: MatchAction, rng: &mut R) -> Match {
    match action {
        MatchAction::CreateMatch { settings, teams } => create_match(m, settings, teams, rng),
        MatchAction::RecordScore(entry) => record_score(m, &entry),
        MatchAction::UndoLastScore => undo_last_score(m),
        MatchAction::SetActiveTeam { team_idx } => set_active_team(m, team_idx),
        MatchAction::SetActivePlayer {
            team_idx,
            player_idx,
        } => set_active_player(m, team_idx, player_idx),
    }
}

/// Whether a lineup and settings pair can start a match.
pub fn config_valid(settings: &Settings, teams: &[Team]) -> bool {
    !teams.is_empty()
        && teams.iter().all(|t| !t.players.is_empty())
        && settings.starting_team < teams.len()
        && settings.number_of_legs > 0
        && settings.starting_score > 0
}

fn create_match<R: Rng + ?Sized>(
    prev: &Match,
    mut settings: Settings,
    teams: Vec<Team>,
    rng: &mut R,
) -> Match {
    if !config_valid(&settings, &teams) {
        return prev.clone();
    }

    if settings.random_starting_team {
        // The draw is written back so leg-opener rotation and the actual
        // first thrower agree.
        settings.starting_team = rng.random_range(0..teams.len());
    }

    let teams = teams
        .into_iter()
        .map(|t| Team {
            curr_player_idx: 0,
            wins: 0,
            ..t
        })
        .collect();

    Match {
        teams,
        scores: Vec::new(),
        curr_leg_idx: 0,
        curr_team_idx: settings.starting_team,
        phase: MatchPhase::Running,
        winner: None,
        settings,
    }
}

fn record_score(prev: &Match, entry: &PendingScore) -> Match {
    if prev.phase != MatchPhase::Running || entry.prompt != Prompt::None {
        return prev.clone();
    }
    let team_idx = prev.curr_team_idx;
    let Some(team) = prev.teams.get(team_idx) else {
        return prev.clone();
    };
    let Some(player) = team.current_player() else {
        return prev.clone();
    };
    // A stale entry validated against some other state must not land.
    if entry.remaining_before != prev.remaining_score(team.id)
        || entry.score > entry.remaining_before
    {
        return prev.clone();
    }

    let remaining = entry.remaining_before - entry.score;
    let leg_win = remaining == 0;
    let match_win = leg_win
        && rules::is_winning_throw(
            team.wins,
            prev.settings.game_mode,
            prev.settings.number_of_legs,
        );

    let mut next = prev.clone();
    next.scores.push(Score {
        id: prev.scores.len(),
        player: player.clone(),
        team_id: team.id,
        leg: prev.curr_leg_idx,
        score: entry.score,
        remaining,
        checkout_attempts: entry.checkout_attempts,
        throws: entry.throws,
    });

    {
        let thrower = &mut next.teams[team_idx];
        if leg_win {
            thrower.wins += 1;
        }
        // The thrower's rotation advances even on the winning visit, so
        // undo can step it back uniformly.
        thrower.curr_player_idx = next_index(thrower.curr_player_idx, thrower.players.len());
    }

    if match_win {
        next.phase = MatchPhase::Over;
        next.winner = Some(winner_team_idx(&next.teams));
    } else if leg_win {
        next.curr_leg_idx = prev.curr_leg_idx + 1;
        next.curr_team_idx = leg_opener(
            next.settings.starting_team,
            next.curr_leg_idx,
            next.teams.len(),
        );
    } else {
        next.curr_team_idx = next_index(prev.curr_team_idx, prev.teams.len());
    }

    next
}

/// Index of the team with the most wins; earliest wins ties.
fn winner_team_idx(teams: &[Team]) -> usize {
    let mut winner = 0;
    for (idx, team) in teams.iter().enumerate() {
        if team.wins > teams[winner].wins {
            winner = idx;
        }
    }
    winner
}

fn undo_last_score(prev: &Match) -> Match {
    if prev.scores.is_empty() {
        return prev.clone();
    }

    let mut next = prev.clone();
    let Some(last) = next.scores.pop() else {
        return prev.clone();
    };
    let Some(team_idx) = next.teams.iter().position(|t| t.id == last.team_id) else {
        return prev.clone();
    };

    {
        let thrower = &mut next.teams[team_idx];
        thrower.curr_player_idx = prev_index(thrower.curr_player_idx, thrower.players.len());
        if last.remaining == 0 {
            thrower.wins = thrower.wins.saturating_sub(1);
        }
    }

    if last.remaining == 0 {
        if prev.phase == MatchPhase::Over {
            // The winning visit never advanced the leg, so reopening keeps
            // the leg index.
            next.phase = MatchPhase::Running;
            next.winner = None;
        } else {
            next.curr_leg_idx = prev.curr_leg_idx.saturating_sub(1);
        }
    }

    // Turn returns to the team that threw the removed visit.
    next.curr_team_idx = team_idx;
    next
}

fn set_active_team(prev: &Match, team_idx: usize) -> Match {
    if prev.phase == MatchPhase::Over || team_idx >= prev.teams.len() {
        return prev.clone();
    }
    let mut next = prev.clone();
    next.curr_team_idx = team_idx;
    next
}

fn set_active_player(prev: &Match, team_idx: usize, player_idx: usize) -> Match {
    if prev.phase == MatchPhase::Over {
        return prev.clone();
    }
    let Some(team) = prev.teams.get(team_idx) else {
        return prev.clone();
    };
    if player_idx >= team.players.len() {
        return prev.clone();
    }
    let mut next = prev.clone();
    next.teams[team_idx].curr_player_idx = player_idx;
    next
}
