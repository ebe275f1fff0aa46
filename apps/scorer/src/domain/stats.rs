//! Match statistics.
//!
//! Everything here is a pure read over the score log and is total: empty
//! selections yield zero, "best" queries yield `None`, and no path divides
//! by zero.

use crate::domain::state::{Match, Player, Score, TeamId};

/// Three-dart average over a selection: points per dart times three.
fn average<'a>(scores: impl Iterator<Item = &'a Score>) -> f64 {
    let (points, throws) = scores.fold((0u32, 0u32), |(p, t), s| {
        (p + u32::from(s.score), t + u32::from(s.throws))
    });
    if throws == 0 {
        return 0.0;
    }
    f64::from(points) / f64::from(throws) * 3.0
}

/// A team's three-dart average within one leg.
pub fn leg_average(m: &Match, team_id: TeamId, leg: usize) -> f64 {
    average(m.team_leg_scores(team_id, leg))
}

/// A team's three-dart average across the whole match.
pub fn game_average(m: &Match, team_id: TeamId) -> f64 {
    average(m.team_scores(team_id))
}

/// Per-leg averages for legs played so far (0..=curr_leg_idx).
pub fn all_leg_averages(m: &Match, team_id: TeamId) -> Vec<f64> {
    (0..=m.curr_leg_idx)
        .map(|leg| leg_average(m, team_id, leg))
        .collect()
}

/// Highest per-leg average; 0.0 when the team has not thrown at all.
pub fn best_leg_average(m: &Match, team_id: TeamId) -> f64 {
    all_leg_averages(m, team_id)
        .into_iter()
        .fold(0.0, f64::max)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckoutStats {
    /// Darts thrown at a finish.
    pub attempts: u32,
    /// Legs actually finished.
    pub hits: u32,
    /// Hit percentage; 0.0 when nothing was attempted.
    pub rate: f64,
}

pub fn checkout_stats(m: &Match, team_id: TeamId) -> CheckoutStats {
    let (attempts, hits) = m.team_scores(team_id).fold((0u32, 0u32), |(a, h), s| {
        (
            a + u32::from(s.checkout_attempts),
            h + u32::from(s.remaining == 0),
        )
    });
    let rate = if attempts == 0 {
        0.0
    } else {
        f64::from(hits) / f64::from(attempts) * 100.0
    };
    CheckoutStats {
        attempts,
        hits,
        rate,
    }
}

/// Highest leg-finishing score; `None` when the team has no checkout.
pub fn best_checkout(m: &Match, team_id: TeamId) -> Option<u16> {
    m.team_scores(team_id)
        .filter(|s| s.remaining == 0)
        .map(|s| s.score)
        .max()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MilestoneCounts {
    /// Visits scoring 60..=119.
    pub sixties: u32,
    /// Visits scoring 120..=179 (179 itself cannot be recorded).
    pub one_twenties: u32,
    /// Maximum visits.
    pub one_eighties: u32,
}

/// Count milestone visits for a team. The bands are half-open, so a 180
/// counts only as a one-eighty.
pub fn milestones(m: &Match, team_id: TeamId) -> MilestoneCounts {
    m.team_scores(team_id)
        .fold(MilestoneCounts::default(), |mut acc, s| {
            match s.score {
                60..=119 => acc.sixties += 1,
                120..=179 => acc.one_twenties += 1,
                180 => acc.one_eighties += 1,
                _ => {}
            }
            acc
        })
}

/// A team's highest single visit; `None` before its first throw.
pub fn greatest_score(m: &Match, team_id: TeamId) -> Option<u16> {
    m.team_scores(team_id).map(|s| s.score).max()
}

/// The visit behind a "highest score" card: who threw it and for whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopScore {
    pub player: Player,
    pub team_id: TeamId,
    pub score: u16,
}

fn top_score<'a>(scores: impl Iterator<Item = &'a Score>) -> Option<TopScore> {
    let mut best: Option<&Score> = None;
    for s in scores {
        // Strict comparison keeps the earliest of equal visits.
        if best.map_or(true, |b| s.score > b.score) {
            best = Some(s);
        }
    }
    best.map(|s| TopScore {
        player: s.player.clone(),
        team_id: s.team_id,
        score: s.score,
    })
}

/// Highest visit of the match; earliest wins ties.
pub fn greatest_scored_player(m: &Match) -> Option<TopScore> {
    top_score(m.scores.iter())
}

/// Highest visit within one leg; earliest wins ties.
pub fn greatest_scored_player_in_leg(m: &Match, leg: usize) -> Option<TopScore> {
    top_score(m.leg_scores(leg))
}

/// Team with the strictly highest checkout; earliest team wins ties,
/// `None` when no team has finished a leg.
pub fn best_checkout_team(m: &Match) -> Option<(TeamId, u16)> {
    let mut best: Option<(TeamId, u16)> = None;
    for team in &m.teams {
        if let Some(checkout) = best_checkout(m, team.id) {
            match best {
                Some((_, current)) if checkout <= current => {}
                _ => best = Some((team.id, checkout)),
            }
        }
    }
    best
}
