//! Lineup editing before a match starts.
//!
//! Helpers build new vectors instead of mutating, so hosts can keep the
//! previous lineup around for cancel flows. Team ids are identities and
//! survive removals; only `next_team_id` looks at them.

use crate::domain::state::{Player, Team, TeamId};

fn next_team_id(teams: &[Team]) -> TeamId {
    teams.iter().map(|t| t.id + 1).max().unwrap_or(0)
}

/// Append a team holding one empty player slot.
pub fn add_team(teams: &[Team]) -> Vec<Team> {
    let mut out = teams.to_vec();
    out.push(Team::new(next_team_id(teams), vec![Player::placeholder()]));
    out
}

/// Drop a team by id. Ids of the remaining teams stay as they are.
pub fn remove_team(teams: &[Team], team_id: TeamId) -> Vec<Team> {
    teams
        .iter()
        .filter(|t| t.id != team_id)
        .cloned()
        .collect()
}

/// Append an empty player slot to one team.
pub fn add_player_slot(teams: &[Team], team_id: TeamId) -> Vec<Team> {
    teams
        .iter()
        .map(|t| {
            let mut t = t.clone();
            if t.id == team_id {
                t.players.push(Player::placeholder());
            }
            t
        })
        .collect()
}

/// Remove a player slot by position. A team never shrinks below one slot.
pub fn remove_player(teams: &[Team], team_id: TeamId, player_idx: usize) -> Vec<Team> {
    teams
        .iter()
        .map(|t| {
            let mut t = t.clone();
            if t.id == team_id && t.players.len() > 1 && player_idx < t.players.len() {
                t.players.remove(player_idx);
                if t.curr_player_idx >= t.players.len() {
                    t.curr_player_idx = 0;
                }
            }
            t
        })
        .collect()
}

/// Put a roster player into a slot.
pub fn set_player(teams: &[Team], team_id: TeamId, player_idx: usize, player: Player) -> Vec<Team> {
    teams
        .iter()
        .map(|t| {
            let mut t = t.clone();
            if t.id == team_id {
                if let Some(slot) = t.players.get_mut(player_idx) {
                    *slot = player.clone();
                }
            }
            t
        })
        .collect()
}

/// Drop unassigned slots; teams left empty disappear with them.
pub fn compact_lineup(teams: &[Team]) -> Vec<Team> {
    teams
        .iter()
        .map(|t| {
            let mut t = t.clone();
            t.players.retain(Player::is_assigned);
            if t.curr_player_idx >= t.players.len() {
                t.curr_player_idx = 0;
            }
            t
        })
        .filter(|t| !t.players.is_empty())
        .collect()
}

/// Whether every team has at least one assigned player.
pub fn lineup_ready(teams: &[Team]) -> bool {
    !teams.is_empty() && teams.iter().all(|t| t.players.iter().any(Player::is_assigned))
}
