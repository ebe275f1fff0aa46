//! Player roster kept across matches.

use crate::domain::errors::RosterError;
use crate::domain::state::{Player, PlayerId};

/// Add a named player. Names are trimmed; empty or duplicate names are
/// rejected. Ids count up from the highest ever assigned.
pub fn add_player(roster: &[Player], name: &str) -> Result<Vec<Player>, RosterError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::EmptyName);
    }
    if roster.iter().any(|p| p.name == name) {
        return Err(RosterError::DuplicateName(name.to_string()));
    }

    let id = roster.iter().map(|p| p.id).max().map_or(0, |max| max + 1);
    let mut out = roster.to_vec();
    out.push(Player::new(id, name));
    Ok(out)
}

/// Drop a player by id; unknown ids leave the roster as it was.
pub fn remove_player(roster: &[Player], id: PlayerId) -> Vec<Player> {
    roster.iter().filter(|p| p.id != id).cloned().collect()
}

/// Look a player up by id.
pub fn find_player(roster: &[Player], id: PlayerId) -> Option<&Player> {
    roster.iter().find(|p| p.id == id)
}

/// Look a player up by exact name.
pub fn find_player_by_name<'a>(roster: &'a [Player], name: &str) -> Option<&'a Player> {
    roster.iter().find(|p| p.name == name)
}
