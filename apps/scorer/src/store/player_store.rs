use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::snapshot::PlayerSnapshot;
use crate::domain::state::Player;
use crate::store::StoreError;

pub const PLAYERS_FILE: &str = "players.json";

/// Persists the player roster as a JSON array.
#[derive(Debug, Clone)]
pub struct PlayerStore {
    path: PathBuf,
}

impl PlayerStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PLAYERS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the roster; an absent file is an empty roster.
    pub fn load(&self) -> Result<Vec<Player>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        let players: Vec<PlayerSnapshot> =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode {
                path: self.path.clone(),
                source: e,
            })?;
        Ok(players
            .into_iter()
            .map(PlayerSnapshot::into_player)
            .collect())
    }

    pub fn save(&self, roster: &[Player]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let players: Vec<PlayerSnapshot> = roster.iter().map(PlayerSnapshot::from).collect();
        let json = serde_json::to_vec_pretty(&players).map_err(|e| StoreError::Encode {
            path: self.path.clone(),
            source: e,
        })?;
        fs::write(&self.path, json).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
