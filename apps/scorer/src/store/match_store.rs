use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::snapshot::MatchSnapshot;
use crate::store::StoreError;

pub const MATCH_FILE: &str = "match.json";

/// Persists the current match as one JSON document.
#[derive(Debug, Clone)]
pub struct MatchStore {
    path: PathBuf,
}

impl MatchStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(MATCH_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved match; `None` when nothing was saved yet.
    pub fn load(&self) -> Result<Option<MatchSnapshot>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StoreError::Decode {
                path: self.path.clone(),
                source: e,
            })
    }

    pub fn save(&self, snapshot: &MatchSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let json = serde_json::to_vec_pretty(snapshot).map_err(|e| StoreError::Encode {
            path: self.path.clone(),
            source: e,
        })?;
        fs::write(&self.path, json).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Forget the saved match. Absent files count as cleared.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
