//! Interactive scoring session.
//!
//! `MatchFlow` owns the live match, the roster, the stores, and the RNG.
//! Entries go through a stage-confirm cycle so a prompt can sit between
//! validation and recording, and a staged entry can be cancelled with its
//! raw text handed back for editing.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::domain::errors::DomainError;
use crate::domain::reducer::{self, MatchAction};
use crate::domain::snapshot;
use crate::domain::state::{Match, MatchPhase, Player, PlayerId, Settings, Team};
use crate::domain::validate::{self, PendingScore, Prompt};
use crate::domain::{roster, teams};
use crate::error::AppError;
use crate::store::{MatchStore, PlayerStore};

/// What a confirmed entry did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Ordinary visit; the thrower's new remainder.
    Scored { remaining: u16 },
    /// The visit finished a leg.
    LegWon { team_idx: usize, leg: usize },
    /// The visit finished the match.
    MatchWon { winner_idx: usize },
}

#[derive(Debug, Clone)]
struct StagedEntry {
    /// Raw text as typed, handed back on cancel.
    raw: String,
    entry: PendingScore,
}

#[derive(Debug)]
pub struct MatchFlow {
    match_state: Match,
    roster: Vec<Player>,
    staged: Option<StagedEntry>,
    match_store: MatchStore,
    player_store: PlayerStore,
    rng: StdRng,
}

impl MatchFlow {
    /// Open a session over the data directory, restoring any saved match
    /// and roster. Corrupt payloads log a warning and start fresh; real
    /// I/O failures propagate.
    pub fn load_or_new(data_dir: &Path) -> Result<Self, AppError> {
        Self::load_with_rng(data_dir, StdRng::from_os_rng())
    }

    /// Same as [`load_or_new`](Self::load_or_new) with a caller-supplied
    /// RNG, for deterministic starting-team draws in tests.
    pub fn load_with_rng(data_dir: &Path, rng: StdRng) -> Result<Self, AppError> {
        let match_store = MatchStore::new(data_dir);
        let player_store = PlayerStore::new(data_dir);

        let roster = player_store.load()?;

        let match_state = match match_store.load() {
            Ok(Some(snap)) => match snapshot::restore(snap) {
                Ok(m) => m,
                Err(e) => {
                    warn!(error = %e, "saved match failed validation, starting fresh");
                    Match::empty()
                }
            },
            Ok(None) => Match::empty(),
            Err(e) if e.is_corrupt_payload() => {
                warn!(error = %e, "saved match unreadable, starting fresh");
                Match::empty()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            match_state,
            roster,
            staged: None,
            match_store,
            player_store,
            rng,
        })
    }

    pub fn state(&self) -> &Match {
        &self.match_state
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn staged(&self) -> Option<&PendingScore> {
        self.staged.as_ref().map(|s| &s.entry)
    }

    /// Validate entry text for the current thrower and stage it. Returns
    /// the prompt the driver still has to resolve, if any.
    pub fn submit(&mut self, text: &str) -> Result<Prompt, DomainError> {
        let entry = validate::validate_entry(&self.match_state, text)?;
        debug!(
            score = entry.score,
            remaining_after = entry.remaining_after,
            prompt = ?entry.prompt,
            "entry staged"
        );
        let prompt = entry.prompt;
        self.staged = Some(StagedEntry {
            raw: text.to_string(),
            entry,
        });
        Ok(prompt)
    }

    /// Answer the staged entry's prompt with a dart count.
    pub fn provide_darts(&mut self, count: u8) -> Result<(), DomainError> {
        let staged = self
            .staged
            .as_mut()
            .ok_or_else(|| DomainError::invariant("no entry staged"))?;
        staged.entry = match staged.entry.prompt {
            Prompt::CheckoutDarts => validate::apply_checkout_darts(&staged.entry, count)?,
            Prompt::FinalThrows => validate::apply_final_throws(&staged.entry, count)?,
            Prompt::None => return Err(DomainError::invariant("no prompt outstanding")),
        };
        Ok(())
    }

    /// Decline the staged entry's prompt; defaults stand.
    pub fn decline_prompt(&mut self) -> Result<(), DomainError> {
        let staged = self
            .staged
            .as_mut()
            .ok_or_else(|| DomainError::invariant("no entry staged"))?;
        staged.entry = validate::decline_prompt(&staged.entry);
        Ok(())
    }

    /// Record the staged entry and persist.
    pub fn confirm(&mut self) -> Result<TurnOutcome, AppError> {
        let prompt = self
            .staged
            .as_ref()
            .map(|s| s.entry.prompt)
            .ok_or_else(|| DomainError::invariant("no entry staged"))?;
        if prompt != Prompt::None {
            return Err(DomainError::invariant("prompt still unanswered").into());
        }
        let entry = self
            .staged
            .take()
            .map(|s| s.entry)
            .ok_or_else(|| AppError::internal("staged entry vanished"))?;

        let thrower_idx = self.match_state.curr_team_idx;
        let prev_leg = self.match_state.curr_leg_idx;

        let next = reducer::apply(
            &self.match_state,
            MatchAction::RecordScore(entry.clone()),
            &mut self.rng,
        );
        if next == self.match_state {
            return Err(DomainError::invariant("entry no longer applies").into());
        }

        let outcome = if next.phase == MatchPhase::Over {
            let winner_idx = next.winner.unwrap_or(thrower_idx);
            info!(winner_idx, "match won");
            TurnOutcome::MatchWon { winner_idx }
        } else if next.curr_leg_idx > prev_leg {
            info!(team_idx = thrower_idx, leg = prev_leg, "leg won");
            TurnOutcome::LegWon {
                team_idx: thrower_idx,
                leg: prev_leg,
            }
        } else {
            TurnOutcome::Scored {
                remaining: entry.remaining_after,
            }
        };

        self.match_state = next;
        self.persist()?;
        Ok(outcome)
    }

    /// Drop the staged entry, handing back its raw text for editing.
    pub fn cancel(&mut self) -> Option<String> {
        self.staged.take().map(|s| s.raw)
    }

    /// Remove the latest visit. Any staged entry is dropped first since it
    /// was validated against the state being rolled back.
    pub fn undo(&mut self) -> Result<(), AppError> {
        self.staged = None;
        self.dispatch(MatchAction::UndoLastScore)
    }

    pub fn set_active_team(&mut self, team_idx: usize) -> Result<(), AppError> {
        self.staged = None;
        self.dispatch(MatchAction::SetActiveTeam { team_idx })
    }

    pub fn set_active_player(&mut self, team_idx: usize, player_idx: usize) -> Result<(), AppError> {
        self.staged = None;
        self.dispatch(MatchAction::SetActivePlayer {
            team_idx,
            player_idx,
        })
    }

    /// Start a new match over the given lineup.
    pub fn new_match(&mut self, settings: Settings, lineup: Vec<Team>) -> Result<(), AppError> {
        let lineup = teams::compact_lineup(&lineup);
        if !reducer::config_valid(&settings, &lineup) {
            return Err(AppError::validation(
                "INVALID_MATCH_CONFIG",
                "match needs at least one team, every team a player, and positive score and legs",
            ));
        }
        self.staged = None;
        self.dispatch(MatchAction::CreateMatch {
            settings,
            teams: lineup,
        })
    }

    fn dispatch(&mut self, action: MatchAction) -> Result<(), AppError> {
        debug!(action = ?action, "dispatching");
        let next = reducer::apply(&self.match_state, action, &mut self.rng);
        if next == self.match_state {
            debug!("action was a no-op");
            return Ok(());
        }
        self.match_state = next;
        self.persist()
    }

    /// Add a player to the stored roster.
    pub fn add_roster_player(&mut self, name: &str) -> Result<Player, AppError> {
        let next = roster::add_player(&self.roster, name)?;
        self.roster = next;
        self.player_store.save(&self.roster)?;
        let added = match self.roster.last() {
            Some(p) => p.clone(),
            None => return Err(AppError::internal("roster empty after insert")),
        };
        info!(player_id = added.id, name = %added.name, "roster player added");
        Ok(added)
    }

    /// Remove a player from the stored roster.
    pub fn remove_roster_player(&mut self, id: PlayerId) -> Result<(), AppError> {
        self.roster = roster::remove_player(&self.roster, id);
        self.player_store.save(&self.roster)?;
        Ok(())
    }

    fn persist(&self) -> Result<(), AppError> {
        let snap = snapshot::snapshot(&self.match_state);
        self.match_store.save(&snap)?;
        debug!(path = %self.match_store.path().display(), "match persisted");
        Ok(())
    }
}
