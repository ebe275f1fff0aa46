use crate::domain::errors::DomainError;
use crate::domain::rules;

/// Roster player id. `-1` marks an unfilled lineup slot.
pub type PlayerId = i32;
/// Team id. Stable across lineup edits; matches the vector position only
/// until a team is removed.
pub type TeamId = usize;

pub const UNASSIGNED_PLAYER: PlayerId = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Empty lineup slot awaiting a roster player.
    pub fn placeholder() -> Self {
        Self {
            id: UNASSIGNED_PLAYER,
            name: String::new(),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.id != UNASSIGNED_PLAYER
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    /// Throw order within the team; nonempty once play starts.
    pub players: Vec<Player>,
    /// Who throws next for this team.
    pub curr_player_idx: usize,
    /// Legs won so far.
    pub wins: u16,
}

impl Team {
    pub fn new(id: TeamId, players: Vec<Player>) -> Self {
        Self {
            id,
            players,
            curr_player_idx: 0,
            wins: 0,
        }
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.curr_player_idx)
    }
}

/// How many legs decide the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// First team to win `number_of_legs` legs.
    FirstTo,
    /// Majority of `number_of_legs` legs.
    BestOf,
}

/// Required final dart of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMode {
    /// Any segment may finish.
    Simple,
    /// Leg must end on a double (bull counts).
    Double,
    /// Leg must end on a triple.
    Triple,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub game_mode: GameMode,
    pub checkout_mode: CheckoutMode,
    /// Points each team works down from per leg (501, 301, ...).
    pub starting_score: u16,
    pub number_of_legs: u16,
    /// Index into `teams` of the team opening leg 0.
    pub starting_team: usize,
    /// Draw the starting team at match creation instead.
    pub random_starting_team: bool,
    /// Scoreboard shows exact remainders when set.
    pub display_score: bool,
    /// Ask how many darts the leg-ending visit used.
    pub ask_number_of_throws: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_mode: GameMode::FirstTo,
            checkout_mode: CheckoutMode::Double,
            starting_score: 501,
            number_of_legs: 1,
            starting_team: 0,
            random_starting_team: false,
            display_score: true,
            ask_number_of_throws: false,
        }
    }
}

/// One recorded visit. `player` is a snapshot taken at throw time, so later
/// roster or lineup edits never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Position in the match log.
    pub id: usize,
    pub player: Player,
    pub team_id: TeamId,
    /// 0-based leg the visit belongs to.
    pub leg: usize,
    /// Points scored this visit (0..=180, never 179).
    pub score: u16,
    /// Team remainder after the visit.
    pub remaining: u16,
    /// Darts thrown at a finish this visit (0..=3).
    pub checkout_attempts: u8,
    /// Darts not thrown at a finish this visit.
    pub throws: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Created, no teams committed yet.
    Initialized,
    /// Legs in progress.
    Running,
    /// A team reached the required wins.
    Over,
}

/// A leg already decided, derived from the score log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegResult {
    pub leg: usize,
    pub winner_team_id: TeamId,
}

/// Entire match container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub teams: Vec<Team>,
    /// Append-only visit log; undo removes exactly the last entry.
    pub scores: Vec<Score>,
    pub settings: Settings,
    /// 0-based current leg.
    pub curr_leg_idx: usize,
    /// Index into `teams` of the team throwing next.
    pub curr_team_idx: usize,
    pub phase: MatchPhase,
    /// Index into `teams` of the winning team; set exactly while `Over`.
    pub winner: Option<usize>,
}

impl Match {
    /// Fresh container before any lineup is committed.
    pub fn empty() -> Self {
        Self {
            teams: Vec::new(),
            scores: Vec::new(),
            settings: Settings::default(),
            curr_leg_idx: 0,
            curr_team_idx: 0,
            phase: MatchPhase::Initialized,
            winner: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == MatchPhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::Over
    }

    pub fn current_team(&self) -> Option<&Team> {
        self.teams.get(self.curr_team_idx)
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_team().and_then(Team::current_player)
    }

    /// Points a team still needs in the current leg.
    ///
    /// Equals the `remaining` of the team's latest entry this leg when one
    /// exists, otherwise the starting score.
    pub fn remaining_score(&self, team_id: TeamId) -> u16 {
        let scored: u32 = self
            .team_leg_scores(team_id, self.curr_leg_idx)
            .map(|s| u32::from(s.score))
            .sum();
        let start = u32::from(self.settings.starting_score);
        start.saturating_sub(scored) as u16
    }

    /// All visits by a team, across legs, in throw order.
    pub fn team_scores(&self, team_id: TeamId) -> impl Iterator<Item = &Score> {
        self.scores.iter().filter(move |s| s.team_id == team_id)
    }

    /// A team's visits within one leg, in throw order.
    pub fn team_leg_scores(&self, team_id: TeamId, leg: usize) -> impl Iterator<Item = &Score> {
        self.scores
            .iter()
            .filter(move |s| s.team_id == team_id && s.leg == leg)
    }

    /// All visits within one leg, in throw order.
    pub fn leg_scores(&self, leg: usize) -> impl Iterator<Item = &Score> {
        self.scores.iter().filter(move |s| s.leg == leg)
    }

    /// Decided legs in playing order, read off the zero-remainder entries.
    pub fn leg_results(&self) -> Vec<LegResult> {
        self.scores
            .iter()
            .filter(|s| s.remaining == 0)
            .map(|s| LegResult {
                leg: s.leg,
                winner_team_id: s.team_id,
            })
            .collect()
    }

    pub fn wins_needed(&self) -> u16 {
        rules::wins_needed(self.settings.game_mode, self.settings.number_of_legs)
    }

    pub fn max_legs(&self) -> usize {
        rules::max_legs(
            self.settings.game_mode,
            self.settings.number_of_legs,
            self.teams.len(),
        )
    }
}

/// Rotation math helpers.
///
/// These live in `domain` so the reducer, services, and views share a single
/// source of truth for "who throws next".
#[inline]
pub fn next_index(idx: usize, len: usize) -> usize {
    index_offset(idx, 1, len)
}

#[inline]
pub fn prev_index(idx: usize, len: usize) -> usize {
    index_offset(idx, -1, len)
}

#[inline]
pub fn index_offset(idx: usize, delta: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (idx as i64 + delta).rem_euclid(len as i64) as usize
}

/// Opening team index for a 0-based leg, rotating from the match starter.
#[inline]
pub fn leg_opener(starting_team: usize, leg: usize, team_count: usize) -> usize {
    if team_count == 0 {
        return 0;
    }
    (starting_team + leg) % team_count
}

pub fn require_running(m: &Match, ctx: &'static str) -> Result<(), DomainError> {
    if m.is_running() {
        Ok(())
    } else {
        Err(DomainError::invariant(format!(
            "match must be running ({ctx})"
        )))
    }
}

pub fn require_current_team<'a>(m: &'a Match, ctx: &'static str) -> Result<&'a Team, DomainError> {
    m.current_team().ok_or_else(|| {
        DomainError::invariant(format!("current team index must be valid ({ctx})"))
    })
}

pub fn require_team<'a>(
    m: &'a Match,
    team_id: TeamId,
    ctx: &'static str,
) -> Result<&'a Team, DomainError> {
    m.teams
        .iter()
        .find(|t| t.id == team_id)
        .ok_or_else(|| DomainError::invariant(format!("unknown team {team_id} ({ctx})")))
}
