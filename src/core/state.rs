//! Session state and its pure transitions.
//!
//! [`SessionState`] is the aggregate root of a game session. Every
//! transition is a pure function returning a new state, so a caller either
//! sees the old value or the fully updated one.

use super::choice::Move;
use super::history::{RoundHistory, RoundRecord};
use super::rule::Outcome;
use serde::{Deserialize, Serialize};

/// Cumulative score since the last score reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    /// Score after one more round with `outcome`. Draws leave it unchanged.
    pub fn tally(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::PlayerWin => Self {
                player: self.player.saturating_add(1),
                ..self
            },
            Outcome::ComputerWin => Self {
                computer: self.computer.saturating_add(1),
                ..self
            },
            Outcome::Draw => self,
        }
    }

    /// Number of decided (non-draw) rounds.
    pub fn decided(&self) -> u32 {
        self.player.saturating_add(self.computer)
    }
}

/// The three current-round fields, present together or not at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
}

impl From<&RoundRecord> for RoundResult {
    fn from(record: &RoundRecord) -> Self {
        Self {
            player_move: record.player_move.clone(),
            computer_move: record.computer_move.clone(),
            outcome: record.outcome,
        }
    }
}

/// Per-round phase: `Idle --play--> Resolved --reset_round--> Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Idle,
    Resolved,
}

impl RoundPhase {
    /// Display name of the phase, e.g. `"Idle"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Resolved => "Resolved",
        }
    }
}

/// Mutable record of a session, replaced wholesale on every transition.
///
/// # Example
///
/// ```rust
/// use stonepaper::core::{ChoiceCatalog, Outcome, RoundPhase, RoundRecord, SessionState};
/// use chrono::Utc;
///
/// let catalog = ChoiceCatalog::classic();
/// let state = SessionState::new(5);
/// assert_eq!(state.phase(), RoundPhase::Idle);
///
/// let state = state.resolve_round(RoundRecord {
///     player_move: catalog.resolve("paper").unwrap(),
///     computer_move: catalog.resolve("stone").unwrap(),
///     outcome: Outcome::PlayerWin,
///     occurred_at: Utc::now(),
/// });
///
/// assert_eq!(state.phase(), RoundPhase::Resolved);
/// assert_eq!(state.score().player, 1);
/// assert_eq!(state.history().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    current: Option<RoundResult>,
    score: Score,
    history: RoundHistory,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current: None,
            score: Score::default(),
            history: RoundHistory::new(),
        }
    }
}

impl SessionState {
    /// Fresh state: no current round, zero score, empty history.
    pub fn new(history_capacity: usize) -> Self {
        Self {
            current: None,
            score: Score::default(),
            history: RoundHistory::with_capacity(history_capacity),
        }
    }

    /// State after a completed round: current round set, score tallied,
    /// record appended to history.
    pub fn resolve_round(&self, record: RoundRecord) -> Self {
        Self {
            current: Some(RoundResult::from(&record)),
            score: self.score.tally(record.outcome),
            history: self.history.record(record),
        }
    }

    /// State with the current round cleared. Score and history are kept.
    pub fn cleared_round(&self) -> Self {
        Self {
            current: None,
            ..self.clone()
        }
    }

    /// State with score zeroed and history emptied. The current round is kept.
    pub fn cleared_score(&self) -> Self {
        Self {
            current: self.current.clone(),
            score: Score::default(),
            history: self.history.cleared(),
        }
    }

    /// Whether a round is currently resolved.
    pub fn phase(&self) -> RoundPhase {
        match self.current {
            Some(_) => RoundPhase::Resolved,
            None => RoundPhase::Idle,
        }
    }

    /// The current round, if one is resolved.
    pub fn current(&self) -> Option<&RoundResult> {
        self.current.as_ref()
    }

    /// Player move of the current round.
    pub fn current_player_move(&self) -> Option<&Move> {
        self.current.as_ref().map(|r| &r.player_move)
    }

    /// Computer move of the current round.
    pub fn current_computer_move(&self) -> Option<&Move> {
        self.current.as_ref().map(|r| &r.computer_move)
    }

    /// Outcome of the current round.
    pub fn current_outcome(&self) -> Option<Outcome> {
        self.current.as_ref().map(|r| r.outcome)
    }

    /// Running score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Recent rounds, oldest first.
    pub fn history(&self) -> &RoundHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::choice::ChoiceCatalog;
    use chrono::Utc;

    fn record(player: &str, computer: &str, outcome: Outcome) -> RoundRecord {
        let catalog = ChoiceCatalog::classic();
        RoundRecord {
            player_move: catalog.resolve(player).unwrap(),
            computer_move: catalog.resolve(computer).unwrap(),
            outcome,
            occurred_at: Utc::now(),
        }
    }

    #[test]
    fn new_state_is_idle_and_zeroed() {
        let state = SessionState::new(5);
        assert_eq!(state.phase(), RoundPhase::Idle);
        assert!(state.current_player_move().is_none());
        assert!(state.current_computer_move().is_none());
        assert!(state.current_outcome().is_none());
        assert_eq!(state.score(), Score::default());
        assert!(state.history().is_empty());
    }

    #[test]
    fn score_tally_counts_wins_only() {
        let score = Score::default()
            .tally(Outcome::PlayerWin)
            .tally(Outcome::Draw)
            .tally(Outcome::ComputerWin)
            .tally(Outcome::PlayerWin);
        assert_eq!(
            score,
            Score {
                player: 2,
                computer: 1
            }
        );
        assert_eq!(score.decided(), 3);
    }

    #[test]
    fn resolve_round_sets_all_current_fields() {
        let state =
            SessionState::new(5).resolve_round(record("stone", "paper", Outcome::ComputerWin));

        assert_eq!(state.phase(), RoundPhase::Resolved);
        assert_eq!(state.current_player_move().unwrap().id(), "stone");
        assert_eq!(state.current_computer_move().unwrap().id(), "paper");
        assert_eq!(state.current_outcome(), Some(Outcome::ComputerWin));
        assert_eq!(state.score().computer, 1);
    }

    #[test]
    fn cleared_round_keeps_score_and_history() {
        let state = SessionState::new(5)
            .resolve_round(record("stone", "scissors", Outcome::PlayerWin))
            .cleared_round();

        assert_eq!(state.phase(), RoundPhase::Idle);
        assert!(state.current().is_none());
        assert_eq!(state.score().player, 1);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn cleared_score_keeps_current_round() {
        let state = SessionState::new(5)
            .resolve_round(record("paper", "stone", Outcome::PlayerWin))
            .cleared_score();

        assert_eq!(state.phase(), RoundPhase::Resolved);
        assert_eq!(state.current_outcome(), Some(Outcome::PlayerWin));
        assert_eq!(state.score(), Score::default());
        assert!(state.history().is_empty());
        assert_eq!(state.history().capacity(), 5);
    }

    #[test]
    fn transitions_do_not_touch_the_original() {
        let state = SessionState::new(5);
        let _next = state.resolve_round(record("stone", "stone", Outcome::Draw));
        assert_eq!(state, SessionState::new(5));
    }

    #[test]
    fn phase_names() {
        assert_eq!(RoundPhase::Idle.name(), "Idle");
        assert_eq!(RoundPhase::Resolved.name(), "Resolved");
    }

    #[test]
    fn state_serializes_correctly() {
        let state =
            SessionState::new(5).resolve_round(record("stone", "scissors", Outcome::PlayerWin));
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
