//! Session controller that owns the state and runs the operations.

use crate::core::{
    Choice, ChoiceCatalog, GameError, Move, Outcome, OutcomeRule, RoundRecord, Score,
    SessionState, DEFAULT_HISTORY_CAPACITY,
};
use crate::effects::sources::{Clock, MoveSource, RandomMoveSource, SystemClock};
use crate::snapshot::SessionSnapshot;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of one `play` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayReport {
    pub outcome: Outcome,
    pub player_move: Move,
    pub computer_move: Move,
    pub score: Score,
    /// History after the round, oldest first.
    pub history: Vec<RoundRecord>,
}

/// Owns a [`SessionState`] and applies play / reset operations to it.
///
/// Randomness and time come from the injected [`MoveSource`] and [`Clock`].
pub struct SessionController {
    id: Uuid,
    catalog: ChoiceCatalog,
    rule: OutcomeRule,
    state: SessionState,
    moves: Box<dyn MoveSource>,
    clock: Box<dyn Clock>,
}

impl SessionController {
    /// Classic catalog, uniform random opponent, wall-clock timestamps.
    pub fn new() -> Self {
        Self::from_parts(
            ChoiceCatalog::classic(),
            OutcomeRule::classic(),
            DEFAULT_HISTORY_CAPACITY,
            Box::new(RandomMoveSource::new()),
            Box::new(SystemClock),
        )
    }

    pub(crate) fn from_parts(
        catalog: ChoiceCatalog,
        rule: OutcomeRule,
        history_capacity: usize,
        moves: Box<dyn MoveSource>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            catalog,
            rule,
            state: SessionState::new(history_capacity),
            moves,
            clock,
        }
    }

    /// Identifier assigned when the session was created.
    pub fn session_id(&self) -> Uuid {
        self.id
    }

    /// Choices in catalog order, with display metadata.
    pub fn list_choices(&self) -> &[Choice] {
        self.catalog.choices()
    }

    /// The catalog moves are resolved against.
    pub fn catalog(&self) -> &ChoiceCatalog {
        &self.catalog
    }

    /// The rule that decides each round.
    pub fn rule(&self) -> &OutcomeRule {
        &self.rule
    }

    /// Current state (read-only).
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Play one round with the move identified by `move_id`.
    ///
    /// Unknown ids fail with [`GameError::InvalidMove`] before anything is
    /// drawn or recorded, so the state is unchanged on error.
    pub fn play(&mut self, move_id: &str) -> Result<PlayReport, GameError> {
        let player_move = self.catalog.resolve(move_id).ok_or_else(|| {
            warn!("session {}: rejected move '{}'", self.id, move_id);
            GameError::InvalidMove {
                id: move_id.to_string(),
            }
        })?;
        Ok(self.play_resolved(player_move))
    }

    /// Play one round with an already resolved move.
    pub fn play_move(&mut self, player_move: &Move) -> Result<PlayReport, GameError> {
        if !self.catalog.contains(player_move) {
            warn!("session {}: rejected move '{}'", self.id, player_move);
            return Err(GameError::InvalidMove {
                id: player_move.id().to_string(),
            });
        }
        Ok(self.play_resolved(player_move.clone()))
    }

    fn play_resolved(&mut self, player_move: Move) -> PlayReport {
        let record = self.step(player_move);
        self.state = self.state.resolve_round(record.clone());

        let score = self.state.score();
        debug!(
            "session {}: {} vs {} -> {:?} (score {}-{})",
            self.id,
            record.player_move,
            record.computer_move,
            record.outcome,
            score.player,
            score.computer
        );

        PlayReport {
            outcome: record.outcome,
            player_move: record.player_move,
            computer_move: record.computer_move,
            score,
            history: self.state.history().records().cloned().collect(),
        }
    }

    /// Draw the computer's move and resolve the round, without touching state.
    fn step(&mut self, player_move: Move) -> RoundRecord {
        let pick = self.moves.pick(self.catalog.len());
        let computer_move = self.catalog.nth(pick).clone();
        let outcome = self.rule.decide(&player_move, &computer_move);
        RoundRecord {
            player_move,
            computer_move,
            outcome,
            occurred_at: self.clock.now(),
        }
    }

    /// Clear the current round. Score and history are kept.
    pub fn reset_round(&mut self) {
        self.state = self.state.cleared_round();
        debug!("session {}: round reset", self.id);
    }

    /// Zero the score and clear history. The current round is kept.
    pub fn reset_score(&mut self) {
        self.state = self.state.cleared_score();
        debug!("session {}: score reset", self.id);
    }

    /// Serializable read model of the session, stamped with the injected clock.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self.id, self.clock.now(), &self.catalog, &self.state)
    }

    /// History rendered as `"HH:MM:SS: ✊ vs ✌️ → You won"`, oldest first.
    pub fn history_lines(&self) -> Vec<String> {
        self.state
            .history()
            .records()
            .map(|r| format!("{}: {}", r.time_label(), r.summary(&self.catalog)))
            .collect()
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("id", &self.id)
            .field("catalog", &self.catalog)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
