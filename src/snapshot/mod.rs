//! Read model of a session for presentation layers.
//!
//! A [`SessionSnapshot`] is a self-contained, serializable copy of
//! everything a renderer needs: the choice list, the current round, the
//! score and the recent history. It is an export, not a persistence format;
//! sessions are never restored from it.

use crate::core::{Choice, ChoiceCatalog, RoundPhase, RoundRecord, RoundResult, Score, SessionState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable view of a session at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Session this snapshot was taken from
    pub session_id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Choices in catalog order
    pub choices: Vec<Choice>,

    /// Idle or Resolved
    pub phase: RoundPhase,

    /// Current round, if resolved
    pub current: Option<RoundResult>,

    pub score: Score,

    /// Recent rounds, oldest first
    pub history: Vec<RoundRecord>,

    /// Maximum number of rounds kept in `history`
    pub history_capacity: usize,
}

impl SessionSnapshot {
    pub(crate) fn capture(
        session_id: Uuid,
        taken_at: DateTime<Utc>,
        catalog: &ChoiceCatalog,
        state: &SessionState,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            session_id,
            taken_at,
            choices: catalog.choices().to_vec(),
            phase: state.phase(),
            current: state.current().cloned(),
            score: state.score(),
            history: state.history().records().cloned().collect(),
            history_capacity: state.history().capacity(),
        }
    }

    /// Compact JSON form.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Indented JSON form, for display.
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Parse and validate a snapshot produced by [`SessionSnapshot::to_json`].
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check version and the session invariants that survive serialization.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let expected_phase = match self.current {
            Some(_) => RoundPhase::Resolved,
            None => RoundPhase::Idle,
        };
        if self.phase != expected_phase {
            return Err(SnapshotError::ValidationFailed(format!(
                "phase {} does not match current round",
                self.phase.name()
            )));
        }

        if self.history.len() > self.history_capacity {
            return Err(SnapshotError::ValidationFailed(format!(
                "history holds {} rounds, capacity is {}",
                self.history.len(),
                self.history_capacity
            )));
        }

        Ok(())
    }
}
