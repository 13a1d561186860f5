//! Thread-safe handle for sessions shared between callers.

use crate::core::{Choice, GameError, SessionState};
use crate::effects::controller::{PlayReport, SessionController};
use crate::snapshot::SessionSnapshot;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle that serializes access to one [`SessionController`].
///
/// Every operation holds the lock for its whole duration, so concurrent
/// callers never observe a half-applied round.
#[derive(Clone, Debug)]
pub struct SharedSession {
    inner: Arc<Mutex<SessionController>>,
}

impl SharedSession {
    /// Wrap `controller` for use from several threads.
    pub fn new(controller: SessionController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    // State is replaced in a single assignment, so a poisoned lock still
    // guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, SessionController> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`SessionController::play`].
    pub fn play(&self, move_id: &str) -> Result<PlayReport, GameError> {
        self.lock().play(move_id)
    }

    /// See [`SessionController::reset_round`].
    pub fn reset_round(&self) {
        self.lock().reset_round();
    }

    /// See [`SessionController::reset_score`].
    pub fn reset_score(&self) {
        self.lock().reset_score();
    }

    /// Copy of the catalog entries, in order.
    pub fn list_choices(&self) -> Vec<Choice> {
        self.lock().list_choices().to_vec()
    }

    /// Copy of the current state.
    pub fn state(&self) -> SessionState {
        self.lock().state().clone()
    }

    /// See [`SessionController::snapshot`].
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }
}

impl From<SessionController> for SharedSession {
    fn from(controller: SessionController) -> Self {
        Self::new(controller)
    }
}
