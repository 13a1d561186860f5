//! Core game types and logic.
//!
//! This module contains the pure core of the game:
//! - The choice catalog and its fail-safe display lookups
//! - The data-driven outcome rule
//! - Score, bounded history and session state
//!
//! All logic in this module is pure (no randomness, no clock reads);
//! those are injected by the session controller in `effects`.

mod choice;
mod error;
mod history;
mod rule;
mod state;

pub use choice::{Choice, ChoiceCatalog, Move, UNKNOWN_GLYPH, UNKNOWN_ID, UNKNOWN_LABEL};
pub use error::{CatalogError, GameError};
pub use history::{RoundHistory, RoundRecord, DEFAULT_HISTORY_CAPACITY};
pub use rule::{Outcome, OutcomeRule};
pub use state::{RoundPhase, RoundResult, Score, SessionState};
