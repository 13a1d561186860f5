//! Stonepaper: a stone / paper / scissors session engine
//!
//! Stonepaper follows a "pure core, imperative shell" layout. The game
//! rules, score and history live in pure functions and values; randomness
//! and time are injected into a small controller that owns the session.
//!
//! # Core Concepts
//!
//! - **Catalog**: the fixed, ordered set of moves via [`ChoiceCatalog`]
//! - **Rule**: a data-driven "defeats" relation via [`OutcomeRule`]
//! - **State**: current round, score and bounded history via [`SessionState`]
//! - **Controller**: `play`, `reset_round` and `reset_score` via [`SessionController`]
//!
//! # Example
//!
//! ```rust
//! use stonepaper::builder::SessionBuilder;
//! use stonepaper::core::{ChoiceCatalog, Outcome, RoundPhase};
//! use stonepaper::effects::ScriptedMoves;
//!
//! let catalog = ChoiceCatalog::classic();
//! let moves = ScriptedMoves::from_ids(&catalog, ["scissors"]).unwrap();
//! let mut session = SessionBuilder::new().move_source(moves).build().unwrap();
//!
//! let report = session.play("stone").unwrap();
//! assert_eq!(report.outcome, Outcome::PlayerWin);
//! assert_eq!(report.score.player, 1);
//!
//! session.reset_round();
//! assert_eq!(session.state().phase(), RoundPhase::Idle);
//!
//! assert!(session.play("rock").is_err());
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{BuildError, SessionBuilder, SessionConfig};
pub use crate::core::{
    ChoiceCatalog, GameError, Move, Outcome, OutcomeRule, RoundRecord, SessionState,
};
pub use effects::{PlayReport, SessionController, SharedSession};
pub use snapshot::SessionSnapshot;
