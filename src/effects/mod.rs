//! Session operations around the pure core.
//!
//! This module is the "imperative shell": it owns the session state, draws
//! the computer's move and reads the clock.
//!
//! # Key Concepts
//!
//! - **Sources**: injectable randomness ([`MoveSource`]) and time ([`Clock`])
//! - **Controller**: play / reset_round / reset_score over one [`SessionController`]
//! - **Shared**: a mutex-serialized handle for concurrent callers

mod controller;
mod shared;
mod sources;

pub use controller::{PlayReport, SessionController};
pub use shared::SharedSession;
pub use sources::{Clock, FixedClock, MoveSource, RandomMoveSource, ScriptedMoves, SystemClock};
