//! Error types for the game core.

use thiserror::Error;

/// Errors raised by session operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// The caller asked to play a move that is not in the catalog.
    #[error("Invalid move '{id}': not a member of the choice catalog")]
    InvalidMove { id: String },
}

/// Errors raised while assembling a catalog or its outcome rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Choice catalog must contain at least one move")]
    Empty,

    #[error("Choice ids must not be blank")]
    BlankId,

    #[error("Duplicate choice id '{id}'")]
    DuplicateId { id: String },

    #[error("A cyclic rule needs an odd number of moves (got {size})")]
    EvenSize { size: usize },

    #[error("Rule references unknown move '{id}'")]
    UnknownMove { id: String },

    #[error("Move '{id}' cannot defeat itself")]
    SelfBeating { id: String },

    #[error("Moves '{a}' and '{b}' are declared to defeat each other")]
    Contradiction { a: String, b: String },

    #[error("No winner declared between '{a}' and '{b}'")]
    Undecided { a: String, b: String },
}
