//! The catalog of moves a player may choose from.
//!
//! A [`ChoiceCatalog`] is an immutable, ordered set of [`Choice`] entries.
//! Each entry carries a [`Move`] identifier plus a label and glyph that the
//! core passes through untouched for presentation.
//!
//! Two lookup policies live side by side here:
//!
//! - [`ChoiceCatalog::resolve`] is strict and returns `None` for unknown ids.
//!   Session operations use it and turn a miss into an error.
//! - [`ChoiceCatalog::describe`] is fail-safe and returns a placeholder entry
//!   for unknown ids, so rendering recorded history never fails.

use super::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Id of the placeholder returned by fail-safe lookups.
pub const UNKNOWN_ID: &str = "unknown";
/// Label of the placeholder returned by fail-safe lookups.
pub const UNKNOWN_LABEL: &str = "Unknown";
/// Glyph of the placeholder returned by fail-safe lookups.
pub const UNKNOWN_GLYPH: &str = "❓";

/// Identifier of one discrete option a player can select.
///
/// Moves are compared by id. A `Move` obtained from
/// [`ChoiceCatalog::resolve`] is guaranteed to be a member of that catalog.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move(String);

impl Move {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The move's identifier, e.g. `"stone"`.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A move together with its display metadata.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Choice {
    pub id: Move,
    pub label: String,
    pub glyph: String,
}

impl Choice {
    pub fn new(id: impl Into<String>, label: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            id: Move::new(id),
            label: label.into(),
            glyph: glyph.into(),
        }
    }
}

/// Fixed, ordered set of valid moves.
///
/// # Example
///
/// ```rust
/// use stonepaper::core::ChoiceCatalog;
///
/// let catalog = ChoiceCatalog::classic();
/// assert_eq!(catalog.len(), 3);
/// assert!(catalog.resolve("stone").is_some());
/// assert!(catalog.resolve("rock").is_none());
///
/// // Display lookups never fail
/// assert_eq!(catalog.glyph("rock"), "❓");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChoiceCatalog {
    choices: Vec<Choice>,
    #[serde(skip)]
    placeholder: Choice,
}

impl ChoiceCatalog {
    /// Build a catalog from an ordered list of choices.
    ///
    /// Fails if the list is empty, an id is blank, or an id repeats.
    pub fn new(choices: Vec<Choice>) -> Result<Self, CatalogError> {
        if choices.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for choice in &choices {
            if choice.id.id().trim().is_empty() {
                return Err(CatalogError::BlankId);
            }
            if !seen.insert(choice.id.id()) {
                return Err(CatalogError::DuplicateId {
                    id: choice.id.id().to_string(),
                });
            }
        }

        Ok(Self {
            choices,
            placeholder: Choice::new(UNKNOWN_ID, UNKNOWN_LABEL, UNKNOWN_GLYPH),
        })
    }

    /// The stone / paper / scissors catalog, in that order.
    pub fn classic() -> Self {
        Self {
            choices: vec![
                Choice::new("stone", "Stone", "✊"),
                Choice::new("paper", "Paper", "✋"),
                Choice::new("scissors", "Scissors", "✌️"),
            ],
            placeholder: Choice::new(UNKNOWN_ID, UNKNOWN_LABEL, UNKNOWN_GLYPH),
        }
    }

    /// All choices in catalog order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Iterate the member moves in catalog order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.choices.iter().map(|c| &c.id)
    }

    /// Number of moves in the catalog.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// A constructed catalog is never empty.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Strict lookup of the entry for `id`.
    pub fn get(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id.id() == id)
    }

    /// Strict lookup of the member move for `id`.
    pub fn resolve(&self, id: &str) -> Option<Move> {
        self.get(id).map(|c| c.id.clone())
    }

    /// Whether `mv` is a member of this catalog.
    pub fn contains(&self, mv: &Move) -> bool {
        self.position(mv).is_some()
    }

    /// Index of `mv` in catalog order.
    pub fn position(&self, mv: &Move) -> Option<usize> {
        self.choices.iter().position(|c| &c.id == mv)
    }

    /// The move at `index` in catalog order, wrapping past the end.
    ///
    /// Total for every `index`, since a catalog always has at least one entry.
    pub fn nth(&self, index: usize) -> &Move {
        &self.choices[index % self.choices.len()].id
    }

    /// Fail-safe lookup: unknown ids yield the placeholder entry.
    pub fn describe(&self, id: &str) -> &Choice {
        match self.get(id) {
            Some(choice) => choice,
            None => {
                log::trace!("no catalog entry for '{}', using placeholder", id);
                &self.placeholder
            }
        }
    }

    /// Glyph for `id`, or the placeholder glyph.
    pub fn glyph(&self, id: &str) -> &str {
        &self.describe(id).glyph
    }

    /// Label for `id`, or the placeholder label.
    pub fn label(&self, id: &str) -> &str {
        &self.describe(id).label
    }
}

impl Default for ChoiceCatalog {
    fn default() -> Self {
        Self::classic()
    }
}
