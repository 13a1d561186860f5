//! Outcome determination.
//!
//! The "defeats" relation is stored as data: each move maps to the set of
//! moves it beats. Deciding a round is a lookup in that table, so the rule
//! is total and deterministic for any catalog it was built from.

use super::choice::{ChoiceCatalog, Move};
use super::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Resolved result of one round, from the player's perspective.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Draw,
}

impl Outcome {
    /// Short past-tense verdict used for history lines.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::PlayerWin => "You won",
            Self::ComputerWin => "Computer won",
            Self::Draw => "Draw",
        }
    }

    /// The same outcome seen from the other side of the table.
    pub fn reversed(&self) -> Self {
        match self {
            Self::PlayerWin => Self::ComputerWin,
            Self::ComputerWin => Self::PlayerWin,
            Self::Draw => Self::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headline = match self {
            Self::PlayerWin => "You win! 🎉",
            Self::ComputerWin => "Computer wins! 💻",
            Self::Draw => "It's a draw! 🤝",
        };
        f.write_str(headline)
    }
}

/// Pure mapping from a pair of moves to an [`Outcome`].
///
/// # Example
///
/// ```rust
/// use stonepaper::core::{ChoiceCatalog, Outcome, OutcomeRule};
///
/// let catalog = ChoiceCatalog::classic();
/// let rule = OutcomeRule::cyclic(&catalog).unwrap();
///
/// let stone = catalog.resolve("stone").unwrap();
/// let scissors = catalog.resolve("scissors").unwrap();
///
/// assert_eq!(rule.decide(&stone, &scissors), Outcome::PlayerWin);
/// assert_eq!(rule.decide(&scissors, &stone), Outcome::ComputerWin);
/// assert_eq!(rule.decide(&stone, &stone), Outcome::Draw);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeRule {
    defeats: HashMap<Move, HashSet<Move>>,
}

impl OutcomeRule {
    /// Build the balanced cyclic rule for an odd-sized catalog.
    ///
    /// With moves `m0..m(n-1)` in catalog order, move `i` defeats move
    /// `(i - k) mod n` for every odd `k < n`. For the classic catalog this
    /// gives paper > stone, scissors > paper and stone > scissors.
    pub fn cyclic(catalog: &ChoiceCatalog) -> Result<Self, CatalogError> {
        let size = catalog.len();
        if size % 2 == 0 {
            return Err(CatalogError::EvenSize { size });
        }

        Ok(Self::cycle_of(catalog))
    }

    /// The cyclic rule over [`ChoiceCatalog::classic`].
    pub fn classic() -> Self {
        Self::cycle_of(&ChoiceCatalog::classic())
    }

    fn cycle_of(catalog: &ChoiceCatalog) -> Self {
        let size = catalog.len();
        let moves: Vec<&Move> = catalog.moves().collect();
        let defeats = moves
            .iter()
            .enumerate()
            .map(|(i, winner)| {
                let losers = (1..size)
                    .step_by(2)
                    .map(|k| moves[(i + size - k) % size].clone())
                    .collect();
                ((*winner).clone(), losers)
            })
            .collect();

        Self { defeats }
    }

    /// Build a rule from explicit `(winner, loser)` id pairs.
    ///
    /// Every unordered pair of distinct moves must have exactly one winner.
    pub fn from_pairs<'a, I>(catalog: &ChoiceCatalog, pairs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut defeats: HashMap<Move, HashSet<Move>> = catalog
            .moves()
            .map(|mv| (mv.clone(), HashSet::new()))
            .collect();

        for (winner_id, loser_id) in pairs {
            let winner = resolve_member(catalog, winner_id)?;
            let loser = resolve_member(catalog, loser_id)?;
            if winner == loser {
                return Err(CatalogError::SelfBeating {
                    id: winner_id.to_string(),
                });
            }
            if defeats.get(&loser).is_some_and(|set| set.contains(&winner)) {
                return Err(CatalogError::Contradiction {
                    a: winner_id.to_string(),
                    b: loser_id.to_string(),
                });
            }
            defeats.entry(winner).or_default().insert(loser);
        }

        let rule = Self { defeats };
        let moves: Vec<&Move> = catalog.moves().collect();
        for (i, a) in moves.iter().enumerate() {
            for b in &moves[i + 1..] {
                if !rule.beats(a, b) && !rule.beats(b, a) {
                    return Err(CatalogError::Undecided {
                        a: a.id().to_string(),
                        b: b.id().to_string(),
                    });
                }
            }
        }

        Ok(rule)
    }

    /// Whether `winner` defeats `loser` under this rule.
    pub fn beats(&self, winner: &Move, loser: &Move) -> bool {
        self.defeats
            .get(winner)
            .is_some_and(|losers| losers.contains(loser))
    }

    /// Moves defeated by `mv`, empty for moves outside the rule.
    pub fn defeated_by(&self, mv: &Move) -> impl Iterator<Item = &Move> {
        self.defeats.get(mv).into_iter().flatten()
    }

    /// Decide a round.
    pub fn decide(&self, player: &Move, computer: &Move) -> Outcome {
        if player == computer {
            Outcome::Draw
        } else if self.beats(player, computer) {
            Outcome::PlayerWin
        } else {
            Outcome::ComputerWin
        }
    }
}

fn resolve_member(catalog: &ChoiceCatalog, id: &str) -> Result<Move, CatalogError> {
    catalog
        .resolve(id)
        .ok_or_else(|| CatalogError::UnknownMove { id: id.to_string() })
}
