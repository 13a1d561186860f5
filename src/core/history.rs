//! Bounded round history.
//!
//! Provides immutable tracking of completed rounds. Recording returns a new
//! history; once the capacity is exceeded the oldest rounds are evicted
//! first.

use super::choice::{ChoiceCatalog, Move};
use super::rule::Outcome;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{vec_deque, VecDeque};

/// Number of rounds kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Record of a single completed round.
///
/// Records are immutable values, created once per round.
///
/// # Example
///
/// ```rust
/// use stonepaper::core::{ChoiceCatalog, Outcome, RoundRecord};
/// use chrono::Utc;
///
/// let catalog = ChoiceCatalog::classic();
/// let record = RoundRecord {
///     player_move: catalog.resolve("stone").unwrap(),
///     computer_move: catalog.resolve("scissors").unwrap(),
///     outcome: Outcome::PlayerWin,
///     occurred_at: Utc::now(),
/// };
///
/// assert_eq!(record.summary(&catalog), "✊ vs ✌️ → You won");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The move submitted by the player
    pub player_move: Move,
    /// The move drawn for the computer
    pub computer_move: Move,
    /// The resolved outcome
    pub outcome: Outcome,
    /// When the round was resolved
    pub occurred_at: DateTime<Utc>,
}

impl RoundRecord {
    /// One-line rendering using fail-safe glyph lookups.
    ///
    /// Moves missing from `catalog` render with the placeholder glyph.
    pub fn summary(&self, catalog: &ChoiceCatalog) -> String {
        format!(
            "{} vs {} → {}",
            catalog.glyph(self.player_move.id()),
            catalog.glyph(self.computer_move.id()),
            self.outcome.verdict()
        )
    }

    /// Local wall-clock time of the round as `HH:MM:SS`.
    pub fn time_label(&self) -> String {
        self.occurred_at
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string()
    }
}

/// Ordered, bounded history of completed rounds.
///
/// # Example
///
/// ```rust
/// use stonepaper::core::{ChoiceCatalog, Outcome, RoundHistory, RoundRecord};
/// use chrono::Utc;
///
/// let catalog = ChoiceCatalog::classic();
/// let stone = catalog.resolve("stone").unwrap();
/// let record = RoundRecord {
///     player_move: stone.clone(),
///     computer_move: stone,
///     outcome: Outcome::Draw,
///     occurred_at: Utc::now(),
/// };
///
/// let history = RoundHistory::with_capacity(2);
/// let history = history.record(record.clone());
/// let history = history.record(record.clone());
/// let history = history.record(record);
///
/// assert_eq!(history.len(), 2);
/// ```
///
/// Deserialization rejects a zero capacity or more records than the
/// capacity allows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRepr")]
pub struct RoundHistory {
    records: VecDeque<RoundRecord>,
    capacity: usize,
}

/// Unchecked wire form of [`RoundHistory`].
#[derive(Deserialize)]
struct HistoryRepr {
    records: VecDeque<RoundRecord>,
    capacity: usize,
}

impl TryFrom<HistoryRepr> for RoundHistory {
    type Error = String;

    fn try_from(repr: HistoryRepr) -> Result<Self, Self::Error> {
        if repr.capacity == 0 {
            return Err("history capacity must be at least 1".to_string());
        }
        if repr.records.len() > repr.capacity {
            return Err(format!(
                "history holds {} records but its capacity is {}",
                repr.records.len(),
                repr.capacity
            ));
        }
        Ok(Self {
            records: repr.records,
            capacity: repr.capacity,
        })
    }
}

impl Default for RoundHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundHistory {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history holding at most `capacity` rounds.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    /// Record a round, returning a new history.
    ///
    /// The existing history is left untouched. If the new history would
    /// exceed its capacity, rounds are evicted from the front.
    pub fn record(&self, record: RoundRecord) -> Self {
        let mut records = self.records.clone();
        records.push_back(record);
        while records.len() > self.capacity {
            records.pop_front();
        }
        Self {
            records,
            capacity: self.capacity,
        }
    }

    /// An empty history with the same capacity.
    pub fn cleared(&self) -> Self {
        Self::with_capacity(self.capacity)
    }

    /// Recorded rounds, oldest first.
    pub fn records(&self) -> vec_deque::Iter<'_, RoundRecord> {
        self.records.iter()
    }

    /// The most recent round.
    pub fn latest(&self) -> Option<&RoundRecord> {
        self.records.back()
    }

    /// Number of recorded rounds.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no rounds are recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of rounds kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(catalog: &ChoiceCatalog, computer: &str, second: u32) -> RoundRecord {
        RoundRecord {
            player_move: catalog.resolve("stone").unwrap(),
            computer_move: catalog.resolve(computer).unwrap(),
            outcome: Outcome::Draw,
            occurred_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, second).unwrap(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = RoundHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
        assert!(history.latest().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let catalog = ChoiceCatalog::classic();
        let history = RoundHistory::new();
        let new_history = history.record(record(&catalog, "paper", 0));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn oldest_rounds_are_evicted_first() {
        let catalog = ChoiceCatalog::classic();
        let mut history = RoundHistory::with_capacity(3);
        for second in 0..5 {
            history = history.record(record(&catalog, "paper", second));
        }

        let seconds: Vec<u32> = history
            .records()
            .map(|r| r.occurred_at.timestamp() as u32 % 60)
            .collect();
        assert_eq!(seconds, vec![2, 3, 4]);
        assert_eq!(history.latest().unwrap().occurred_at.timestamp() % 60, 4);
    }

    #[test]
    fn cleared_keeps_capacity() {
        let catalog = ChoiceCatalog::classic();
        let history = RoundHistory::with_capacity(7).record(record(&catalog, "stone", 0));
        let cleared = history.cleared();
        assert!(cleared.is_empty());
        assert_eq!(cleared.capacity(), 7);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        assert_eq!(RoundHistory::with_capacity(0).capacity(), 1);
    }

    #[test]
    fn summary_uses_placeholder_for_unknown_moves() {
        let catalog = ChoiceCatalog::classic();
        let mut rec = record(&catalog, "scissors", 0);
        rec.computer_move = Move::new("lizard");
        assert_eq!(rec.summary(&catalog), "✊ vs ❓ → Draw");
    }

    #[test]
    fn time_label_is_clock_formatted() {
        let catalog = ChoiceCatalog::classic();
        let label = record(&catalog, "paper", 9).time_label();
        assert_eq!(label.len(), 8);
        assert!(label.ends_with(":09"));
    }

    #[test]
    fn history_serializes_correctly() {
        let catalog = ChoiceCatalog::classic();
        let history = RoundHistory::new().record(record(&catalog, "paper", 0));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: RoundHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }

    #[test]
    fn deserialize_rejects_zero_capacity() {
        let result = serde_json::from_str::<RoundHistory>(r#"{"records":[],"capacity":0}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("capacity must be at least 1"), "{err}");
    }

    #[test]
    fn deserialize_rejects_overfull_history() {
        let catalog = ChoiceCatalog::classic();
        let full = RoundHistory::with_capacity(2)
            .record(record(&catalog, "paper", 0))
            .record(record(&catalog, "stone", 1));
        let json = serde_json::to_string(&full)
            .unwrap()
            .replace("\"capacity\":2", "\"capacity\":1");

        let err = serde_json::from_str::<RoundHistory>(&json).unwrap_err();
        assert!(err.to_string().contains("holds 2 records"), "{err}");
    }
}
