//! Injectable sources of randomness and time.
//!
//! The controller never calls a random number generator or the system
//! clock directly. It asks a [`MoveSource`] for the computer's move and a
//! [`Clock`] for round timestamps, so both can be replaced with
//! deterministic versions.

use crate::core::{ChoiceCatalog, GameError};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the computer's move for each round.
///
/// A source picks a position among `len` catalog entries. The controller
/// reduces the pick modulo `len`, so every pick names a catalog member.
pub trait MoveSource: Send {
    /// Pick a position in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<F> MoveSource for F
where
    F: FnMut(usize) -> usize + Send,
{
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Draws each catalog member with equal probability.
#[derive(Debug, Clone)]
pub struct RandomMoveSource<R = StdRng> {
    rng: R,
}

impl RandomMoveSource<StdRng> {
    /// Source seeded from the operating system's entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomMoveSource<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> RandomMoveSource<R> {
    /// Source driven by any caller-supplied generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> MoveSource for RandomMoveSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of catalog positions, wrapping around at the end.
///
/// An empty script always picks the first catalog member.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedMoves {
    /// Script the given catalog positions in order.
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Resolve `ids` against `catalog` and script their positions in order.
    pub fn from_ids<'a, I>(catalog: &ChoiceCatalog, ids: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let script = ids
            .into_iter()
            .map(|id| {
                catalog
                    .resolve(id)
                    .and_then(|mv| catalog.position(&mv))
                    .ok_or_else(|| GameError::InvalidMove { id: id.to_string() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(script))
    }
}

impl MoveSource for ScriptedMoves {
    fn pick(&mut self, _len: usize) -> usize {
        let next = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        next
    }
}

/// Supplies timestamps for round records and snapshots.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
