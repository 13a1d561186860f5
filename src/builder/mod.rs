//! Builder API for ergonomic session construction.
//!
//! [`SessionBuilder`] assembles a [`SessionController`] from a catalog, an
//! outcome rule, a configuration and the injected move source and clock.
//! Anything left unset falls back to the classic game with a uniform random
//! opponent and wall-clock timestamps.

pub mod config;
pub mod error;
pub mod macros;

pub use config::SessionConfig;
pub use error::BuildError;

use crate::core::{CatalogError, ChoiceCatalog, OutcomeRule};
use crate::effects::{Clock, MoveSource, RandomMoveSource, SessionController, SystemClock};

/// Fluent builder for [`SessionController`].
///
/// # Example
///
/// ```
/// use stonepaper::builder::SessionBuilder;
/// use stonepaper::core::{ChoiceCatalog, Outcome};
/// use stonepaper::effects::ScriptedMoves;
///
/// let catalog = ChoiceCatalog::classic();
/// let moves = ScriptedMoves::from_ids(&catalog, ["scissors"]).unwrap();
///
/// let mut session = SessionBuilder::new()
///     .catalog(catalog)
///     .move_source(moves)
///     .history_capacity(3)
///     .build()
///     .unwrap();
///
/// let report = session.play("stone").unwrap();
/// assert_eq!(report.outcome, Outcome::PlayerWin);
/// ```
#[derive(Default)]
pub struct SessionBuilder {
    catalog: Option<ChoiceCatalog>,
    rule: Option<OutcomeRule>,
    config: SessionConfig,
    moves: Option<Box<dyn MoveSource>>,
    clock: Option<Box<dyn Clock>>,
}

impl SessionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the choice catalog. Defaults to [`ChoiceCatalog::classic`].
    pub fn catalog(mut self, catalog: ChoiceCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set an explicit outcome rule. Defaults to the cyclic rule of the catalog.
    pub fn rule(mut self, rule: OutcomeRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Set the source of computer moves.
    pub fn move_source(mut self, source: impl MoveSource + 'static) -> Self {
        self.moves = Some(Box::new(source));
        self
    }

    /// Set the clock used for round timestamps.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Build the session.
    ///
    /// Fails if the configuration is invalid, if no rule was given and the
    /// catalog has an even size, or if the given rule leaves a pair of
    /// catalog moves without a winner.
    pub fn build(self) -> Result<SessionController, BuildError> {
        self.config.validate()?;

        let catalog = self.catalog.unwrap_or_default();
        let rule = match self.rule {
            Some(rule) => {
                check_rule_covers(&catalog, &rule)?;
                rule
            }
            None => OutcomeRule::cyclic(&catalog)?,
        };

        let moves = self
            .moves
            .unwrap_or_else(|| Box::new(RandomMoveSource::new()));
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));

        Ok(SessionController::from_parts(
            catalog,
            rule,
            self.config.history_capacity,
            moves,
            clock,
        ))
    }
}

fn check_rule_covers(catalog: &ChoiceCatalog, rule: &OutcomeRule) -> Result<(), CatalogError> {
    let moves: Vec<_> = catalog.moves().collect();
    for (i, a) in moves.iter().enumerate() {
        for b in &moves[i + 1..] {
            if rule.beats(a, b) == rule.beats(b, a) {
                return Err(CatalogError::Undecided {
                    a: a.id().to_string(),
                    b: b.id().to_string(),
                });
            }
        }
    }
    Ok(())
}
