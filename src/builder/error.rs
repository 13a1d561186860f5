//! Build errors for sessions and their configuration.

use crate::core::CatalogError;
use thiserror::Error;

/// Errors that can occur when building a session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("Invalid catalog or rule: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid session config: {0}")]
    InvalidConfig(String),
}
