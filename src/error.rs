//! Error types
//!
//! The engine is closed and local, so the taxonomy is small. Stale events are
//! not errors and never appear here.

use thiserror::Error;

/// Violations of the object lifecycle invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("object id {0} is already active")]
    DuplicateId(u32),
}

/// Failures exporting view models to the render layer
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("failed to serialize view: {0}")]
    Serialize(#[from] serde_json::Error),
}
