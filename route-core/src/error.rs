use std::fmt;

use thiserror::Error;

/// Which registry table a lookup missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Port,
    Vessel,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Port => f.write_str("port"),
            EntityKind::Vessel => f.write_str("vessel profile"),
        }
    }
}

/// Validation failures. All are raised before any route arithmetic runs.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("unknown {kind} '{id}'")]
    NotFound { kind: EntityKind, id: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unrecognized optimization objective '{0}'")]
    InvalidObjective(String),
    #[error("no route candidates to select from")]
    EmptyCandidates,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse registry document: {0}")]
    Json(#[from] serde_json::Error),
}

impl RouteError {
    pub(crate) fn port_not_found(id: &str) -> Self {
        RouteError::NotFound {
            kind: EntityKind::Port,
            id: id.to_string(),
        }
    }

    pub(crate) fn vessel_not_found(id: &str) -> Self {
        RouteError::NotFound {
            kind: EntityKind::Vessel,
            id: id.to_string(),
        }
    }
}
