//! Error and outcome types shared across the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why an episode ended. Deaths are game outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    Pipe,
    Ground,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipe => write!(f, "bird died: pipe collision"),
            Self::Ground => write!(f, "bird died: ground collision"),
        }
    }
}

/// Failures surfaced by construction, configuration loading and misuse of a
/// finished episode.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
    #[error("invalid sprite: {reason}")]
    InvalidSprite { reason: String },
    #[error("episode already over with score {score} ({cause})")]
    EpisodeOver { score: u32, cause: DeathCause },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
}

impl GameError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn sprite(reason: impl Into<String>) -> Self {
        Self::InvalidSprite {
            reason: reason.into(),
        }
    }
}
