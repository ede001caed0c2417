use serde::Serialize;
use thiserror::Error;

use crate::domain::load_state::LoadState;
use crate::domain::stimuli::Dimension;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub enum FetchError {
    #[error("CSV fetch failed (HTTP {0})")]
    Status(u16),
    #[error("CSV fetch failed: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub enum SchemaError {
    #[error("Missing required columns: title, dimension")]
    MissingRequired,
    #[error("Missing required column: cue_no")]
    MissingCue,
}

/// Every failure of a load cycle. All of them are terminal for the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub enum LoaderError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("CSV has no data rows.")]
    EmptyData,
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("Not enough {} rows (need >= {need}, have {have})", .dimension.upper_label())]
    InsufficientData {
        dimension: Dimension,
        have: usize,
        need: usize,
    },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid load transition: {from} -> {to}")]
    InvalidTransition { from: LoadState, to: LoadState },
}

impl From<figment::Error> for LoaderError {
    fn from(err: figment::Error) -> Self {
        LoaderError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
