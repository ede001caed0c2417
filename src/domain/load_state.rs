use serde::{Deserialize, Serialize};

/// Phase of a single load cycle.
///
/// Success runs `Idle -> Fetching -> Parsing -> Sampling -> Writing -> Advancing`.
/// Any of `Fetching`, `Parsing` or `Sampling` may drop into `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Idle,
    Fetching,
    Parsing,
    Sampling,
    Writing,
    Advancing,
    Failed,
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Advancing | LoadState::Failed)
    }

    pub fn can_transition_to(&self, next: LoadState) -> bool {
        use LoadState::*;
        matches!(
            (self, next),
            (Idle, Fetching)
                | (Fetching, Parsing)
                | (Parsing, Sampling)
                | (Sampling, Writing)
                | (Writing, Advancing)
                | (Fetching, Failed)
                | (Parsing, Failed)
                | (Sampling, Failed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Fetching => "fetching",
            LoadState::Parsing => "parsing",
            LoadState::Sampling => "sampling",
            LoadState::Writing => "writing",
            LoadState::Advancing => "advancing",
            LoadState::Failed => "failed",
        }
    }
}

impl Default for LoadState {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
