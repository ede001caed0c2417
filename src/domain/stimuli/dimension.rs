// ============================================================
// DIMENSION ENUM
// ============================================================
// Experimental category a headline is sampled under

use serde::{Deserialize, Serialize};

/// Experimental dimension of a headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Neutral,
    Credibility,
    Engagement,
}

impl Dimension {
    /// Sampling order. Partitions are checked and concatenated in this order.
    pub const ALL: [Dimension; 3] = [
        Dimension::Neutral,
        Dimension::Credibility,
        Dimension::Engagement,
    ];

    /// Canonical lowercase label, as written to embedded data
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Neutral => "neutral",
            Dimension::Credibility => "credibility",
            Dimension::Engagement => "engagement",
        }
    }

    pub fn upper_label(&self) -> &'static str {
        match self {
            Dimension::Neutral => "NEUTRAL",
            Dimension::Credibility => "CREDIBILITY",
            Dimension::Engagement => "ENGAGEMENT",
        }
    }

    /// Match an already-normalized label. Unknown labels are not sampled.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
