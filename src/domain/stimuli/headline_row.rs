// ============================================================
// HEADLINE ROW
// ============================================================
// A cleaned data row: title, normalized dimension label, cue id

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{ColumnMap, Dimension};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A headline that survived normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineRow {
    /// Title with whitespace runs collapsed
    pub title: String,

    /// Normalized dimension label. May be a value outside the three
    /// sampling dimensions; such rows are never sampled.
    pub dimension: String,

    /// Cue identifier, passed through as-is apart from trimming
    pub cue_id: String,
}

impl HeadlineRow {
    /// Build a row from raw CSV fields. Returns `None` when the title or
    /// the dimension ends up empty.
    pub fn normalize(fields: &[String], columns: &ColumnMap) -> Option<Self> {
        let field = |idx: usize| fields.get(idx).map(String::as_str).unwrap_or("");

        let title = clean_title(field(columns.title));
        let dimension = normalize_dimension(field(columns.dimension));
        let cue_id = field(columns.cue).trim().to_string();

        if title.is_empty() || dimension.is_empty() {
            return None;
        }

        Some(Self {
            title,
            dimension,
            cue_id,
        })
    }

    /// Sampling dimension, if the label is one of the three known ones
    pub fn sampling_dimension(&self) -> Option<Dimension> {
        Dimension::from_label(&self.dimension)
    }
}

/// Normalize every data row of a parsed table. The header row is skipped.
pub fn normalize_rows(table: &[Vec<String>], columns: &ColumnMap) -> Vec<HeadlineRow> {
    table
        .iter()
        .skip(1)
        .filter_map(|fields| HeadlineRow::normalize(fields, columns))
        .collect()
}

/// Lowercase and trim, then fold the adjective spellings onto the noun
/// labels. Anything else passes through.
pub fn normalize_dimension(raw: &str) -> String {
    let dim = raw.trim().to_lowercase();
    match dim.as_str() {
        "credible" => "credibility".to_string(),
        "engaging" => "engagement".to_string(),
        _ => dim,
    }
}

fn clean_title(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw.trim(), " ").trim().to_string()
}
