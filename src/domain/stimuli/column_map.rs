// ============================================================
// COLUMN MAP
// ============================================================
// Resolve required header columns by case-insensitive name

use crate::domain::error::SchemaError;

pub const TITLE_COLUMN: &str = "title";
pub const DIMENSION_COLUMN: &str = "dimension";
pub const CUE_COLUMN: &str = "cue_no";

/// Indices of the columns a headline row is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub title: usize,
    pub dimension: usize,
    pub cue: usize,
}

impl ColumnMap {
    /// Locate `title`, `dimension` and `cue_no` in the header row.
    ///
    /// Title and dimension are checked first so a sheet missing both kinds
    /// of column reports the required pair rather than the cue column.
    pub fn resolve(header: &[String]) -> Result<Self, SchemaError> {
        let title = find_column(header, TITLE_COLUMN);
        let dimension = find_column(header, DIMENSION_COLUMN);

        let (Some(title), Some(dimension)) = (title, dimension) else {
            return Err(SchemaError::MissingRequired);
        };

        let cue = find_column(header, CUE_COLUMN).ok_or(SchemaError::MissingCue)?;

        Ok(Self {
            title,
            dimension,
            cue,
        })
    }
}

/// First header cell equal to `name` after trimming, ignoring case
fn find_column(header: &[String], name: &str) -> Option<usize> {
    header
        .iter()
        .position(|cell| cell.trim().to_lowercase() == name)
}
