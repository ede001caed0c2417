// ============================================================
// STIMULI DOMAIN LAYER
// ============================================================
// Headline rows, dimensions and header resolution
// No I/O, no async

mod column_map;
mod dimension;
mod headline_row;
mod selection;

pub use column_map::ColumnMap;
pub use dimension::Dimension;
pub use headline_row::{normalize_dimension, normalize_rows, HeadlineRow};
pub use selection::{DimensionCounts, Partitions, SampledHeadline};
