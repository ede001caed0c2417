// ============================================================
// SELECTION TYPES
// ============================================================
// Rows grouped for sampling and the sampled result of one load cycle

use serde::{Deserialize, Serialize};

use super::{Dimension, HeadlineRow};

/// A headline picked for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampledHeadline {
    pub title: String,
    pub cue_id: String,
    pub dimension: Dimension,
}

/// Rows split by sampling dimension, input order kept within each group.
/// Rows with an unknown dimension label are left out.
#[derive(Debug, Clone, Default)]
pub struct Partitions {
    neutral: Vec<SampledHeadline>,
    credibility: Vec<SampledHeadline>,
    engagement: Vec<SampledHeadline>,
}

impl Partitions {
    pub fn from_rows(rows: &[HeadlineRow]) -> Self {
        let mut partitions = Self::default();
        for row in rows {
            let Some(dimension) = row.sampling_dimension() else {
                continue;
            };
            partitions.group_mut(dimension).push(SampledHeadline {
                title: row.title.clone(),
                cue_id: row.cue_id.clone(),
                dimension,
            });
        }
        partitions
    }

    pub fn group(&self, dimension: Dimension) -> &[SampledHeadline] {
        match dimension {
            Dimension::Neutral => &self.neutral,
            Dimension::Credibility => &self.credibility,
            Dimension::Engagement => &self.engagement,
        }
    }

    fn group_mut(&mut self, dimension: Dimension) -> &mut Vec<SampledHeadline> {
        match dimension {
            Dimension::Neutral => &mut self.neutral,
            Dimension::Credibility => &mut self.credibility,
            Dimension::Engagement => &mut self.engagement,
        }
    }

    pub fn counts(&self) -> DimensionCounts {
        DimensionCounts {
            neutral: self.neutral.len(),
            credibility: self.credibility.len(),
            engagement: self.engagement.len(),
        }
    }
}

/// Rows available per dimension in the fetched sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionCounts {
    pub neutral: usize,
    pub credibility: usize,
    pub engagement: usize,
}

impl DimensionCounts {
    pub fn get(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Neutral => self.neutral,
            Dimension::Credibility => self.credibility,
            Dimension::Engagement => self.engagement,
        }
    }
}
