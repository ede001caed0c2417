// ============================================================
// STRATIFIED SAMPLER
// ============================================================
// Fixed quota per dimension, drawn without replacement, then mixed

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::error::{LoaderError, Result};
use crate::domain::stimuli::{Dimension, Partitions, SampledHeadline};

/// Unbiased in-place Fisher–Yates shuffle
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Uniform sample of `min(n, len)` items without replacement
pub fn sample_without_replacement<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    n: usize,
    rng: &mut R,
) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place(&mut copy, rng);
    copy.truncate(n.min(items.len()));
    copy
}

pub struct StratifiedSampler {
    per_dimension: usize,
}

impl StratifiedSampler {
    pub fn new(per_dimension: usize) -> Self {
        Self { per_dimension }
    }

    /// Every partition must hold at least the quota. The first short one,
    /// in neutral, credibility, engagement order, is reported.
    pub fn check(&self, partitions: &Partitions) -> Result<()> {
        for dimension in Dimension::ALL {
            let have = partitions.group(dimension).len();
            if have < self.per_dimension {
                return Err(LoaderError::InsufficientData {
                    dimension,
                    have,
                    need: self.per_dimension,
                });
            }
        }
        Ok(())
    }

    /// Draw the quota from each dimension and shuffle the combined set so
    /// presentation order says nothing about dimension.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        partitions: &Partitions,
        rng: &mut R,
    ) -> Result<Vec<SampledHeadline>> {
        self.check(partitions)?;

        let mut picked = Vec::with_capacity(self.per_dimension * Dimension::ALL.len());
        for dimension in Dimension::ALL {
            picked.extend(sample_without_replacement(
                partitions.group(dimension),
                self.per_dimension,
                rng,
            ));
        }

        shuffle_in_place(&mut picked, rng);
        Ok(picked)
    }
}
