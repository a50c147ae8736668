//! Auctra Recommender - Hyperplane Hash Module
//!
//! Locality-sensitive hashing over random hyperplanes (signed random
//! projection, SuperBit-style). The bank is built once per recommendation
//! request with an explicit seed, hashes every user vector through `S`
//! stages, and reduces each stage's sign bits to one of `B` buckets.
//! Nearby vectors collide with higher probability, which is what makes the
//! neighborhood lookup sub-linear in the user population.
//!
//! Version: 0.2.0-alpha
//! License: Apache 2.0 / MIT

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::warn;

/// One bucket index per stage
pub type HashSignature = Vec<u32>;

/// A seeded bank of random hyperplanes, organized in stages
///
/// Never ambient state: the bank is an explicit value constructed per
/// request so tests can pin the seed and assert exact bucket membership.
pub struct HyperplaneBank {
    /// `stages[s][b]` is hyperplane `b` of stage `s`
    stages: Vec<Vec<Vec<f64>>>,
    buckets: u32,
    dimensions: usize,
}

impl HyperplaneBank {
    /// Build a bank of `stages` hyperplane banks partitioning the space
    /// into `buckets` buckets each
    pub fn new(stages: usize, buckets: u32, dimensions: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bits = bits_per_stage(buckets);

        let stages: Vec<Vec<Vec<f64>>> = (0..stages)
            .map(|_| {
                (0..bits)
                    .map(|_| (0..dimensions).map(|_| rng.gen_range(-1.0..1.0)).collect())
                    .collect()
            })
            .collect();

        Self {
            stages,
            buckets,
            dimensions,
        }
    }

    /// Number of stages in the bank
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Number of buckets each stage partitions the space into
    pub fn bucket_count(&self) -> u32 {
        self.buckets
    }

    /// Compute the multi-stage signature for a vector
    ///
    /// Each stage packs the signs of its hyperplane projections into an
    /// integer and reduces it modulo the bucket count.
    pub fn signature(&self, vector: &[f64]) -> HashSignature {
        if vector.len() != self.dimensions {
            warn!(
                "LSH dimension mismatch: expected {}, got {} - returning zero signature",
                self.dimensions,
                vector.len()
            );
            return vec![0; self.stages.len()];
        }

        self.stages
            .iter()
            .map(|hyperplanes| {
                let mut packed: u32 = 0;
                for (bit, hyperplane) in hyperplanes.iter().enumerate() {
                    let dot: f64 = vector
                        .iter()
                        .zip(hyperplane.iter())
                        .map(|(v, h)| v * h)
                        .sum();
                    if dot > 0.0 {
                        packed |= 1 << bit;
                    }
                }
                packed % self.buckets
            })
            .collect()
    }
}

/// Buckets chosen as the integer square root of the eligible-user count,
/// with a floor of one so a tiny population still forms a bucket
pub fn bucket_count_for(user_count: usize) -> u32 {
    ((user_count as f64).sqrt().floor() as u32).max(1)
}

/// Hyperplanes needed to address `buckets` buckets: ceil(log2), minimum one
fn bits_per_stage(buckets: u32) -> u32 {
    if buckets <= 1 {
        return 1;
    }
    u32::BITS - (buckets - 1).leading_zeros()
}
