//! Auctra Recommender - Recommendation Engine Module
//!
//! Core of the recommendation subsystem: given a request-scoped interaction
//! snapshot, the engine vectorizes the active users, buckets them with a
//! seeded hyperplane hash, weights the active user's bucket-mates by cosine
//! similarity, scores the items those neighbors touched, and returns the
//! deduplicated ranking. Every structure here lives for one request only;
//! the engine holds no cross-request state.
//!
//! Version: 0.2.0-alpha
//! License: Apache 2.0 / MIT

use std::collections::HashMap;
use std::collections::HashSet;
use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use auctra_common::{AuctraError, Result};

use crate::config::RecommenderConfig;
use crate::lsh::{bucket_count_for, HyperplaneBank};
use crate::snapshot::InteractionSnapshot;
use crate::vectorizer::{self, mean};

/// Recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// The user recommendations are computed for
    pub user_id: String,
    /// Per-request override of the configured result cap
    pub max_results: Option<usize>,
}

/// How a recommendation request concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendOutcome {
    /// Candidates were found and ranked
    Ranked,
    /// The active user has no interactions or is unknown to the snapshot
    NoSignal,
    /// The item universe is empty
    EmptyUniverse,
    /// Nobody else shares the active user's bucket
    EmptyNeighborhood,
    /// All neighbor similarities were zero, so no weighting was possible
    DegenerateWeighting,
}

/// Recommendation response
///
/// `items` is ordered most-recommended first. Predicted ratings are an
/// internal detail and are not exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub items: Vec<String>,
    pub outcome: RecommendOutcome,
    pub neighborhood_size: usize,
    /// Distinct candidates considered before the result cap
    pub candidate_count: usize,
    pub processing_time_ms: u64,
}

impl RecommendResponse {
    fn empty(outcome: RecommendOutcome, neighborhood_size: usize, start: Instant) -> Self {
        Self {
            items: Vec::new(),
            outcome,
            neighborhood_size,
            candidate_count: 0,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// An item reachable through the neighborhood, with its predicted rating
#[derive(Debug, Clone)]
struct ScoredCandidate {
    item_id: String,
    score: f64,
}

/// Recommendation engine service
pub struct RecommendationEngine {
    config: RecommenderConfig,
}

impl RecommendationEngine {
    /// Create a new recommendation engine
    pub fn new(config: RecommenderConfig) -> Self {
        Self { config }
    }

    /// Compute recommendations for one user over one snapshot
    ///
    /// All expected dead ends (empty universe, idle user, lonely bucket,
    /// degenerate weighting) come back as an empty ranking with the outcome
    /// label set; only a disabled engine or a malformed snapshot is a fault.
    #[instrument(level = "debug", skip(self, snapshot))]
    pub fn recommend(
        &self,
        request: &RecommendRequest,
        snapshot: &InteractionSnapshot,
    ) -> Result<RecommendResponse> {
        let start = Instant::now();
        debug!("🔧 Generating recommendations for user: {}", request.user_id);

        if !self.config.enabled {
            return Err(AuctraError::BadRequest(
                "Recommendation engine is not enabled".to_string(),
            ));
        }
        snapshot.validate()?;

        if snapshot.items.is_empty() {
            debug!("📭 Item universe is empty, nothing to recommend");
            return Ok(RecommendResponse::empty(
                RecommendOutcome::EmptyUniverse,
                0,
                start,
            ));
        }

        // Vector space over users with at least one interaction
        let space = vectorizer::build(snapshot);
        let active = match space.position_of(&request.user_id) {
            Some(position) => position,
            None => {
                debug!("📭 User {} has no recorded interactions", request.user_id);
                return Ok(RecommendResponse::empty(RecommendOutcome::NoSignal, 0, start));
            }
        };

        // Seeded hyperplane bank, rebuilt per request so every vector is
        // hashed by the same projections
        let buckets = bucket_count_for(space.len());
        let seed = self
            .config
            .hash_seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        // At least one stage: stage 0 is what forms the neighborhood
        let stages = self.config.hash_stages.max(1);
        let bank = HyperplaneBank::new(stages, buckets, snapshot.items.len(), seed);
        debug!(
            "🪣 Hashing {} users into {} buckets across {} stages (seed {})",
            space.len(),
            bank.bucket_count(),
            bank.stage_count(),
            seed
        );

        // Hash everyone; stage 0 forms the buckets. The active user's bucket
        // and baseline rating are recorded along the way.
        let mut stage0_buckets: HashMap<u32, Vec<usize>> = HashMap::new();
        let mut active_bucket = 0;
        let mut baseline = 0.0;
        for (position, vector) in space.vectors.iter().enumerate() {
            let signature = bank.signature(vector);
            if position == active {
                active_bucket = signature[0];
                baseline = mean(vector);
            }
            stage0_buckets.entry(signature[0]).or_default().push(position);
        }

        // Neighborhood: bucket-mates minus the active user
        let neighborhood: Vec<usize> = stage0_buckets
            .get(&active_bucket)
            .map(|members| members.iter().copied().filter(|&p| p != active).collect())
            .unwrap_or_default();
        if neighborhood.is_empty() {
            debug!("📭 User {} has no bucket-mates", request.user_id);
            return Ok(RecommendResponse::empty(
                RecommendOutcome::EmptyNeighborhood,
                0,
                start,
            ));
        }

        // Cosine weights over the neighborhood
        let similarities: Vec<f64> = neighborhood
            .iter()
            .map(|&n| cosine_similarity(&space.vectors[active], &space.vectors[n]))
            .collect();
        let similarity_sum: f64 = similarities.iter().sum();
        if similarity_sum <= 0.0 {
            debug!("📭 All neighbor similarities are zero, no usable signal");
            return Ok(RecommendResponse::empty(
                RecommendOutcome::DegenerateWeighting,
                neighborhood.len(),
                start,
            ));
        }
        let lambda = 1.0 / similarity_sum;

        // The influence term sums over the whole neighborhood, not per item:
        // it models how scarce activity is around the active user, while
        // candidacy is still gated on a neighbor having touched the item.
        let influence: f64 = lambda
            * neighborhood
                .iter()
                .zip(similarities.iter())
                .map(|(&n, sim)| sim * (1.0 - mean(&space.vectors[n])))
                .sum::<f64>();
        let predicted = baseline + influence;

        // Candidate items: everything the neighborhood touched that the
        // active user neither interacted with nor listed themselves.
        // Duplicates keep the highest score seen.
        let universe: HashSet<&str> = snapshot.items.iter().map(|i| i.as_str()).collect();
        let active_activity = &snapshot.users[space.positions[active]].activity;
        let mut candidates: Vec<ScoredCandidate> = Vec::new();
        let mut by_item: HashMap<String, usize> = HashMap::new();
        for &n in &neighborhood {
            let neighbor = &snapshot.users[space.positions[n]];
            for item_id in neighbor.activity.interactions() {
                if !universe.contains(item_id.as_str()) {
                    continue;
                }
                if active_activity.has_interacted(item_id) || active_activity.owns(item_id) {
                    continue;
                }
                match by_item.get(item_id) {
                    Some(&idx) => {
                        if predicted > candidates[idx].score {
                            candidates[idx].score = predicted;
                        }
                    }
                    None => {
                        by_item.insert(item_id.clone(), candidates.len());
                        candidates.push(ScoredCandidate {
                            item_id: item_id.clone(),
                            score: predicted,
                        });
                    }
                }
            }
        }
        let candidate_count = candidates.len();

        // Rank: stable sort, descending score; ties keep snapshot order
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        let cap = request.max_results.unwrap_or(self.config.max_recommendations);
        candidates.truncate(cap);

        let response = RecommendResponse {
            items: candidates.into_iter().map(|c| c.item_id).collect(),
            outcome: RecommendOutcome::Ranked,
            neighborhood_size: neighborhood.len(),
            candidate_count,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "✅ Ranked {} of {} candidates for {} in {:?}",
            response.items.len(),
            candidate_count,
            request.user_id,
            start.elapsed()
        );
        Ok(response)
    }
}

/// Cosine similarity with a zero-magnitude guard
///
/// A zero vector has no direction, so its similarity to anything is 0
/// rather than a division-by-zero fault.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}
