//! Auctra Recommender - Configuration Module
//!
//! This module provides configuration types for the recommendation engine.
//! It includes settings for the hashing index, result limits, and the seed
//! policy used by the random hyperplane bank.
//!
//! Version: 0.2.0-alpha
//! License: Apache 2.0 / MIT

use serde::{Deserialize, Serialize};

/// Recommendation engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Whether the engine accepts requests at all
    pub enabled: bool,
    /// Number of LSH stages computed per signature
    pub hash_stages: usize,
    /// Fixed seed for the hyperplane bank; `None` draws a fresh seed per request
    pub hash_seed: Option<u64>,
    /// Upper bound on the number of returned recommendations
    pub max_recommendations: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hash_stages: 5,
            hash_seed: None,
            max_recommendations: 10,
        }
    }
}
