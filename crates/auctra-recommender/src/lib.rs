//! Auctra Recommender
//!
//! This crate provides the recommendation engine for the Auctra auction
//! platform. It finds behaviorally similar users with a seeded
//! random-hyperplane hash (LSH), weights them by cosine similarity, and
//! propagates their interactions into a ranked list of auction items.
//!
//! The engine is pure, synchronous computation over an immutable snapshot
//! supplied by the surrounding service layer; it persists nothing and
//! caches nothing across requests.
//!
//! Version: 0.2.0-alpha
//! License: Apache 2.0 / MIT

pub mod config;
pub mod engine;
pub mod lsh;
pub mod snapshot;
pub mod vectorizer;

/// Re-exports commonly used types
pub mod prelude {
    pub use super::config::RecommenderConfig;
    pub use super::engine::{
        RecommendOutcome, RecommendRequest, RecommendResponse, RecommendationEngine,
    };
    pub use super::snapshot::{InteractionSnapshot, SnapshotStats, UserActivity, UserRecord};
}

pub use config::RecommenderConfig;
pub use engine::{RecommendOutcome, RecommendRequest, RecommendResponse, RecommendationEngine};
pub use snapshot::{InteractionSnapshot, UserActivity, UserRecord};
