//! Auctra Recommender - Interaction Snapshot Module
//!
//! This module defines the request-scoped view of the platform's activity
//! data that the engine computes over: which users exist, which auction
//! items exist, and how each user interacted with them. The snapshot is
//! assembled by the surrounding service layer and is read-only here.
//!
//! Version: 0.2.0-alpha
//! License: Apache 2.0 / MIT

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use auctra_common::{AuctraError, Result};

/// A single user's recorded auction activity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserActivity {
    /// Items the user placed a bid on, in recording order
    #[serde(default)]
    pub bids: Vec<String>,
    /// The single item the user most recently viewed without bidding
    #[serde(default)]
    pub seen: Option<String>,
    /// Items the user listed for auction themselves
    #[serde(default)]
    pub listed: Vec<String>,
}

impl UserActivity {
    /// Number of recorded interactions (bids plus the seen marker)
    pub fn interaction_count(&self) -> usize {
        self.bids.len() + usize::from(self.seen.is_some())
    }

    /// Whether the user bid on or saw the given item
    pub fn has_interacted(&self, item_id: &str) -> bool {
        self.bids.iter().any(|b| b == item_id) || self.seen.as_deref() == Some(item_id)
    }

    /// Whether the user listed the given item themselves
    pub fn owns(&self, item_id: &str) -> bool {
        self.listed.iter().any(|l| l == item_id)
    }

    /// All interacted item ids, bids first, then the seen marker
    pub fn interactions(&self) -> impl Iterator<Item = &String> {
        self.bids.iter().chain(self.seen.iter())
    }
}

/// One user entry in the snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque user identifier
    pub id: String,
    /// The user's recorded activity
    #[serde(flatten)]
    pub activity: UserActivity,
}

/// Immutable, request-scoped snapshot of users, items and interactions
///
/// Ordering matters: `items` establishes the vector index for the request
/// and `users` establishes the stable order used for tie-breaking, so both
/// are kept as vectors rather than maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionSnapshot {
    /// Users known to the platform, in stable caller order
    pub users: Vec<UserRecord>,
    /// The full item universe, in stable caller order
    pub items: Vec<String>,
}

/// Aggregate counts over a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotStats {
    pub user_count: usize,
    pub item_count: usize,
    pub interaction_count: usize,
    /// Users with at least one recorded interaction
    pub active_user_count: usize,
}

impl InteractionSnapshot {
    /// Reject malformed snapshots before any computation runs
    ///
    /// Blank or duplicate identifiers indicate a broken export on the
    /// caller's side and are escalated as faults rather than folded into
    /// an empty recommendation.
    pub fn validate(&self) -> Result<()> {
        let mut seen_users = HashSet::new();
        for user in &self.users {
            if user.id.trim().is_empty() {
                return Err(AuctraError::Validation("blank user id in snapshot".to_string()));
            }
            if !seen_users.insert(user.id.as_str()) {
                return Err(AuctraError::Validation(format!(
                    "duplicate user id in snapshot: {}",
                    user.id
                )));
            }
        }

        let mut seen_items = HashSet::new();
        for item in &self.items {
            if item.trim().is_empty() {
                return Err(AuctraError::Validation("blank item id in snapshot".to_string()));
            }
            if !seen_items.insert(item.as_str()) {
                return Err(AuctraError::Validation(format!(
                    "duplicate item id in snapshot: {item}"
                )));
            }
        }

        Ok(())
    }

    /// Look up a user record by id
    pub fn user(&self, user_id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Aggregate counts, used by diagnostics and the CLI
    pub fn stats(&self) -> SnapshotStats {
        let interaction_count = self
            .users
            .iter()
            .map(|u| u.activity.interaction_count())
            .sum();
        let active_user_count = self
            .users
            .iter()
            .filter(|u| u.activity.interaction_count() > 0)
            .count();

        SnapshotStats {
            user_count: self.users.len(),
            item_count: self.items.len(),
            interaction_count,
            active_user_count,
        }
    }
}
