//! Auctra Recommender - Interaction Vectorizer Module
//!
//! Turns per-user interaction records into dense numeric vectors over the
//! snapshot's fixed item index. A bid contributes `1.0`, a seen-without-bid
//! marker contributes `0.5`, everything else is `0.0`. Users without any
//! recorded interaction do not participate in the vector space at all.
//!
//! Version: 0.2.0-alpha
//! License: Apache 2.0 / MIT

use std::collections::HashMap;

use crate::snapshot::{InteractionSnapshot, UserRecord};

/// Weight of a bid interaction
pub const BID_WEIGHT: f64 = 1.0;
/// Weight of a seen-without-bid interaction
pub const SEEN_WEIGHT: f64 = 0.5;

/// The per-request vector space: one dense vector per eligible user
///
/// `positions[i]` indexes into `snapshot.users`, so the space preserves the
/// snapshot's stable user order. Vectors and positions are parallel.
pub struct VectorSpace {
    /// Indices into the snapshot's user list, restricted to active users
    pub positions: Vec<usize>,
    /// One interaction vector per eligible user, item-index aligned
    pub vectors: Vec<Vec<f64>>,
    index: HashMap<String, usize>,
}

impl VectorSpace {
    /// Position of a user within the space, if they are eligible
    pub fn position_of(&self, user_id: &str) -> Option<usize> {
        self.index.get(user_id).copied()
    }

    /// Number of eligible users
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Build the vector space for one recommendation request
///
/// Pure function of the snapshot: callers must have checked that the item
/// universe is non-empty before vectorizing.
pub fn build(snapshot: &InteractionSnapshot) -> VectorSpace {
    let item_index: HashMap<&str, usize> = snapshot
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| (item.as_str(), idx))
        .collect();

    let mut positions = Vec::new();
    let mut vectors = Vec::new();
    let mut index = HashMap::new();

    for (user_pos, user) in snapshot.users.iter().enumerate() {
        if user.activity.interaction_count() == 0 {
            continue;
        }
        index.insert(user.id.clone(), vectors.len());
        positions.push(user_pos);
        vectors.push(vectorize(user, &item_index, snapshot.items.len()));
    }

    VectorSpace {
        positions,
        vectors,
        index,
    }
}

/// Dense interaction vector for one user over the shared item index
///
/// Bids dominate: a seen marker on an item the user also bid on never
/// downgrades the entry.
fn vectorize(user: &UserRecord, item_index: &HashMap<&str, usize>, dimensions: usize) -> Vec<f64> {
    let mut vector = vec![0.0; dimensions];

    for bid in &user.activity.bids {
        if let Some(&idx) = item_index.get(bid.as_str()) {
            vector[idx] = BID_WEIGHT;
        }
    }

    if let Some(seen) = &user.activity.seen {
        if let Some(&idx) = item_index.get(seen.as_str()) {
            if vector[idx] == 0.0 {
                vector[idx] = SEEN_WEIGHT;
            }
        }
    }

    vector
}

/// Arithmetic mean of a vector's entries
///
/// Callers guard the empty-universe case, so `vector` is never empty here.
pub fn mean(vector: &[f64]) -> f64 {
    vector.iter().sum::<f64>() / vector.len() as f64
}
