//! End-to-end scenarios for the recommendation engine
//!
//! These tests drive the engine through whole snapshots and assert the
//! externally visible contract: which items come back, in what order, and
//! which dead ends produce an empty ranking instead of a fault.

use auctra_recommender::prelude::*;

fn engine_with_seed(seed: u64) -> RecommendationEngine {
    RecommendationEngine::new(RecommenderConfig {
        hash_seed: Some(seed),
        ..RecommenderConfig::default()
    })
}

fn user(id: &str, bids: &[&str]) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        activity: UserActivity {
            bids: bids.iter().map(|s| s.to_string()).collect(),
            seen: None,
            listed: Vec::new(),
        },
    }
}

fn items(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn request(user_id: &str) -> RecommendRequest {
    RecommendRequest {
        user_id: user_id.to_string(),
        max_results: None,
    }
}

// Scenario A: two users bucketed together, one shared bid, one new item.
#[test]
fn recommends_the_neighbors_extra_item() {
    let engine = engine_with_seed(42);
    let snapshot = InteractionSnapshot {
        users: vec![user("a", &["item1"]), user("b", &["item1", "item2"])],
        items: items(&["item1", "item2", "item3"]),
    };

    // With two eligible users the hash collapses to a single bucket, so the
    // neighborhood is guaranteed regardless of the seed.
    let response = engine.recommend(&request("a"), &snapshot).unwrap();
    assert_eq!(response.outcome, RecommendOutcome::Ranked);
    assert_eq!(response.items, vec!["item2".to_string()]);
}

// Scenario B: empty item universe short-circuits before vectorization.
#[test]
fn empty_universe_yields_empty_result() {
    let engine = engine_with_seed(42);
    let snapshot = InteractionSnapshot {
        users: vec![user("a", &["item1"]), user("b", &["item2"])],
        items: Vec::new(),
    };

    let response = engine.recommend(&request("a"), &snapshot).unwrap();
    assert_eq!(response.outcome, RecommendOutcome::EmptyUniverse);
    assert!(response.items.is_empty());
}

// Scenario C: an active user without interactions never enters the space.
#[test]
fn idle_active_user_yields_empty_result() {
    let engine = engine_with_seed(42);
    let snapshot = InteractionSnapshot {
        users: vec![user("a", &[]), user("b", &["item1"])],
        items: items(&["item1"]),
    };

    let response = engine.recommend(&request("a"), &snapshot).unwrap();
    assert_eq!(response.outcome, RecommendOutcome::NoSignal);
    assert!(response.items.is_empty());
}

// A user missing from the snapshot entirely behaves like an idle one.
#[test]
fn unknown_active_user_yields_empty_result() {
    let engine = engine_with_seed(42);
    let snapshot = InteractionSnapshot {
        users: vec![user("b", &["item1"])],
        items: items(&["item1"]),
    };

    let response = engine.recommend(&request("ghost"), &snapshot).unwrap();
    assert_eq!(response.outcome, RecommendOutcome::NoSignal);
}

// Scenario D: the active user alone in their bucket.
#[test]
fn lonely_bucket_yields_empty_result() {
    let engine = engine_with_seed(42);
    let snapshot = InteractionSnapshot {
        users: vec![user("a", &["item1"])],
        items: items(&["item1", "item2"]),
    };

    let response = engine.recommend(&request("a"), &snapshot).unwrap();
    assert_eq!(response.outcome, RecommendOutcome::EmptyNeighborhood);
    assert!(response.items.is_empty());
}

// Scenario E: two neighbors touching the same unseen item.
#[test]
fn shared_candidate_appears_exactly_once() {
    let engine = engine_with_seed(42);
    let snapshot = InteractionSnapshot {
        users: vec![
            user("a", &["item1"]),
            user("b", &["item1", "item9"]),
            user("c", &["item1", "item9"]),
        ],
        items: items(&["item1", "item9"]),
    };

    // Three eligible users still collapse to one bucket (isqrt(3) = 1).
    let response = engine.recommend(&request("a"), &snapshot).unwrap();
    assert_eq!(response.outcome, RecommendOutcome::Ranked);
    assert_eq!(
        response
            .items
            .iter()
            .filter(|i| i.as_str() == "item9")
            .count(),
        1
    );
    assert_eq!(response.items, vec!["item9".to_string()]);
}

// Disjoint bids give an all-zero similarity sum: lambda is undefined and
// the engine must refuse to guess rather than divide by zero.
#[test]
fn zero_similarity_sum_is_degenerate_not_a_fault() {
    let engine = engine_with_seed(42);
    let snapshot = InteractionSnapshot {
        users: vec![user("a", &["item1"]), user("b", &["item2"])],
        items: items(&["item1", "item2"]),
    };

    let response = engine.recommend(&request("a"), &snapshot).unwrap();
    assert_eq!(response.outcome, RecommendOutcome::DegenerateWeighting);
    assert!(response.items.is_empty());
}

#[test]
fn output_never_contains_interacted_or_owned_items() {
    let engine = engine_with_seed(42);
    let mut active = user("a", &["item1"]);
    active.activity.seen = Some("item2".to_string());
    active.activity.listed = vec!["item3".to_string()];
    let snapshot = InteractionSnapshot {
        users: vec![
            active,
            user("b", &["item1", "item2", "item3", "item4"]),
        ],
        items: items(&["item1", "item2", "item3", "item4"]),
    };

    let response = engine.recommend(&request("a"), &snapshot).unwrap();
    assert_eq!(response.outcome, RecommendOutcome::Ranked);
    assert!(!response.items.contains(&"item1".to_string()), "bid item leaked");
    assert!(!response.items.contains(&"item2".to_string()), "seen item leaked");
    assert!(!response.items.contains(&"item3".to_string()), "owned item leaked");
    assert_eq!(response.items, vec!["item4".to_string()]);
}

#[test]
fn output_contains_no_duplicates() {
    let engine = engine_with_seed(7);
    let snapshot = InteractionSnapshot {
        users: vec![
            user("a", &["item1"]),
            user("b", &["item1", "item2", "item3"]),
            user("c", &["item1", "item3", "item2"]),
        ],
        items: items(&["item1", "item2", "item3"]),
    };

    let response = engine.recommend(&request("a"), &snapshot).unwrap();
    let mut deduped = response.items.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), response.items.len());
}

#[test]
fn same_seed_gives_identical_rankings() {
    let snapshot = InteractionSnapshot {
        users: (0..20)
            .map(|i| {
                let id = format!("u{i}");
                let bid = format!("item{}", i % 5);
                UserRecord {
                    id,
                    activity: UserActivity {
                        bids: vec![bid, "item0".to_string()],
                        seen: None,
                        listed: Vec::new(),
                    },
                }
            })
            .collect(),
        items: items(&["item0", "item1", "item2", "item3", "item4"]),
    };

    let first = engine_with_seed(1234)
        .recommend(&request("u0"), &snapshot)
        .unwrap();
    let second = engine_with_seed(1234)
        .recommend(&request("u0"), &snapshot)
        .unwrap();
    assert_eq!(first.items, second.items);
    assert_eq!(first.neighborhood_size, second.neighborhood_size);
}

#[test]
fn request_cap_overrides_config() {
    let engine = engine_with_seed(42);
    let snapshot = InteractionSnapshot {
        users: vec![
            user("a", &["item0"]),
            user("b", &["item0", "item1", "item2", "item3"]),
        ],
        items: items(&["item0", "item1", "item2", "item3"]),
    };

    let capped = engine
        .recommend(
            &RecommendRequest {
                user_id: "a".to_string(),
                max_results: Some(2),
            },
            &snapshot,
        )
        .unwrap();
    assert_eq!(capped.items.len(), 2);
    assert_eq!(capped.candidate_count, 3);
}

#[test]
fn malformed_snapshot_is_escalated() {
    let engine = engine_with_seed(42);
    let snapshot = InteractionSnapshot {
        users: vec![user("a", &["item1"])],
        items: vec!["item1".to_string(), "item1".to_string()],
    };

    assert!(engine.recommend(&request("a"), &snapshot).is_err());
}
