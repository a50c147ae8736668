// =============================================================================
// Auctra - Main Entry Point
// =============================================================================
//
// Project: Auctra - Neighborhood-based Auction Recommendation Engine
// Author: Auctra Team <dev@auctra.io>
// Version: 0.2.0-alpha
// License: Apache 2.0 / MIT
//
// Description:
//   CLI entry point for the Auctra recommendation engine. Loads an
//   interaction snapshot exported by the auction platform, runs the
//   engine for a user, and prints the ranked recommendations.
//
// Architecture:
//   • Synchronous single-request computation (no async runtime)
//   • Structured logging with tracing
//   • Configuration via TOML + environment variables (figment)
//
// =============================================================================

use std::fs;
use std::path::Path;

use anyhow::Context;
use comfy_table::Table;
use tracing::{error, info};
use tracing_subscriber::{prelude::*, EnvFilter};

use auctra::config::AppConfig;
use auctra_recommender::prelude::*;

mod clap;

fn main() {
    let args = clap::parse();

    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let log_level = args.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting Auctra recommender CLI v{}", clap::version());

    let result = match args.command {
        clap::Commands::Recommend { snapshot, user, top } => {
            process_recommend(&snapshot, &user, top, &config)
        }
        clap::Commands::Inspect { snapshot } => process_inspect(&snapshot),
    };

    if let Err(e) = result {
        error!("❌ {e:#}");
        std::process::exit(1);
    }
}

/// Load and validate a snapshot export
fn load_snapshot(path: &Path) -> anyhow::Result<InteractionSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot file {}", path.display()))?;
    let snapshot: InteractionSnapshot =
        serde_json::from_str(&raw).with_context(|| format!("parsing snapshot {}", path.display()))?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Run the engine for one user and print the ranking
fn process_recommend(
    snapshot_path: &Path,
    user_id: &str,
    top: Option<usize>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    info!(
        "📋 Snapshot loaded: {} users, {} items",
        snapshot.users.len(),
        snapshot.items.len()
    );

    let engine = RecommendationEngine::new(config.recommender.clone());
    let request = RecommendRequest {
        user_id: user_id.to_string(),
        max_results: top,
    };
    let response = engine.recommend(&request, &snapshot)?;

    if response.items.is_empty() {
        println!(
            "No recommendations available for {user_id} ({:?})",
            response.outcome
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Rank", "Item"]);
    for (rank, item) in response.items.iter().enumerate() {
        table.add_row(vec![(rank + 1).to_string(), item.clone()]);
    }
    println!("{table}");
    info!(
        "✅ {} recommendations ({} candidates, {} neighbors, {} ms)",
        response.items.len(),
        response.candidate_count,
        response.neighborhood_size,
        response.processing_time_ms
    );

    Ok(())
}

/// Print aggregate statistics about a snapshot
fn process_inspect(snapshot_path: &Path) -> anyhow::Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let stats = snapshot.stats();

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Users".to_string(), stats.user_count.to_string()]);
    table.add_row(vec![
        "Active users".to_string(),
        stats.active_user_count.to_string(),
    ]);
    table.add_row(vec!["Items".to_string(), stats.item_count.to_string()]);
    table.add_row(vec![
        "Interactions".to_string(),
        stats.interaction_count.to_string(),
    ]);
    println!("{table}");

    Ok(())
}
