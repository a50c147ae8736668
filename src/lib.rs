// =============================================================================
// Auctra - Library Crate
// =============================================================================
//
// Project: Auctra - Neighborhood-based Auction Recommendation Engine
// Author: Auctra Team <dev@auctra.io>
// Version: 0.2.0-alpha
// License: Apache 2.0 / MIT
//
// Description:
//   Root library for the Auctra CLI binary: application-level configuration
//   loading plus re-exports of the workspace crates.
//
// =============================================================================

// Re-export workspace crates
pub use auctra_common as common;
pub use auctra_recommender as recommender;

pub mod config;

pub use config::AppConfig;
