// =============================================================================
// Auctra - Application Configuration Module
// =============================================================================
//
// Project: Auctra - Neighborhood-based Auction Recommendation Engine
// Author: Auctra Team <dev@auctra.io>
// Version: 0.2.0-alpha
// License: Apache 2.0 / MIT
//
// Description:
//   Application-level configuration for the CLI binary. Defaults are
//   overlaid with an optional TOML file and AUCTRA_-prefixed environment
//   variables via figment, in that order.
//
// =============================================================================

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use auctra_common::{AuctraError, Result};
use auctra_recommender::RecommenderConfig;

/// Application configuration for the Auctra CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log filter, e.g. "info" or "auctra_recommender=debug"
    pub log_level: String,
    /// Engine configuration
    pub recommender: RecommenderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            recommender: RecommenderConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the TOML file (if any), then
    /// `AUCTRA_`-prefixed environment variables
    ///
    /// Nested keys use a double underscore, e.g.
    /// `AUCTRA_RECOMMENDER__HASH_STAGES=3`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed("AUCTRA_").split("__"));

        figment
            .extract()
            .map_err(|e| AuctraError::Config(e.to_string()))
    }
}
