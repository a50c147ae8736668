// =============================================================================
// Auctra - Clap Module
// =============================================================================
//
// Project: Auctra - Neighborhood-based Auction Recommendation Engine
// Author: Auctra Team <dev@auctra.io>
// Version: 0.2.0-alpha
// License: Apache 2.0 / MIT
//
// Description:
//   Command line interface definitions for the Auctra binary. Supports
//   running the recommendation engine against a snapshot export and
//   inspecting snapshot statistics.
//
// =============================================================================

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Returns the current version of the crate with extra info if supplied
///
/// Set the environment variable `AUCTRA_VERSION_EXTRA` at build time to any
/// UTF-8 string to include it in parenthesis after the SemVer version. A
/// common value are git commit hashes.
pub fn version() -> String {
    let cargo_pkg_version = env!("CARGO_PKG_VERSION");

    match option_env!("AUCTRA_VERSION_EXTRA") {
        Some(x) => format!("{} ({})", cargo_pkg_version, x),
        None => cargo_pkg_version.to_owned(),
    }
}

/// Auctra - Command Line Interface
///
/// Neighborhood-based recommendation engine for auction platforms.
/// Loads an interaction snapshot exported by the platform and computes
/// ranked item recommendations for a user.
#[derive(Parser, Debug, Clone)]
#[clap(about, version = version(), name = "auctra")]
pub struct Args {
    /// Path to configuration file
    #[clap(short, long, help = "Path to configuration file", global = true, env = "AUCTRA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[clap(short, long, help = "Log level override", global = true)]
    pub log_level: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute recommendations for a user from a snapshot file
    Recommend {
        /// Path to the interaction snapshot (JSON)
        #[clap(short, long)]
        snapshot: PathBuf,

        /// User id to recommend for
        #[clap(short, long)]
        user: String,

        /// Maximum number of recommendations to print
        #[clap(short, long)]
        top: Option<usize>,
    },

    /// Print statistics about a snapshot file
    Inspect {
        /// Path to the interaction snapshot (JSON)
        #[clap(short, long)]
        snapshot: PathBuf,
    },
}

/// Parse the command line arguments
pub fn parse() -> Args {
    Args::parse()
}
