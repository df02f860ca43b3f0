use std::path::PathBuf;

use clap::{Parser, Subcommand};
use followcover::utils::SortOrder;

/// followcover - follows-network statistics and greedy influencer covers
#[derive(Debug, Parser)]
#[command(name = "followcover", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display network overview: vertex, edge and in-degree counts.
    Info {
        /// Path to the edge-list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// List vertices ranked by in-degree.
    Degrees {
        /// Path to the edge-list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Number of entries to show; 0 shows all.
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// Sort order: ascending or descending.
        #[arg(long, default_value = "descending")]
        order: SortOrder,
    },

    /// Compute the greedy cover of the network.
    Cover {
        /// Path to the edge-list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Check that every vertex with followers is dominated by the cover.
        #[arg(long)]
        validate: bool,
    },

    /// Export the adjacency mapping of the network.
    Export {
        /// Path to the edge-list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Output format: text, json, dot.
        #[arg(long, default_value = "text")]
        format: String,
    },
}
