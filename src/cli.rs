// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "slipway")]
#[command(about = "Tag-to-deploy release automation for forge-built container services")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new slipway.yml configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Run the release pipeline: tag, watch the build, deploy
    Release {
        /// Suppress stage progress (CI)
        #[arg(short, long)]
        quiet: bool,

        /// Emit JSON lines instead of human-readable progress
        #[arg(long, conflicts_with = "quiet")]
        json: bool,
    },

    /// Show the resolved configuration and the forge's latest tag
    Status,
}
