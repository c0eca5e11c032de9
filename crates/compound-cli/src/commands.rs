//! CLI commands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect the agent personas registered with the host runtime
#[derive(Parser, Debug)]
#[command(name = "compound")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of discovering compound.{jsonc,json,yml,yaml}
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of <agent>.md prompt files overriding the embedded prompts
    #[arg(long, global = true)]
    pub prompts_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List assembled agents with model and temperature (default)
    List,

    /// Print the registration mapping (name -> model, temperature, system) as JSON
    Configs,

    /// Print the full assembled agent list as JSON
    Agents,

    /// Print one agent's final system prompt
    Prompt {
        /// Agent name (e.g., orchestrator, explore, oracle)
        name: String,
    },

    /// Print the subagent summary used in tool descriptions
    Describe {
        /// Print one subagent name per line instead
        #[arg(long)]
        names: bool,
    },

    /// Verify the catalog and that the orchestrator template renders
    Check,
}
