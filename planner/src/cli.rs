//! Command-line interface

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// Tokenomics planner
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "tokenomics-planner")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "PLANNER_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Write a default configuration file
    Init {
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: String,
    },

    /// Write a project file seeded from a template (dao, defi)
    Template {
        name: String,

        /// Project file to create (defaults to <name>.toml)
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Evaluate a project once and print a summary
    Run {
        /// Project file (overrides the configured one)
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Re-evaluate a project whenever its file changes
    Watch {
        /// Project file (overrides the configured one)
        #[arg(short, long)]
        project: Option<String>,
    },
}
