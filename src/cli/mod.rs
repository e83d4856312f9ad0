//! Command-line interface for the tweet optimizer.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Hill-climbing tweet optimizer
#[derive(Parser, Debug)]
#[command(name = "ascent", version, about)]
pub struct Cli {
    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an optimization loop over the input text
    Run {
        /// Source text to turn into a tweet
        #[arg(long, short)]
        input: String,

        /// Maximum post-bootstrap iterations (1-20)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=20))]
        iterations: Option<u32>,

        /// Consecutive non-improving iterations tolerated (1-20)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=20))]
        patience: Option<u32>,
    },

    /// Manage the scoring rubric
    Categories {
        #[command(subcommand)]
        command: CategoriesCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoriesCommands {
    /// List the rubric categories
    List,
    /// Append a category
    Add { description: String },
    /// Remove a category by its index
    Remove { index: usize },
}
