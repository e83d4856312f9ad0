//! Ascent CLI entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ascent::cli::commands::run::RunOptions;
use ascent::cli::{CategoriesCommands, Cli, Commands};
use ascent::infrastructure::persistence::FileRubricRepository;
use ascent::services::RubricStore;
use ascent::ConfigLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err:#}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Run {
            input,
            iterations,
            patience,
        } => {
            ascent::cli::commands::run::handle_run(
                &config,
                RunOptions {
                    input_text: input,
                    max_iterations: iterations,
                    patience,
                    json: cli.json,
                },
            )
            .await
        }
        Commands::Categories { command } => {
            let store = RubricStore::new(Arc::new(FileRubricRepository::from_config(
                &config.rubric,
            )));
            match command {
                CategoriesCommands::List => {
                    ascent::cli::commands::categories::handle_list(&store, cli.json).await
                }
                CategoriesCommands::Add { description } => {
                    ascent::cli::commands::categories::handle_add(&store, &description).await
                }
                CategoriesCommands::Remove { index } => {
                    ascent::cli::commands::categories::handle_remove(&store, index).await
                }
            }
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
