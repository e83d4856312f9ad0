//! `ascent run` command: drive one optimization run to completion.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::cli::output::format_score_table;
use crate::domain::models::{Config, StopCause};
use crate::infrastructure::openrouter::oracles_from_env;
use crate::infrastructure::persistence::FileRubricRepository;
use crate::services::{OptimizerSession, RubricStore};

pub struct RunOptions {
    pub input_text: String,
    pub max_iterations: Option<u32>,
    pub patience: Option<u32>,
    pub json: bool,
}

/// Handle run command
pub async fn handle_run(config: &Config, options: RunOptions) -> Result<()> {
    let oracles = oracles_from_env(&config.oracle).context("Failed to construct oracles")?;
    let rubric = Arc::new(RubricStore::new(Arc::new(
        FileRubricRepository::from_config(&config.rubric),
    )));
    let session = OptimizerSession::new(oracles, rubric);

    session.set_input_text(options.input_text).await;
    session
        .set_max_iterations(
            options
                .max_iterations
                .unwrap_or(config.optimizer.max_iterations),
        )
        .await;
    session
        .set_patience(options.patience.unwrap_or(config.optimizer.patience))
        .await;

    let handle = session.start();

    // Show progress while the controller works in the background.
    let mut last_iteration = 0;
    while session.processing().await {
        let snapshot = session.snapshot().await;
        if !options.json && snapshot.iteration_index > last_iteration {
            last_iteration = snapshot.iteration_index;
            eprintln!(
                "iteration {}: current {} / best {}",
                snapshot.iteration_index,
                snapshot.current_scores.total(),
                snapshot.best_scores.total()
            );
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    handle.await.context("Optimizer task panicked")?;

    let snapshot = session.snapshot().await;
    if options.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    match snapshot.stop_cause {
        Some(StopCause::Failed) => {
            eprintln!("{}", snapshot.current_candidate);
        }
        cause => {
            println!(
                "Run {} finished after {} iteration(s) ({:?})",
                snapshot.run_id, snapshot.iteration_index, cause
            );
        }
    }

    if !snapshot.best_candidate.is_empty() {
        println!("\nBest tweet:\n{}\n", snapshot.best_candidate);
        println!("{}", format_score_table(&snapshot.best_scores));
    }

    Ok(())
}
