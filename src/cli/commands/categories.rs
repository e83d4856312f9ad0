//! `ascent categories` subcommands.

use anyhow::{Context, Result};

use crate::cli::output::format_category_table;
use crate::services::RubricStore;

/// Handle categories list command
pub async fn handle_list(store: &RubricStore, json: bool) -> Result<()> {
    let rubric = store.load().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&rubric)?);
    } else {
        println!("{}", format_category_table(&rubric));
    }
    Ok(())
}

/// Handle categories add command
pub async fn handle_add(store: &RubricStore, description: &str) -> Result<()> {
    store
        .add(description)
        .await
        .context("Failed to persist rubric")?;
    handle_list(store, false).await
}

/// Handle categories remove command
pub async fn handle_remove(store: &RubricStore, index: usize) -> Result<()> {
    store
        .remove(index)
        .await
        .context("Failed to persist rubric")?;
    handle_list(store, false).await
}
