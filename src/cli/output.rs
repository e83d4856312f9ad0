//! Table formatting for CLI output.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::domain::models::{RubricSet, ScoreSnapshot};

/// Render a rubric as an indexed table.
pub fn format_category_table(rubric: &RubricSet) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Category"]);
    for (index, category) in rubric.categories().iter().enumerate() {
        table.add_row(vec![index.to_string(), category.description.clone()]);
    }
    table
}

/// Render a score snapshot with its total.
pub fn format_score_table(snapshot: &ScoreSnapshot) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Score"]);
    for score in snapshot.scores() {
        table.add_row(vec![score.category.clone(), score.score.to_string()]);
    }
    table.add_row(vec!["Total".to_string(), snapshot.total().to_string()]);
    table
}
