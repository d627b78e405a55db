//! Pipeline execution engine.
//!
//! Runs the five stages in their fixed order and collects a run report.

use super::config::CleanConfig;
use super::validation::validate_strategies;
use crate::cleaner::{
    deduplicate, load_table, normalize_column_names, persist_table, resolve_missing,
};
use crate::error::{CleanerError, Result};
use std::path::{Path, PathBuf};

/// Report generated after pipeline execution
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of rows loaded
    pub rows_before: usize,

    /// Number of rows written
    pub rows_after: usize,

    /// Number of columns
    pub columns: usize,

    /// Rows removed by `drop_rows` strategies
    pub rows_dropped: usize,

    /// Rows removed as exact duplicates
    pub duplicates_removed: usize,

    /// Missing cells replaced by a strategy or default
    pub cells_filled: usize,

    /// Columns that still contain missing cells
    pub unresolved_columns: Vec<String>,

    /// `(old, new)` pairs for every renamed column
    pub renamed_columns: Vec<(String, String)>,

    /// Configuration issues found before running
    pub warnings: Vec<String>,

    /// Where the cleaned table was written
    pub output_path: PathBuf,

    /// Time taken for execution
    pub duration: std::time::Duration,
}

impl RunReport {
    /// Create a summary message
    pub fn summary(&self) -> String {
        format!(
            "Cleaned {} rows -> {} rows x {} columns ({} dropped for missing values, {} duplicates, {} cells filled, {} renamed) in {:.2}s",
            self.rows_before,
            self.rows_after,
            self.columns,
            self.rows_dropped,
            self.duplicates_removed,
            self.cells_filled,
            self.renamed_columns.len(),
            self.duration.as_secs_f64()
        )
    }
}

/// Execute the cleaning pipeline: load, resolve missing values, deduplicate,
/// normalize column names, persist.
///
/// # Errors
///
/// Any stage error is returned as-is. In strict mode, configuration issues
/// abort the run with [`CleanerError::Config`] before anything is written.
pub fn run_pipeline(
    config: &CleanConfig,
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<RunReport> {
    let start = std::time::Instant::now();
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    tracing::info!("Cleaning {} -> {}", input_path.display(), output_path.display());

    let table = load_table(input_path, &config.load)?;
    let rows_before = table.height();
    let original_names: Vec<String> = table
        .get_column_names()
        .into_iter()
        .map(|n| n.to_string())
        .collect();

    let issues = validate_strategies(&config.strategies, &original_names);
    if config.strict && !issues.is_empty() {
        return Err(CleanerError::Config(
            issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        ));
    }
    for issue in &issues {
        tracing::warn!("{issue}");
    }

    let (table, missing) = resolve_missing(table, &config.strategies)?;

    let before_dedup = table.height();
    let table = deduplicate(table)?;
    let duplicates_removed = before_dedup - table.height();

    let table = normalize_column_names(table)?;
    let renamed_columns = original_names
        .into_iter()
        .zip(table.get_column_names().into_iter().map(|n| n.to_string()))
        .filter(|(old, new)| old != new)
        .collect();

    let rows_after = table.height();
    let columns = table.width();
    persist_table(table, output_path)?;

    let report = RunReport {
        rows_before,
        rows_after,
        columns,
        rows_dropped: missing.rows_dropped,
        duplicates_removed,
        cells_filled: missing.cells_filled(),
        unresolved_columns: missing.unresolved,
        renamed_columns,
        warnings: issues.iter().map(ToString::to_string).collect(),
        output_path: output_path.to_path_buf(),
        duration: start.elapsed(),
    };
    tracing::info!("{}", report.summary());

    Ok(report)
}
