use super::cleaning::{column_median, column_mode, nan_as_missing};
use super::types::{ColumnKind, ColumnProfile};
use crate::error::Result;
use polars::prelude::*;

/// Per-column missing-value profile, in column order.
///
/// `default_fill` is what default handling would use for the column as it
/// stands; configured `drop_rows` rules can still change it at run time.
/// Float NaN is counted as missing.
///
/// # Errors
///
/// [`CleanerError::DataProcessing`](crate::error::CleanerError) if float
/// columns cannot be normalized.
pub fn profile_table(table: &DataFrame) -> Result<Vec<ColumnProfile>> {
    let table = nan_as_missing(table.clone())?;
    let profile = table
        .get_columns()
        .iter()
        .map(|column| {
            let series = column.as_materialized_series();
            let kind = ColumnKind::from_dtype(series.dtype());
            let default_fill = match kind {
                ColumnKind::Numeric => column_median(series).map(|m| m.to_string()),
                ColumnKind::Categorical => column_mode(series),
            };
            ColumnProfile {
                name: series.name().to_string(),
                kind,
                count: series.len(),
                missing: series.null_count(),
                default_fill,
            }
        })
        .collect();
    Ok(profile)
}
