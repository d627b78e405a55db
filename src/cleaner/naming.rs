use crate::error::Result;
use polars::prelude::*;
use std::collections::HashSet;

/// Trim, lowercase, and replace internal spaces with underscores.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Normalize every name, suffixing `_1`, `_2`, ... where two columns would
/// otherwise collide. Output is stable under repeated application.
pub fn normalize_column_names_list(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cleaned_names = Vec::with_capacity(names.len());

    for name in names {
        let clean_base = normalize_column_name(name);
        let mut clean = clean_base.clone();
        let mut count = 0;

        while seen.contains(&clean) {
            count += 1;
            clean = format!("{clean_base}_{count}");
        }

        if count > 0 {
            tracing::warn!("Column '{name}' normalizes to a duplicate name, renamed to '{clean}'");
        }
        seen.insert(clean.clone());
        cleaned_names.push(clean);
    }
    cleaned_names
}

/// Rename the table's columns, keeping their order. Cell data is untouched.
pub fn normalize_column_names(table: DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = table
        .get_column_names()
        .into_iter()
        .map(|n| n.to_string())
        .collect();
    let new_names = normalize_column_names_list(&names);

    let renamed = names
        .iter()
        .zip(&new_names)
        .filter(|(old, new)| old != new)
        .count();
    if renamed == 0 {
        return Ok(table);
    }

    let columns: Vec<Column> = table
        .get_columns()
        .iter()
        .zip(new_names)
        .map(|(column, name)| {
            let mut column = column.clone();
            column.rename(name.into());
            column
        })
        .collect();

    tracing::info!("Normalized {renamed} column names");
    Ok(DataFrame::new(columns)?)
}
