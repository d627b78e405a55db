use super::types::{
    ColumnKind, ColumnStrategy, FillValue, MissingReport, StrategyConfig, UNKNOWN_CATEGORY,
};
use crate::error::Result;
use polars::prelude::*;
use std::collections::{HashMap, HashSet};

/// Resolve missing values column by column.
///
/// Nulls and float NaN both count as missing.
///
/// Configured rules run first, in configuration order. `drop_rows` removes
/// rows for every later rule and for the defaults, so medians and modes are
/// computed over the surviving rows. Columns without a recognized rule then
/// get the median (numeric) or the most frequent value (everything else).
pub fn resolve_missing(
    table: DataFrame,
    config: &StrategyConfig,
) -> Result<(DataFrame, MissingReport)> {
    let mut df = nan_as_missing(table)?;
    let mut report = MissingReport::default();
    let mut handled = HashSet::new();

    // 1. Column-specific strategies
    for (name, strategy) in config.iter() {
        let Some(column) = df.column(name).ok() else {
            tracing::debug!("Strategy for '{name}' skipped: column not in table");
            continue;
        };
        let missing = column.null_count();

        match strategy {
            ColumnStrategy::DropRows => {
                if missing > 0 {
                    let before = df.height();
                    df = df.lazy().filter(col(name.as_str()).is_not_null()).collect()?;
                    report.rows_dropped += before - df.height();
                    tracing::debug!("Dropped {} rows with missing '{name}'", before - df.height());
                }
            }
            ColumnStrategy::FillWithValue(Some(value)) => {
                if missing > 0 {
                    let expr = fill_literal_expr(name, column.dtype(), value);
                    df = df.lazy().with_column(expr).collect()?;
                    report.filled.insert(name.clone(), missing);
                }
            }
            ColumnStrategy::FillWithValue(None) => {
                tracing::warn!("'{name}' uses fill_with_value without a value; cells stay missing");
            }
            ColumnStrategy::UnknownCategory => {
                if missing > 0 {
                    let unknown = FillValue::from(UNKNOWN_CATEGORY);
                    let expr = fill_literal_expr(name, column.dtype(), &unknown);
                    df = df.lazy().with_column(expr).collect()?;
                    report.filled.insert(name.clone(), missing);
                }
            }
            ColumnStrategy::Unrecognized(strategy_name) => {
                tracing::debug!(
                    "Unrecognized strategy '{strategy_name}' for '{name}', using default handling"
                );
                continue;
            }
        }
        handled.insert(name.clone());
    }

    // 2. Defaults for everything else, over the rows that survived step 1
    let defaults: Vec<(String, Expr, usize)> = df
        .get_columns()
        .iter()
        .filter(|c| !handled.contains(c.name().as_str()) && c.null_count() > 0)
        .filter_map(|c| {
            let series = c.as_materialized_series();
            default_fill_expr(series).map(|expr| (c.name().to_string(), expr, c.null_count()))
        })
        .collect();

    if !defaults.is_empty() {
        let mut exprs = Vec::with_capacity(defaults.len());
        for (name, expr, missing) in defaults {
            report.filled.insert(name, missing);
            exprs.push(expr);
        }
        df = df.lazy().with_columns(exprs).collect()?;
    }

    report.unresolved = df
        .get_columns()
        .iter()
        .filter(|c| c.null_count() > 0)
        .map(|c| c.name().to_string())
        .collect();

    tracing::info!(
        "Missing values resolved: {} rows dropped, {} cells filled",
        report.rows_dropped,
        report.cells_filled()
    );
    if !report.unresolved.is_empty() {
        tracing::warn!("Columns still missing values: {}", report.unresolved.join(", "));
    }

    Ok((df, report))
}

/// Turn float NaN into null so later steps see a single missing marker.
pub(crate) fn nan_as_missing(table: DataFrame) -> Result<DataFrame> {
    let exprs: Vec<Expr> = table
        .get_columns()
        .iter()
        .filter(|c| c.dtype().is_float())
        .map(|c| {
            let name = c.name().as_str();
            col(name)
                .fill_nan(lit(NULL).cast(c.dtype().clone()))
                .alias(name)
        })
        .collect();

    if exprs.is_empty() {
        return Ok(table);
    }
    Ok(table.lazy().with_columns(exprs).collect()?)
}

/// Remove exact duplicate rows, keeping the first occurrence in order.
pub fn deduplicate(table: DataFrame) -> Result<DataFrame> {
    if table.width() == 0 || table.height() < 2 {
        return Ok(table);
    }
    let before = table.height();
    let df = table
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;
    tracing::info!("Removed {} duplicate rows", before - df.height());
    Ok(df)
}

/// Fill expression for a configured literal.
///
/// The column is cast when the literal does not fit it: text into a
/// non-text column casts to text, a float into an integer column casts to
/// float. Numbers and booleans going into text columns are rendered as text.
fn fill_literal_expr(name: &str, dtype: &DataType, value: &FillValue) -> Expr {
    let column = col(name);
    let expr = match value {
        FillValue::Int(i) if dtype.is_primitive_numeric() => column.fill_null(lit(*i)),
        FillValue::Float(x) if dtype.is_float() => column.fill_null(lit(*x)),
        FillValue::Float(x) if dtype.is_primitive_numeric() => {
            column.cast(DataType::Float64).fill_null(lit(*x))
        }
        FillValue::Bool(b) if dtype == &DataType::Boolean => column.fill_null(lit(*b)),
        other if dtype == &DataType::String => column.fill_null(lit(other.to_string())),
        other => column
            .cast(DataType::String)
            .fill_null(lit(other.to_string())),
    };
    expr.alias(name)
}

/// Default fill for a column, or `None` when it has no present values.
fn default_fill_expr(series: &Series) -> Option<Expr> {
    let name = series.name().as_str();
    let dtype = series.dtype();
    let column = col(name);

    let expr = match ColumnKind::from_dtype(dtype) {
        ColumnKind::Numeric => {
            let median = column_median(series)?;
            if dtype.is_integer() && median.fract() == 0.0 {
                column.fill_null(lit(median as i64).cast(dtype.clone()))
            } else {
                column.cast(DataType::Float64).fill_null(lit(median))
            }
        }
        ColumnKind::Categorical => {
            let mode = column_mode(series)?;
            match dtype {
                DataType::String => column.fill_null(lit(mode)),
                DataType::Boolean => column.fill_null(lit(mode == "true")),
                _ => column.fill_null(lit(mode).cast(dtype.clone())),
            }
        }
    };
    Some(expr.alias(name))
}

/// Median over present values.
pub(crate) fn column_median(series: &Series) -> Option<f64> {
    series.median().filter(|m| !m.is_nan())
}

/// Most frequent present value rendered as text. Ties go to the smallest
/// value in lexical order.
pub(crate) fn column_mode(series: &Series) -> Option<String> {
    let as_text = series.cast(&DataType::String).ok()?;
    let values = as_text.str().ok()?;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values.into_iter().flatten() {
        *counts.entry(value).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by(|(a_val, a_count), (b_val, b_count)| {
            a_count.cmp(b_count).then_with(|| b_val.cmp(a_val))
        })
        .map(|(value, _)| value.to_owned())
}
