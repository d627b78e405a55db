//! # tablewash - tabular data cleaning
//!
//! `tablewash` turns a raw CSV export into an analysis-ready table with five
//! stages applied in a fixed order:
//!
//! ```text
//! load_table -> resolve_missing -> deduplicate -> normalize_column_names -> persist_table
//! ```
//!
//! Each stage takes the table (a Polars [`DataFrame`](polars::prelude::DataFrame))
//! by value and returns a new one, so a table has exactly one owner as it
//! moves through the pipeline.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use tablewash::cleaner::*;
//!
//! # fn example() -> tablewash::error::Result<()> {
//! let strategies = StrategyConfig::new()
//!     .with_column("kepler_name", ColumnStrategy::UnknownCategory)
//!     .with_column("koi_score", ColumnStrategy::DropRows);
//!
//! let df = load_table(Path::new("cumulative.csv"), &LoadOptions::default())?;
//! let (df, report) = resolve_missing(df, &strategies)?;
//! let df = deduplicate(df)?;
//! let df = normalize_column_names(df)?;
//! persist_table(df, Path::new("cleaned/clean_data.csv"))?;
//!
//! println!("{} rows dropped, {} cells filled", report.rows_dropped, report.cells_filled());
//! # Ok(())
//! # }
//! ```
//!
//! ## Missing values
//!
//! Columns named in a [`StrategyConfig`](cleaner::StrategyConfig) are handled
//! by their rule (`drop_rows`, `fill_with_value`, `unknown_category`).
//! Every other column is filled with its median when numeric, or its most
//! frequent value otherwise. Defaults are computed after all `drop_rows`
//! rules have removed their rows.
//!
//! ## Modules
//!
//! - [`cleaner`]: the individual stages
//! - [`pipeline`]: JSON configuration, validation and the run driver
//! - [`error`]: error type and `Result` alias
//! - [`logging`]: console and rolling-file `tracing` setup

#![warn(clippy::all, rust_2018_idioms)]

pub mod cleaner;
pub mod error;
pub mod logging;
pub mod pipeline;
