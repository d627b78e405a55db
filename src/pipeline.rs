//! Configuration-driven cleaning runs.
//!
//! A [`CleanConfig`] describes one run; [`run_pipeline`] applies it and
//! returns a [`RunReport`].
//!
//! ```no_run
//! use tablewash::cleaner::{ColumnStrategy, StrategyConfig};
//! use tablewash::pipeline::{CleanConfig, run_pipeline};
//!
//! let strategies = StrategyConfig::new()
//!     .with_column("kepler_name", ColumnStrategy::UnknownCategory)
//!     .with_column("koi_score", ColumnStrategy::DropRows);
//! let config = CleanConfig::new(strategies);
//!
//! let report = run_pipeline(&config, "data/raw/cumulative.csv", "data/cleaned/clean_data.csv")?;
//! println!("{}", report.summary());
//! # Ok::<(), tablewash::error::CleanerError>(())
//! ```

pub mod config;
pub mod executor;
pub mod validation;

pub use config::{CONFIG_VERSION, CleanConfig};
pub use executor::{RunReport, run_pipeline};
pub use validation::{ConfigIssue, validate_strategies};
