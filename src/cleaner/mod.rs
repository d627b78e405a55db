//! The five table stages: load, resolve missing values, deduplicate,
//! normalize column names, persist.

pub mod cleaning;
pub mod io;
pub mod naming;
pub mod profiling;
pub mod types;

pub use cleaning::{deduplicate, resolve_missing};
pub use io::{DEFAULT_NULL_VALUES, LoadOptions, load_table, persist_table};
pub use naming::{normalize_column_name, normalize_column_names};
pub use profiling::profile_table;
pub use types::{
    ColumnKind, ColumnProfile, ColumnStrategy, FillValue, MissingReport, StrategyConfig,
    UNKNOWN_CATEGORY,
};
