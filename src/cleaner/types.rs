use indexmap::IndexMap;
use polars::prelude::DataType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel written by [`ColumnStrategy::UnknownCategory`].
pub const UNKNOWN_CATEGORY: &str = "Unknown";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    pub fn from_dtype(dtype: &DataType) -> Self {
        if dtype.is_primitive_numeric() {
            Self::Numeric
        } else {
            Self::Categorical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "Numeric",
            Self::Categorical => "Categorical",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Literal used by [`ColumnStrategy::FillWithValue`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FillValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for FillValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for FillValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FillValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FillValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FillValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FillValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// How missing values in one column are resolved.
///
/// Deserialized permissively from `{"strategy": "...", "value": ...}`: a
/// missing or unknown strategy name becomes [`ColumnStrategy::Unrecognized`]
/// and the column falls back to default handling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawStrategy", into = "RawStrategy")]
pub enum ColumnStrategy {
    /// Remove every row where the column is missing.
    DropRows,
    /// Replace missing cells with a literal. `None` leaves them missing.
    FillWithValue(Option<FillValue>),
    /// Replace missing cells with [`UNKNOWN_CATEGORY`].
    UnknownCategory,
    /// Strategy name that is not recognized (empty when absent).
    Unrecognized(String),
}

impl ColumnStrategy {
    pub fn fill(value: impl Into<FillValue>) -> Self {
        Self::FillWithValue(Some(value.into()))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::DropRows => "drop_rows",
            Self::FillWithValue(_) => "fill_with_value",
            Self::UnknownCategory => "unknown_category",
            Self::Unrecognized(name) => name,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct RawStrategy {
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<FillValue>,
}

impl From<RawStrategy> for ColumnStrategy {
    fn from(raw: RawStrategy) -> Self {
        match raw.strategy.as_deref() {
            Some("drop_rows") => Self::DropRows,
            Some("fill_with_value") => Self::FillWithValue(raw.value),
            Some("unknown_category") => Self::UnknownCategory,
            Some(other) => Self::Unrecognized(other.to_owned()),
            None => Self::Unrecognized(String::new()),
        }
    }
}

impl From<ColumnStrategy> for RawStrategy {
    fn from(strategy: ColumnStrategy) -> Self {
        let name = strategy.name().to_owned();
        let value = match strategy {
            ColumnStrategy::FillWithValue(value) => value,
            _ => None,
        };
        Self {
            strategy: (!name.is_empty()).then_some(name),
            value,
        }
    }
}

/// Ordered mapping from column name to [`ColumnStrategy`].
///
/// Rules are applied in insertion order, which matters when several columns
/// use `drop_rows`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyConfig {
    columns: IndexMap<String, ColumnStrategy>,
}

impl StrategyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>, strategy: ColumnStrategy) -> Self {
        self.insert(column, strategy);
        self
    }

    /// Sets the rule for `column`. Replacing a rule keeps its original position.
    pub fn insert(&mut self, column: impl Into<String>, strategy: ColumnStrategy) {
        self.columns.insert(column.into(), strategy);
    }

    pub fn get(&self, column: &str) -> Option<&ColumnStrategy> {
        self.columns.get(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ColumnStrategy)> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// What the missing-value stage did to the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MissingReport {
    pub rows_dropped: usize,
    /// Cells filled per column, by a configured rule or a default.
    pub filled: BTreeMap<String, usize>,
    /// Columns that still contain missing cells after resolution.
    pub unresolved: Vec<String>,
}

impl MissingReport {
    pub fn cells_filled(&self) -> usize {
        self.filled.values().sum()
    }
}

/// Missing-value profile of a single column.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    pub count: usize,
    pub missing: usize,
    /// Value the default rule would fill with, if any.
    pub default_fill: Option<String>,
}

impl ColumnProfile {
    pub fn missing_pct(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.missing as f64 / self.count as f64) * 100.0
        }
    }
}
