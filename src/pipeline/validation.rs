//! Strategy validation.
//!
//! Strategy entries are permissive: bad entries fall back to default
//! handling instead of failing the run. This module names every such entry
//! so the executor can log it, or refuse to run in strict mode.

use crate::cleaner::{ColumnStrategy, StrategyConfig};

/// A strategy entry that will not do what it appears to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    /// Strategy name is missing or not one of the known strategies
    UnrecognizedStrategy { column: String, strategy: String },
    /// `fill_with_value` has no `value`; missing cells are left as-is
    MissingFillValue { column: String },
    /// The strategy names a column the input does not have
    UnknownColumn { column: String },
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedStrategy { column, strategy } if strategy.is_empty() => write!(
                f,
                "Column '{column}': no strategy given, default handling applies"
            ),
            Self::UnrecognizedStrategy { column, strategy } => write!(
                f,
                "Column '{column}': unrecognized strategy '{strategy}', default handling applies"
            ),
            Self::MissingFillValue { column } => write!(
                f,
                "Column '{column}': fill_with_value has no value, missing cells are kept"
            ),
            Self::UnknownColumn { column } => {
                write!(f, "Column '{column}': not present in input, strategy ignored")
            }
        }
    }
}

/// Check strategies against the input's column names.
pub fn validate_strategies(config: &StrategyConfig, columns: &[String]) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    for (column, strategy) in config.iter() {
        if !columns.contains(column) {
            issues.push(ConfigIssue::UnknownColumn {
                column: column.clone(),
            });
            continue;
        }

        match strategy {
            ColumnStrategy::Unrecognized(name) => issues.push(ConfigIssue::UnrecognizedStrategy {
                column: column.clone(),
                strategy: name.clone(),
            }),
            ColumnStrategy::FillWithValue(None) => issues.push(ConfigIssue::MissingFillValue {
                column: column.clone(),
            }),
            ColumnStrategy::DropRows
            | ColumnStrategy::FillWithValue(Some(_))
            | ColumnStrategy::UnknownCategory => {}
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_clean_config_has_no_issues() {
        let config = StrategyConfig::new()
            .with_column("kepler_name", ColumnStrategy::UnknownCategory)
            .with_column("koi_score", ColumnStrategy::DropRows)
            .with_column("country", ColumnStrategy::fill("Unknown"));

        let issues = validate_strategies(&config, &columns(&["kepler_name", "koi_score", "country"]));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_reports_each_issue_kind() {
        let config = StrategyConfig::new()
            .with_column("a", ColumnStrategy::Unrecognized("interpolate".to_owned()))
            .with_column("b", ColumnStrategy::FillWithValue(None))
            .with_column("ghost", ColumnStrategy::DropRows);

        let issues = validate_strategies(&config, &columns(&["a", "b"]));

        assert_eq!(
            issues,
            vec![
                ConfigIssue::UnrecognizedStrategy {
                    column: "a".to_owned(),
                    strategy: "interpolate".to_owned()
                },
                ConfigIssue::MissingFillValue {
                    column: "b".to_owned()
                },
                ConfigIssue::UnknownColumn {
                    column: "ghost".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_issue_display() {
        let issue = ConfigIssue::UnrecognizedStrategy {
            column: "a".to_owned(),
            strategy: String::new(),
        };
        assert_eq!(
            issue.to_string(),
            "Column 'a': no strategy given, default handling applies"
        );
    }
}
