use crate::cleaner::*;
use anyhow::Result;
use polars::prelude::*;

#[test]
fn test_profile_reports_kind_missing_and_default() -> Result<()> {
    let df = df!(
        "score" => &[Some(1.0), None, Some(3.0), None, Some(5.0)],
        "name" => &[Some("a"), Some("b"), Some("b"), None, None]
    )?;

    let profile = profile_table(&df)?;

    assert_eq!(profile.len(), 2);
    let score = &profile[0];
    assert_eq!(score.name, "score");
    assert_eq!(score.kind, ColumnKind::Numeric);
    assert_eq!(score.missing, 2);
    assert_eq!(score.default_fill.as_deref(), Some("3"));
    assert!((score.missing_pct() - 40.0).abs() < f64::EPSILON);

    let name = &profile[1];
    assert_eq!(name.kind, ColumnKind::Categorical);
    assert_eq!(name.default_fill.as_deref(), Some("b"));
    Ok(())
}

#[test]
fn test_profile_without_present_values() -> Result<()> {
    let empty = Series::full_null("x".into(), 2, &DataType::Float64);
    let df = DataFrame::new(vec![Column::from(empty)])?;

    let profile = profile_table(&df)?;

    assert_eq!(profile[0].missing, 2);
    assert_eq!(profile[0].default_fill, None);
    Ok(())
}

#[test]
fn test_profile_counts_nan_as_missing() -> Result<()> {
    let df = df!("score" => &[1.0, f64::NAN, 3.0, f64::NAN, 5.0])?;

    let profile = profile_table(&df)?;

    assert_eq!(profile[0].missing, 2);
    assert_eq!(profile[0].default_fill.as_deref(), Some("3"));
    Ok(())
}

#[test]
fn test_column_kind_follows_dtype() {
    for dtype in [DataType::Int32, DataType::UInt32, DataType::Int64, DataType::Float32] {
        assert_eq!(ColumnKind::from_dtype(&dtype), ColumnKind::Numeric, "{dtype}");
    }
    for dtype in [DataType::String, DataType::Boolean] {
        assert_eq!(ColumnKind::from_dtype(&dtype), ColumnKind::Categorical, "{dtype}");
    }
}
