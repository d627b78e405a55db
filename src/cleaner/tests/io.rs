use super::{f64_values, str_values};
use crate::cleaner::*;
use crate::error::CleanerError;
use anyhow::Result;
use polars::prelude::*;
use std::path::PathBuf;

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_load_missing_file_is_not_found() {
    let path = PathBuf::from("definitely/not/here.csv");
    let err = load_table(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, CleanerError::NotFound(p) if p == path));
}

#[test]
fn test_load_rejects_unknown_extension() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_fixture(&dir, "data.xlsx", "a,b\n1,2\n")?;

    let err = load_table(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, CleanerError::UnsupportedFormat(ext) if ext == ".xlsx"));
    Ok(())
}

#[test]
fn test_load_extension_is_case_insensitive() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_fixture(&dir, "DATA.CSV", "a,b\n1,x\n")?;

    let df = load_table(&path, &LoadOptions::default())?;
    assert_eq!(df.shape(), (1, 2));
    Ok(())
}

#[test]
fn test_load_infers_kinds_and_null_tokens() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_fixture(
        &dir,
        "stars.csv",
        "kepid,kepler_name,koi_score\n1,Kepler-1 b,0.9\n2,,NaN\n3,NA,0.5\n",
    )?;

    let df = load_table(&path, &LoadOptions::default())?;

    assert_eq!(df.shape(), (3, 3));
    assert_eq!(
        ColumnKind::from_dtype(df.column("kepid")?.dtype()),
        ColumnKind::Numeric
    );
    assert_eq!(
        ColumnKind::from_dtype(df.column("koi_score")?.dtype()),
        ColumnKind::Numeric
    );
    assert_eq!(
        ColumnKind::from_dtype(df.column("kepler_name")?.dtype()),
        ColumnKind::Categorical
    );
    assert_eq!(df.column("kepler_name")?.null_count(), 2);
    assert_eq!(f64_values(&df, "koi_score"), vec![Some(0.9), None, Some(0.5)]);
    Ok(())
}

#[test]
fn test_load_custom_delimiter() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_fixture(&dir, "semi.csv", "a;b\n1;x\n2;y\n")?;
    let options = LoadOptions {
        delimiter: ';',
        ..LoadOptions::default()
    };

    let df = load_table(&path, &options)?;
    assert_eq!(df.shape(), (2, 2));
    assert_eq!(str_values(&df, "b"), vec![Some("x".to_owned()), Some("y".to_owned())]);
    Ok(())
}

#[test]
fn test_semicolon_input_is_written_with_commas() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_fixture(&dir, "semi.csv", "a;b\n1;x\n2;y\n")?;
    let options = LoadOptions {
        delimiter: ';',
        ..LoadOptions::default()
    };
    let out = dir.path().join("out.csv");

    persist_table(load_table(&path, &options)?, &out)?;

    let written = std::fs::read_to_string(&out)?;
    assert_eq!(written.lines().collect::<Vec<_>>(), vec!["a,b", "1,x", "2,y"]);
    Ok(())
}

#[test]
fn test_persist_creates_parents_and_omits_index() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("cleaned").join("nested").join("out.csv");
    let df = df!(
        "name" => &[Some("a"), None],
        "value" => &[1.5, 2.0]
    )?;

    persist_table(df, &out)?;

    let written = std::fs::read_to_string(&out)?;
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines, vec!["name,value", "a,1.5", ",2.0"]);
    Ok(())
}

#[test]
fn test_persist_overwrites_existing_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = write_fixture(&dir, "out.csv", "stale,contents\n1,2\n3,4\n")?;

    persist_table(df!("fresh" => &[1i64])?, &out)?;

    assert_eq!(std::fs::read_to_string(&out)?.lines().count(), 2);
    Ok(())
}

#[test]
fn test_persist_into_file_parent_is_write_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let blocker = write_fixture(&dir, "blocker", "not a directory")?;
    let out = blocker.join("out.csv");

    let err = persist_table(df!("a" => &[1i64])?, &out).unwrap_err();
    assert!(matches!(err, CleanerError::Write { .. }));
    Ok(())
}

#[test]
fn test_round_trip_keeps_missing_as_empty() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("rt.csv");
    persist_table(df!("a" => &[Some(1.0), None, Some(3.0)])?, &out)?;

    let df = load_table(&out, &LoadOptions::default())?;
    assert_eq!(f64_values(&df, "a"), vec![Some(1.0), None, Some(3.0)]);
    Ok(())
}
