use crate::error::{CleanerError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extensions accepted by [`load_table`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv"];

/// Tokens read as missing unless overridden.
pub const DEFAULT_NULL_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options for reading a delimited-text file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Field separator
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Rows sampled when inferring column types
    #[serde(default = "default_infer_schema_length")]
    pub infer_schema_length: usize,

    /// Cell contents treated as missing
    #[serde(default = "default_null_values")]
    pub null_values: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            infer_schema_length: default_infer_schema_length(),
            null_values: default_null_values(),
        }
    }
}

fn default_delimiter() -> char {
    ','
}

fn default_infer_schema_length() -> usize {
    10_000
}

fn default_null_values() -> Vec<String> {
    DEFAULT_NULL_VALUES.iter().map(|s| (*s).to_owned()).collect()
}

fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| CleanerError::Config(format!("Delimiter must be ASCII, got {delimiter:?}")))
}

/// Load a delimited-text file into a table.
///
/// # Errors
///
/// [`CleanerError::NotFound`] if the path does not exist,
/// [`CleanerError::UnsupportedFormat`] if the extension is not `.csv`, and
/// [`CleanerError::Read`] if the file cannot be parsed.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    if !path.exists() {
        return Err(CleanerError::NotFound(path.to_path_buf()));
    }

    let ext = file_extension(path);
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CleanerError::UnsupportedFormat(format!(".{ext}")));
    }

    let null_values: Vec<PlSmallStr> = options
        .null_values
        .iter()
        .map(|s| PlSmallStr::from(s.as_str()))
        .collect();

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_separator(delimiter_byte(options.delimiter)?)
        .with_infer_schema_length(Some(options.infer_schema_length))
        .with_null_values(Some(NullValues::AllColumns(null_values)))
        .finish()
        .and_then(LazyFrame::collect)
        .map_err(|e| CleanerError::Read(format!("{}: {e}", path.display())))?;

    tracing::info!(
        "Loaded {} ({} rows x {} columns)",
        path.display(),
        df.height(),
        df.width()
    );

    Ok(df)
}

/// Write a table as comma-separated text with a header row and no index.
///
/// The output is always comma-separated, whatever
/// [`LoadOptions::delimiter`] the input was read with.
/// Parent directories are created as needed and an existing file is
/// overwritten.
///
/// # Errors
///
/// [`CleanerError::Write`] when the directory or file cannot be written.
pub fn persist_table(mut table: DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CleanerError::write(parent, e))?;
    }

    let file = std::fs::File::create(path).map_err(|e| CleanerError::write(path, e))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(&mut table)
        .map_err(|e| CleanerError::write(path, e))?;

    tracing::info!(
        "Wrote {} rows x {} columns to {}",
        table.height(),
        table.width(),
        path.display()
    );

    Ok(())
}
