use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tablewash::cleaner::{LoadOptions, load_table, profile_table};
use tablewash::pipeline::{CleanConfig, run_pipeline};

/// Default location for `init-config`
pub const DEFAULT_CONFIG_PATH: &str = "tablewash.json";

#[derive(Debug, Parser)]
#[command(name = "tablewash", about = "Clean delimited tabular data", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve missing values, drop duplicates, normalize names and save
    Clean {
        /// Input CSV file. Overrides `input` in the config file.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output CSV file. Defaults to `cleaned/clean_<stem>.csv` next to the input.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to a JSON cleaning configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fail on unrecognized or incomplete strategies instead of warning
        #[arg(long)]
        strict: bool,
    },
    /// Show missing values per column and the default fill for each
    Profile {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Path to a JSON configuration file (only its load options are used)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write a starter configuration file
    InitConfig {
        /// Where to write the configuration
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        output: PathBuf,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Clean {
            input,
            output,
            config,
            strict,
        } => handle_clean(input, output, config, strict),
        Commands::Profile { input, config } => handle_profile(&input, config),
        Commands::InitConfig { output, force } => handle_init_config(&output, force),
    }
}

fn handle_clean(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    strict: bool,
) -> Result<()> {
    let mut config = load_config(config_path.as_deref())?;
    config.strict |= strict;

    let input_file = input
        .or_else(|| config.input.clone())
        .context("No input file given (use --input or set `input` in the config)")?;
    let output_file = output
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| default_output_path(&input_file));

    let report = run_pipeline(&config, &input_file, &output_file)?;

    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    if !report.unresolved_columns.is_empty() {
        println!(
            "Columns with remaining missing values: {}",
            report.unresolved_columns.join(", ")
        );
    }
    println!("{}", report.summary());
    println!("Cleaned data saved to: {}", report.output_path.display());
    Ok(())
}

fn handle_profile(input: &Path, config_path: Option<PathBuf>) -> Result<()> {
    let options = match config_path {
        Some(path) => load_config(Some(&path))?.load,
        None => LoadOptions::default(),
    };
    let df = load_table(input, &options)?;

    println!("{} rows x {} columns", df.height(), df.width());
    println!(
        "{:<32} {:<12} {:>10} {:>8}  default fill",
        "column", "kind", "missing", "pct"
    );
    for column in profile_table(&df)? {
        println!(
            "{:<32} {:<12} {:>10} {:>7.1}%  {}",
            column.name,
            column.kind,
            column.missing,
            column.missing_pct(),
            column.default_fill.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

fn handle_init_config(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }
    CleanConfig::default_template().to_file(output)?;
    println!("Configuration template written to: {}", output.display());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CleanConfig> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            CleanConfig::from_file(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))
        }
        None => Ok(CleanConfig::default()),
    }
}

/// `data/raw/x.csv` -> `data/raw/cleaned/clean_x.csv`
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("cleaned")
        .join(format!("clean_{stem}.csv"))
}
