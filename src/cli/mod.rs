//! Command-line parsing for the sales dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the data/aggregation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sd", version, about = "Interactive sales-by-category dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive dashboard (the default when no subcommand is given).
    Tui(DataArgs),
    /// Print per-category totals for one region, optionally exporting them.
    Report(ReportArgs),
    /// List the distinct regions present in the dataset.
    Regions(DataArgs),
}

/// Options shared by every subcommand.
#[derive(Debug, Parser, Clone)]
pub struct DataArgs {
    /// Path to the sales CSV (columns: Fecha, Región, Categoría, Ventas).
    #[arg(short = 'f', long = "file", default_value = "datos_ventas.csv")]
    pub file: PathBuf,
}

/// Options for the `report` subcommand.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Region to report on (default: alphabetically first region in the data).
    #[arg(short = 'r', long)]
    pub region: Option<String>,

    /// Export the aggregated totals to a CSV file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the aggregated totals to a JSON file.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}
