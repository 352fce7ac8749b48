//! Command-line parsing for the `nataf` binary.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! table/polynomial code. Distribution codes are taken as plain strings and
//! parsed by the library so unknown codes are reported the same way everywhere.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::OutputFormat;
use crate::logging::LogFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "nataf",
    version,
    about = "Nataf transformation: correlation in standard-normal space (Liu & Der Kiureghian, 1986)"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Transform the correlation of one pair of variables.
    Compute(ComputeArgs),
    /// List every tabulated distribution pair and its coefficients.
    Table(TableArgs),
    /// Evaluate one pair over a grid of original-space correlations.
    Sweep(SweepArgs),
    /// Transform a full correlation matrix read from a JSON spec.
    Matrix(MatrixArgs),
}

/// Output options shared by all subcommands.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Report format on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Shorthand for `--format json`.
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

impl OutputArgs {
    pub fn resolved(&self) -> OutputFormat {
        if self.json { OutputFormat::Json } else { self.format }
    }
}

#[derive(Debug, Args, Clone)]
pub struct ComputeArgs {
    /// Marginal distribution of variable 1 (N, U, SE, SR, G, LN, GM, W; any case).
    #[arg(default_value = "GM")]
    pub dist1: String,

    /// Marginal distribution of variable 2.
    #[arg(default_value = "LN")]
    pub dist2: String,

    /// Correlation between the variables in the original space.
    #[arg(long, default_value_t = 0.9, allow_negative_numbers = true)]
    pub corr: f64,

    /// Coefficient of variation of variable 1.
    #[arg(long, default_value_t = 1.0)]
    pub cov1: f64,

    /// Coefficient of variation of variable 2.
    #[arg(long, default_value_t = 1.0)]
    pub cov2: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct TableArgs {
    /// Evaluate every pair at this correlation (requires --cov1 and --cov2).
    #[arg(long, requires_all = ["cov1", "cov2"], allow_negative_numbers = true)]
    pub corr: Option<f64>,

    #[arg(long, requires = "corr")]
    pub cov1: Option<f64>,

    #[arg(long, requires = "corr")]
    pub cov2: Option<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct SweepArgs {
    pub dist1: String,

    pub dist2: String,

    #[arg(long)]
    pub cov1: f64,

    #[arg(long)]
    pub cov2: f64,

    /// Lowest correlation of the grid.
    #[arg(long, default_value_t = -0.9, allow_negative_numbers = true)]
    pub corr_min: f64,

    /// Highest correlation of the grid.
    #[arg(long, default_value_t = 0.9, allow_negative_numbers = true)]
    pub corr_max: f64,

    /// Number of grid points (inclusive of both ends).
    #[arg(long, default_value_t = 19)]
    pub steps: usize,

    /// Export the sweep to a file (`.json` writes JSON, anything else CSV).
    #[arg(long)]
    pub export: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct MatrixArgs {
    /// Matrix spec JSON (variables + original-space correlation matrix).
    #[arg(long, value_name = "JSON")]
    pub spec: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}
