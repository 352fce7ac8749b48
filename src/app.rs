//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and installs logging
//! - parses CLI arguments
//! - runs the requested command
//! - prints reports (text or JSON) and writes optional exports

use clap::Parser;

use crate::cli::{Cli, Command, ComputeArgs, MatrixArgs, SweepArgs, TableArgs};
use crate::domain::{ComputeConfig, MatrixConfig, OutputFormat, SweepConfig, TableConfig};
use crate::error::{AppError, NatafError};
use crate::logging::{LogConfig, init_logging};

pub mod pipeline;

/// Entry point for the `nataf` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env is fine; it only exists to carry RUST_LOG.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_format(cli.log_format));

    match cli.command {
        Command::Compute(args) => handle_compute(&compute_config_from_args(&args)),
        Command::Table(args) => handle_table(&table_config_from_args(&args)),
        Command::Sweep(args) => handle_sweep(&sweep_config_from_args(&args)),
        Command::Matrix(args) => handle_matrix(&matrix_config_from_args(&args)),
    }
}

fn handle_compute(config: &ComputeConfig) -> Result<(), AppError> {
    let t = pipeline::run_compute(config)?;
    match config.format {
        OutputFormat::Text => print!("{}", crate::report::format_transform(&t)),
        OutputFormat::Json => crate::io::print_json(&t)?,
    }
    Ok(())
}

fn handle_table(config: &TableConfig) -> Result<(), AppError> {
    let rows = pipeline::run_table(config);
    match config.format {
        OutputFormat::Text => print!("{}", crate::report::format_table(&rows)),
        OutputFormat::Json => crate::io::print_json(&rows)?,
    }
    Ok(())
}

fn handle_sweep(config: &SweepConfig) -> Result<(), AppError> {
    let rows = pipeline::run_sweep(config)?;
    match config.format {
        OutputFormat::Text => print!("{}", crate::report::format_sweep(&rows)),
        OutputFormat::Json => crate::io::print_json(&rows)?,
    }

    if let Some(path) = &config.export {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            crate::io::write_json_file(path, &rows)?;
        } else {
            crate::io::write_sweep_csv(path, &rows)?;
        }
    }
    Ok(())
}

fn handle_matrix(config: &MatrixConfig) -> Result<(), AppError> {
    let run = pipeline::run_matrix(config)?;
    match config.format {
        OutputFormat::Text => print!(
            "{}",
            crate::report::format_matrix(
                &run.variables,
                &run.corr_y_matrix,
                run.cholesky_matrix.as_ref()
            )
        ),
        OutputFormat::Json => crate::io::print_json(&run)?,
    }

    if !run.positive_definite() {
        return Err(NatafError::NotPositiveDefinite.into());
    }
    Ok(())
}

pub fn compute_config_from_args(args: &ComputeArgs) -> ComputeConfig {
    ComputeConfig {
        dist1: args.dist1.clone(),
        dist2: args.dist2.clone(),
        corr: args.corr,
        cov1: args.cov1,
        cov2: args.cov2,
        format: args.output.resolved(),
    }
}

pub fn table_config_from_args(args: &TableArgs) -> TableConfig {
    let point = match (args.corr, args.cov1, args.cov2) {
        (Some(corr), Some(cov1), Some(cov2)) => Some((corr, cov1, cov2)),
        _ => None,
    };
    TableConfig {
        point,
        format: args.output.resolved(),
    }
}

pub fn sweep_config_from_args(args: &SweepArgs) -> SweepConfig {
    SweepConfig {
        dist1: args.dist1.clone(),
        dist2: args.dist2.clone(),
        cov1: args.cov1,
        cov2: args.cov2,
        corr_min: args.corr_min,
        corr_max: args.corr_max,
        steps: args.steps,
        export: args.export.clone(),
        format: args.output.resolved(),
    }
}

pub fn matrix_config_from_args(args: &MatrixArgs) -> MatrixConfig {
    MatrixConfig {
        spec: args.spec.clone(),
        format: args.output.resolved(),
    }
}
