//! Shared command logic, kept separate from printing.
//!
//! Each `run_*` function turns a config into computed outputs; `app` decides
//! how to present them.

use nalgebra::DMatrix;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{
    ComputeConfig, DistributionTag, MatrixConfig, SweepConfig, TableConfig, Transform,
    TransformInputs,
};
use crate::error::{AppError, NatafError};
use crate::io::ingest::read_matrix_spec;
use crate::math::{Marginal, cholesky_factor, transform_matrix};
use crate::report::{TableRow, table_rows};
use crate::sweep::{linear_grid, sweep_correlation};
use crate::transform::transform;

/// Parse both codes, Dist1 first.
fn parse_pair(code1: &str, code2: &str) -> Result<(DistributionTag, DistributionTag), NatafError> {
    Ok((DistributionTag::from_code(code1)?, DistributionTag::from_code(code2)?))
}

/// `nataf compute`.
pub fn run_compute(config: &ComputeConfig) -> Result<Transform, AppError> {
    let (dist1, dist2) = parse_pair(&config.dist1, &config.dist2)?;
    let inputs = TransformInputs {
        dist1,
        dist2,
        corr: config.corr,
        cov1: config.cov1,
        cov2: config.cov2,
    };
    let t = transform(&inputs).map_err(|e| e.with_codes(&config.dist1, &config.dist2))?;
    Ok(t)
}

/// `nataf table`.
pub fn run_table(config: &TableConfig) -> Vec<TableRow> {
    table_rows(config.point)
}

/// `nataf sweep`.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<Transform>, AppError> {
    let (dist1, dist2) = parse_pair(&config.dist1, &config.dist2)?;
    let grid = linear_grid(config.corr_min, config.corr_max, config.steps)?;
    let rows = sweep_correlation(dist1, dist2, config.cov1, config.cov2, &grid)
        .map_err(|e| e.with_codes(&config.dist1, &config.dist2))?;

    let outside = rows
        .iter()
        .filter(|t| t.result.corr_y.abs() > 1.0 || !t.result.corr_y.is_finite())
        .count();
    if outside > 0 {
        warn!(outside, "sweep points with |corr_y| > 1 or non-finite corr_y");
    }
    Ok(rows)
}

/// Outputs of `nataf matrix`.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixRun {
    pub variables: Vec<Marginal>,
    pub corr_x: Vec<Vec<f64>>,
    pub corr_y: Vec<Vec<f64>>,
    pub ratio: Vec<Vec<f64>>,
    /// Lower Cholesky factor of `corr_y`; `None` if it is not positive definite.
    pub cholesky: Option<Vec<Vec<f64>>>,
    #[serde(skip)]
    pub corr_y_matrix: DMatrix<f64>,
    #[serde(skip)]
    pub cholesky_matrix: Option<DMatrix<f64>>,
}

impl MatrixRun {
    pub fn positive_definite(&self) -> bool {
        self.cholesky_matrix.is_some()
    }
}

/// `nataf matrix`.
///
/// An indefinite y-space matrix is not an error here; the caller reports it.
pub fn run_matrix(config: &MatrixConfig) -> Result<MatrixRun, AppError> {
    let input = read_matrix_spec(&config.spec)?.into_input()?;
    let out = transform_matrix(&input.marginals, &input.corr)?;

    let cholesky_matrix = match cholesky_factor(&out.corr_y) {
        Ok(l) => Some(l),
        Err(NatafError::NotPositiveDefinite) => None,
        Err(e) => return Err(e.into()),
    };
    info!(
        variables = input.marginals.len(),
        positive_definite = cholesky_matrix.is_some(),
        "matrix transform done"
    );

    Ok(MatrixRun {
        variables: input.marginals,
        corr_x: to_rows(&input.corr),
        corr_y: to_rows(&out.corr_y),
        ratio: to_rows(&out.ratio),
        cholesky: cholesky_matrix.as_ref().map(to_rows),
        corr_y_matrix: out.corr_y,
        cholesky_matrix,
    })
}

fn to_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    (0..m.nrows())
        .map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutputFormat;
    use std::io::Write;

    fn compute_config(dist1: &str, dist2: &str) -> ComputeConfig {
        ComputeConfig {
            dist1: dist1.to_string(),
            dist2: dist2.to_string(),
            corr: 0.9,
            cov1: 1.0,
            cov2: 1.0,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn compute_reports_caller_codes() {
        let err = run_compute(&compute_config("gm", "w")).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("'gm'"));

        let err = run_compute(&compute_config("XYZ", "w")).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let t = run_compute(&compute_config("gm", "ln")).unwrap();
        assert!((t.result.corr_y - 1.081458).abs() < 1e-12);
    }

    #[test]
    fn sweep_validates_grid() {
        let config = SweepConfig {
            dist1: "SE".to_string(),
            dist2: "N".to_string(),
            cov1: 0.5,
            cov2: 0.2,
            corr_min: 0.5,
            corr_max: -0.5,
            steps: 5,
            export: None,
            format: OutputFormat::Text,
        };
        assert_eq!(run_sweep(&config).unwrap_err().exit_code(), 2);

        let huge = SweepConfig { corr_min: -0.5, corr_max: 0.5, steps: usize::MAX, ..config.clone() };
        assert_eq!(run_sweep(&huge).unwrap_err().exit_code(), 2);

        let config = SweepConfig { corr_min: -0.5, corr_max: 0.5, ..config };
        let rows = run_sweep(&config).unwrap();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|t| (t.result.r - 1.107).abs() < 1e-15));
    }

    #[test]
    fn matrix_flags_indefinite_result() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "variables": [
                    {{"name": "a", "dist": "N", "cov": 0.1}},
                    {{"name": "b", "dist": "N", "cov": 0.1}},
                    {{"name": "c", "dist": "N", "cov": 0.1}}
                ],
                "corr": [[1.0, 0.9, 0.9], [0.9, 1.0, -0.9], [0.9, -0.9, 1.0]]
            }}"#
        )
        .unwrap();

        let run = run_matrix(&MatrixConfig {
            spec: file.path().to_path_buf(),
            format: OutputFormat::Text,
        })
        .unwrap();
        assert!(!run.positive_definite());
        assert!(run.cholesky.is_none());
        assert_eq!(run.corr_y[1][2], -0.9);
    }
}
