//! Matrix-spec ingest.
//!
//! A matrix spec is a JSON file describing a random vector:
//!
//! ```json
//! {
//!   "variables": [
//!     { "name": "load", "dist": "W",  "cov": 0.3 },
//!     { "name": "resistance", "dist": "ln", "cov": 0.1 }
//!   ],
//!   "corr": [[1.0, 0.4], [0.4, 1.0]]
//! }
//! ```
//!
//! Distribution codes are matched case-insensitively. Variable order is kept:
//! it decides which variable of each pair is Dist1.

use std::fs::File;
use std::path::Path;

use nalgebra::DMatrix;
use serde::Deserialize;

use crate::domain::DistributionTag;
use crate::error::AppError;
use crate::math::Marginal;

#[derive(Debug, Clone, Deserialize)]
pub struct MatrixSpec {
    pub variables: Vec<VariableSpec>,
    pub corr: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariableSpec {
    pub name: String,
    pub dist: String,
    pub cov: f64,
}

/// Parsed, validated spec.
#[derive(Debug, Clone)]
pub struct MatrixInput {
    pub marginals: Vec<Marginal>,
    pub corr: DMatrix<f64>,
}

/// Read and parse a matrix spec file.
pub fn read_matrix_spec(path: &Path) -> Result<MatrixSpec, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open matrix spec '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid matrix spec JSON: {e}")))
}

impl MatrixSpec {
    /// Resolve distribution codes and build the correlation matrix.
    ///
    /// Only the shape is checked here; symmetry is checked by the transform.
    pub fn into_input(self) -> Result<MatrixInput, AppError> {
        let n = self.variables.len();
        if n == 0 {
            return Err(AppError::new(2, "Matrix spec has no variables."));
        }
        if self.corr.len() != n {
            return Err(AppError::new(
                2,
                format!("Matrix spec has {n} variables but {} correlation rows.", self.corr.len()),
            ));
        }
        if let Some((idx, row)) = self.corr.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(AppError::new(
                2,
                format!("Correlation row {idx} has {} entries, expected {n}.", row.len()),
            ));
        }

        let marginals = self
            .variables
            .into_iter()
            .map(|v| {
                let dist = DistributionTag::from_code(&v.dist)
                    .map_err(|e| AppError::new(2, format!("Variable '{}': {e}", v.name)))?;
                Ok(Marginal {
                    name: v.name,
                    dist,
                    cov: v.cov,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let flat: Vec<f64> = self.corr.into_iter().flatten().collect();
        let corr = DMatrix::from_row_slice(n, n, &flat);

        Ok(MatrixInput { marginals, corr })
    }
}
