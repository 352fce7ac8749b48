//! Nataf transform of a full correlation matrix.
//!
//! Each off-diagonal entry `ρ_ij` (i < j) is mapped with the pair model using
//! variable `i` as Dist1 and variable `j` as Dist2, so variables must be listed
//! in an order the coefficient table covers. The result is mirrored to keep the
//! matrix symmetric.
//!
//! A y-space matrix is only usable if it is positive definite; `cholesky_factor`
//! both checks this and returns the factor `L` with `L·Lᵀ = ρ_y`, which maps
//! independent standard normals to correlated ones.

use nalgebra::{Cholesky, DMatrix};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{DistributionTag, TransformInputs};
use crate::error::NatafError;
use crate::transform::transform;

/// Tolerance for the symmetry and unit-diagonal checks on the input matrix.
const SYMMETRY_TOL: f64 = 1e-12;

/// One random variable of the vector: its family and coefficient of variation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marginal {
    pub name: String,
    pub dist: DistributionTag,
    pub cov: f64,
}

/// y-space correlation matrix plus the ratio used for every entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixTransform {
    pub corr_y: DMatrix<f64>,
    /// `R_ij`; 1 on the diagonal and wherever `ρ_ij = 0`.
    pub ratio: DMatrix<f64>,
}

/// Map an original-space correlation matrix to standard-normal space.
///
/// Zero correlations stay zero without a table lookup.
///
/// # Errors
/// - [`NatafError::DimensionMismatch`] if `corr_x` is not `n×n` for `n` marginals
/// - [`NatafError::InvalidMatrixEntry`] for a diagonal entry other than 1 or a
///   non-finite off-diagonal entry
/// - [`NatafError::NotSymmetric`] if `corr_x` is not symmetric
/// - [`NatafError::DistributionPairUnsupported`] for an untabulated `(dist_i, dist_j)`
pub fn transform_matrix(
    marginals: &[Marginal],
    corr_x: &DMatrix<f64>,
) -> Result<MatrixTransform, NatafError> {
    let n = marginals.len();
    if corr_x.nrows() != n || corr_x.ncols() != n {
        return Err(NatafError::DimensionMismatch {
            expected: n,
            rows: corr_x.nrows(),
            cols: corr_x.ncols(),
        });
    }

    validate_entries(corr_x)?;

    let mut corr_y = DMatrix::<f64>::identity(n, n);
    let mut ratio = DMatrix::<f64>::from_element(n, n, 1.0);

    for i in 0..n {
        for j in (i + 1)..n {
            let corr = corr_x[(i, j)];
            if corr == 0.0 {
                corr_y[(i, j)] = 0.0;
                corr_y[(j, i)] = 0.0;
                continue;
            }

            let t = transform(&TransformInputs {
                dist1: marginals[i].dist,
                dist2: marginals[j].dist,
                corr,
                cov1: marginals[i].cov,
                cov2: marginals[j].cov,
            })?;

            debug!(
                x_i = %marginals[i].name,
                x_j = %marginals[j].name,
                corr,
                corr_y = t.result.corr_y,
                "matrix entry"
            );

            corr_y[(i, j)] = t.result.corr_y;
            corr_y[(j, i)] = t.result.corr_y;
            ratio[(i, j)] = t.result.r;
            ratio[(j, i)] = t.result.r;
        }
    }

    Ok(MatrixTransform { corr_y, ratio })
}

fn validate_entries(corr_x: &DMatrix<f64>) -> Result<(), NatafError> {
    let n = corr_x.nrows();
    for i in 0..n {
        let diag = corr_x[(i, i)];
        if !((diag - 1.0).abs() <= SYMMETRY_TOL) {
            return Err(NatafError::InvalidMatrixEntry { row: i, col: i, value: diag });
        }
        for j in (i + 1)..n {
            for (row, col) in [(i, j), (j, i)] {
                let value = corr_x[(row, col)];
                if !value.is_finite() {
                    return Err(NatafError::InvalidMatrixEntry { row, col, value });
                }
            }
            if !((corr_x[(i, j)] - corr_x[(j, i)]).abs() <= SYMMETRY_TOL) {
                return Err(NatafError::NotSymmetric { row: i, col: j });
            }
        }
    }
    Ok(())
}

/// Lower-triangular Cholesky factor of a y-space correlation matrix.
///
/// # Errors
/// Returns [`NatafError::NotPositiveDefinite`] if the factorisation fails,
/// including when the matrix contains NaN.
pub fn cholesky_factor(corr_y: &DMatrix<f64>) -> Result<DMatrix<f64>, NatafError> {
    if corr_y.iter().any(|v| !v.is_finite()) {
        return Err(NatafError::NotPositiveDefinite);
    }
    Cholesky::new(corr_y.clone())
        .map(|c| c.l())
        .ok_or(NatafError::NotPositiveDefinite)
}
