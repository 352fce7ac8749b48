//! Parallel evaluation of pair transforms.
//!
//! Every point is independent, so both sweeps are a `par_iter().map()` over
//! the inputs. Rayon's indexed collect keeps results in input order.

use rayon::prelude::*;
use tracing::info;

use crate::domain::{DistributionTag, Transform, TransformInputs};
use crate::error::NatafError;
use crate::models::{is_supported, supported_pairs};
use crate::transform::transform;

/// Evaluate `(dist1, dist2)` at every correlation in `grid`.
///
/// # Errors
/// Fails with [`NatafError::DistributionPairUnsupported`] before evaluating
/// anything if the pair is not tabulated.
pub fn sweep_correlation(
    dist1: DistributionTag,
    dist2: DistributionTag,
    cov1: f64,
    cov2: f64,
    grid: &[f64],
) -> Result<Vec<Transform>, NatafError> {
    if !is_supported(dist1, dist2) {
        return Err(NatafError::DistributionPairUnsupported {
            dist1,
            dist2,
            code1: dist1.code().to_string(),
            code2: dist2.code().to_string(),
        });
    }

    let rows = grid
        .par_iter()
        .map(|&corr| {
            transform(&TransformInputs {
                dist1,
                dist2,
                corr,
                cov1,
                cov2,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(%dist1, %dist2, points = rows.len(), "correlation sweep done");
    Ok(rows)
}

/// Evaluate every tabulated pair at one input point, in table order.
///
/// # Errors
/// Only fails if a pair listed by the table cannot be resolved from it.
pub fn sweep_table(corr: f64, cov1: f64, cov2: f64) -> Result<Vec<Transform>, NatafError> {
    let pairs: Vec<(DistributionTag, DistributionTag)> = supported_pairs().collect();

    pairs
        .par_iter()
        .map(|&(dist1, dist2)| {
            transform(&TransformInputs {
                dist1,
                dist2,
                corr,
                cov1,
                cov2,
            })
        })
        .collect()
}
