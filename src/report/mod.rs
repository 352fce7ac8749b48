//! Reporting utilities: table listings and formatted terminal output.

use serde::Serialize;

use crate::domain::{CoefficientSet, DistributionTag, TransformResult};
use crate::models::{CoefficientKind, entries};

pub mod format;

pub use format::*;

/// One line of the `nataf table` listing.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub dist1: DistributionTag,
    pub dist2: DistributionTag,
    pub formula: bool,
    /// Always present for constant entries; present for formula entries only
    /// when an evaluation point was given.
    pub coefficients: Option<CoefficientSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TransformResult>,
}

/// Build the table listing, optionally evaluating every pair at `(corr, cov1, cov2)`.
pub fn table_rows(point: Option<(f64, f64, f64)>) -> Vec<TableRow> {
    entries()
        .iter()
        .map(|entry| {
            let formula = entry.kind() == CoefficientKind::Formula;
            let coefficients = match point {
                Some((corr, cov1, cov2)) => Some(entry.coefficients(corr, cov1, cov2)),
                None if formula => None,
                // Constant entries ignore the inputs.
                None => Some(entry.coefficients(f64::NAN, f64::NAN, f64::NAN)),
            };
            let result = point.and_then(|(corr, cov1, cov2)| {
                coefficients.map(|c| crate::models::evaluate(&c, corr, cov1, cov2))
            });
            TableRow {
                dist1: entry.dist1,
                dist2: entry.dist2,
                formula,
                coefficients,
                result,
            }
        })
        .collect()
}
