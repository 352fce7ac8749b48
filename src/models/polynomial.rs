//! Ratio polynomial evaluation.
//!
//! ```text
//! R = a + b·V1 + c·V1² + d·ρ + e·ρ² + f·ρ·V1 + g·V2 + h·V2² + k·ρ·V2 + l·V1·V2
//! ρ_y = R · ρ
//! ```
//!
//! The result is not range-checked: at large CoV or |ρ| the approximation can
//! give |ρ_y| > 1.

use crate::domain::{CoefficientSet, TransformResult};

/// Evaluate `R` for the given coefficients and inputs.
pub fn ratio(coeffs: &CoefficientSet, corr: f64, cov1: f64, cov2: f64) -> f64 {
    let CoefficientSet { a, b, c, d, e, f, g, h, k, l } = *coeffs;
    a + b * cov1
        + c * cov1 * cov1
        + d * corr
        + e * corr * corr
        + f * corr * cov1
        + g * cov2
        + h * cov2 * cov2
        + k * corr * cov2
        + l * cov1 * cov2
}

/// Evaluate `R` and the transformed correlation `R · corr`.
pub fn evaluate(coeffs: &CoefficientSet, corr: f64, cov1: f64, cov2: f64) -> TransformResult {
    let r = ratio(coeffs, corr, cov1, cov2);
    TransformResult { r, corr_y: r * corr }
}
