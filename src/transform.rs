//! Pair transform entry points.
//!
//! `compute_transformed_correlation` takes short codes as typed by a user;
//! `transform` takes already-parsed tags and also returns the coefficients.

use tracing::{debug, warn};

use crate::domain::{DistributionTag, Transform, TransformInputs, TransformResult};
use crate::error::NatafError;
use crate::models::{evaluate, resolve_coefficients};

/// Correlation in standard-normal space for two variables given by short codes.
///
/// Codes are parsed Dist1 first, then Dist2, before any table lookup. A pair
/// error reports the codes exactly as passed in.
///
/// # Errors
/// - [`NatafError::UnknownDistributionCode`] for an unrecognised code
/// - [`NatafError::DistributionPairUnsupported`] when the ordered pair is not tabulated
pub fn compute_transformed_correlation(
    dist1_code: &str,
    dist2_code: &str,
    corr: f64,
    cov1: f64,
    cov2: f64,
) -> Result<TransformResult, NatafError> {
    let dist1 = DistributionTag::from_code(dist1_code)?;
    let dist2 = DistributionTag::from_code(dist2_code)?;

    let inputs = TransformInputs {
        dist1,
        dist2,
        corr,
        cov1,
        cov2,
    };
    transform(&inputs)
        .map(|t| t.result)
        .map_err(|e| e.with_codes(dist1_code, dist2_code))
}

/// Resolve and evaluate a single pair.
pub fn transform(inputs: &TransformInputs) -> Result<Transform, NatafError> {
    let TransformInputs {
        dist1,
        dist2,
        corr,
        cov1,
        cov2,
    } = *inputs;

    let coefficients = resolve_coefficients(dist1, dist2, corr, cov1, cov2)?;
    let result = evaluate(&coefficients, corr, cov1, cov2);

    debug!(
        %dist1, %dist2, corr, cov1, cov2,
        coefficients = ?coefficients.to_array(),
        r = result.r,
        corr_y = result.corr_y,
        "evaluated pair"
    );
    if !result.corr_y.is_finite() {
        warn!(%dist1, %dist2, corr, cov1, cov2, r = result.r, "non-finite transformed correlation");
    } else if result.corr_y.abs() > 1.0 {
        warn!(
            %dist1, %dist2, corr, cov1, cov2,
            corr_y = result.corr_y,
            "transformed correlation outside [-1, 1]"
        );
    }

    Ok(Transform {
        inputs: *inputs,
        coefficients,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reference_example_gamma_lognormal() {
        let res = compute_transformed_correlation("GM", "LN", 0.9, 1.0, 1.0).unwrap();
        assert!((res.r - 1.20162).abs() < 1e-12, "R = {}", res.r);
        assert!((res.corr_y - 1.081458).abs() < 1e-12, "CorrY = {}", res.corr_y);
    }

    #[test]
    fn codes_are_case_insensitive() {
        let upper = compute_transformed_correlation("GM", "LN", 0.9, 1.0, 1.0).unwrap();
        let lower = compute_transformed_correlation("gm", "ln", 0.9, 1.0, 1.0).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn normal_normal_is_identity() {
        let res = compute_transformed_correlation("n", "n", 0.42, 0.1, 0.3).unwrap();
        assert_eq!(res.r, 1.0);
        assert_eq!(res.corr_y, 0.42);
    }

    #[test]
    fn uniform_partner_is_unsupported() {
        match compute_transformed_correlation("N", "u", 0.5, 0.2, 0.2) {
            Err(NatafError::DistributionPairUnsupported { dist1, dist2, code1, code2 }) => {
                assert_eq!(dist1, DistributionTag::Normal);
                assert_eq!(dist2, DistributionTag::Uniform);
                assert_eq!(code1, "N");
                assert_eq!(code2, "u");
            }
            other => panic!("expected DistributionPairUnsupported, got {other:?}"),
        }
        for code in ["N", "U", "SE", "SR", "G", "LN", "GM", "W"] {
            assert!(matches!(
                compute_transformed_correlation(code, "U", 0.5, 0.2, 0.2),
                Err(NatafError::DistributionPairUnsupported { .. })
            ));
        }
    }

    #[test]
    fn unknown_code_fails_before_lookup() {
        match compute_transformed_correlation("XYZ", "U", 0.5, 0.2, 0.2) {
            Err(NatafError::UnknownDistributionCode { code }) => assert_eq!(code, "XYZ"),
            other => panic!("expected UnknownDistributionCode, got {other:?}"),
        }
        match compute_transformed_correlation("N", "qq", 0.5, 0.2, 0.2) {
            Err(NatafError::UnknownDistributionCode { code }) => assert_eq!(code, "qq"),
            other => panic!("expected UnknownDistributionCode, got {other:?}"),
        }
    }

    #[test]
    fn swapped_pair_is_not_retried() {
        assert!(compute_transformed_correlation("W", "GM", 0.5, 0.2, 0.3).is_ok());
        assert!(matches!(
            compute_transformed_correlation("GM", "W", 0.5, 0.3, 0.2),
            Err(NatafError::DistributionPairUnsupported { .. })
        ));
    }

    #[test]
    fn lognormal_lognormal_zero_correlation_propagates_nan() {
        let res = compute_transformed_correlation("LN", "LN", 0.0, 0.3, 0.4).unwrap();
        assert!(res.r.is_nan());
        assert!(res.corr_y.is_nan());
    }

    #[test]
    fn transform_returns_coefficients() {
        let inputs = TransformInputs {
            dist1: DistributionTag::WeibullMin,
            dist2: DistributionTag::Normal,
            corr: 0.3,
            cov1: 0.5,
            cov2: 0.2,
        };
        let t = transform(&inputs).unwrap();
        assert_eq!(t.inputs, inputs);
        assert_eq!(t.coefficients.b, -0.195);
        let expected = 1.031 - 0.195 * 0.5 + 0.328 * 0.25;
        assert!((t.result.r - expected).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn repeated_calls_are_bit_identical(
            pair in prop::sample::select(crate::models::supported_pairs().collect::<Vec<_>>()),
            corr in -0.99f64..0.99,
            cov1 in 0.05f64..1.5,
            cov2 in 0.05f64..1.5,
        ) {
            let (d1, d2) = pair;
            let a = compute_transformed_correlation(d1.code(), d2.code(), corr, cov1, cov2).unwrap();
            let b = compute_transformed_correlation(d1.code(), d2.code(), corr, cov1, cov2).unwrap();
            prop_assert_eq!(a.r.to_bits(), b.r.to_bits());
            prop_assert_eq!(a.corr_y.to_bits(), b.corr_y.to_bits());
        }
    }
}
