//! Coefficient table for the Nataf ratio polynomial.
//!
//! Values are the Liu & Der Kiureghian (1986) approximations as tabulated in
//! Melchers (2002), Appendix B.2.
//!
//! The table is keyed by `(dist2, dist1)`: rows are grouped by the second
//! variable's distribution, then searched for the first. Only the pair
//! directions listed in the reference are present, so the table is not
//! symmetric. `(Gamma, WeibullMin)` is missing even though
//! `(WeibullMin, Gamma)` is tabulated, and there are no rows for `Uniform`
//! at all. Lookups never retry with the pair swapped.

use crate::domain::{CoefficientSet, DistributionTag};
use crate::error::NatafError;

use crate::domain::DistributionTag::{
    Gamma, GumbelMax, Lognormal, Normal, ShiftedExponential, ShiftedRayleigh, WeibullMin,
};

/// Where an entry's coefficients come from.
#[derive(Debug, Clone, Copy)]
pub enum CoefficientSource {
    /// Fixed empirical constants.
    Constant(CoefficientSet),
    /// Closed-form expression in `(corr, cov1, cov2)`.
    Formula(fn(f64, f64, f64) -> CoefficientSet),
}

/// Discriminant of [`CoefficientSource`], for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoefficientKind {
    Constant,
    Formula,
}

/// One tabulated `(dist1, dist2)` pair.
#[derive(Debug, Clone, Copy)]
pub struct TableEntry {
    pub dist1: DistributionTag,
    pub dist2: DistributionTag,
    pub source: CoefficientSource,
}

impl TableEntry {
    /// Coefficients for this pair at the given inputs.
    ///
    /// Constant entries ignore the inputs.
    pub fn coefficients(&self, corr: f64, cov1: f64, cov2: f64) -> CoefficientSet {
        match self.source {
            CoefficientSource::Constant(set) => set,
            CoefficientSource::Formula(formula) => formula(corr, cov1, cov2),
        }
    }

    pub fn kind(&self) -> CoefficientKind {
        match self.source {
            CoefficientSource::Constant(_) => CoefficientKind::Constant,
            CoefficientSource::Formula(_) => CoefficientKind::Formula,
        }
    }
}

const fn constant(dist1: DistributionTag, dist2: DistributionTag, v: [f64; 10]) -> TableEntry {
    TableEntry {
        dist1,
        dist2,
        source: CoefficientSource::Constant(CoefficientSet::from_array(v)),
    }
}

const fn formula(
    dist1: DistributionTag,
    dist2: DistributionTag,
    f: fn(f64, f64, f64) -> CoefficientSet,
) -> TableEntry {
    TableEntry {
        dist1,
        dist2,
        source: CoefficientSource::Formula(f),
    }
}

/// Lognormal (Dist1) with Normal (Dist2).
///
/// The reference expression uses the second variable's CoV; it is kept as published.
fn lognormal_normal(_corr: f64, _cov1: f64, cov2: f64) -> CoefficientSet {
    CoefficientSet::constant(cov2 / (cov2 * cov2).ln_1p().sqrt())
}

/// Lognormal with Lognormal: exact result for the ratio.
///
/// `corr = 0` gives `0/0 = NaN`.
fn lognormal_lognormal(corr: f64, cov1: f64, cov2: f64) -> CoefficientSet {
    let numer = (corr * cov1 * cov2).ln_1p();
    let denom = corr * ((cov1 * cov1).ln_1p() * (cov2 * cov2).ln_1p()).sqrt();
    CoefficientSet::constant(numer / denom)
}

#[rustfmt::skip]
static TABLE: [TableEntry; 28] = [
    // Dist2 = Normal
    constant(Normal,             Normal, [1.0,   0.0,    0.0,   0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    constant(ShiftedExponential, Normal, [1.107, 0.0,    0.0,   0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    constant(ShiftedRayleigh,    Normal, [1.014, 0.0,    0.0,   0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    constant(GumbelMax,          Normal, [1.031, 0.0,    0.0,   0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    formula(Lognormal,           Normal, lognormal_normal),
    constant(Gamma,              Normal, [1.001, -0.007, 0.118, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    constant(WeibullMin,         Normal, [1.031, -0.195, 0.328, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),

    // Dist2 = Shifted Exponential
    constant(ShiftedExponential, ShiftedExponential, [1.229, 0.0,    0.0,   -0.367, 0.153, 0.0,    0.0, 0.0, 0.0, 0.0]),
    constant(ShiftedRayleigh,    ShiftedExponential, [1.123, 0.0,    0.0,   -0.1,   0.021, 0.0,    0.0, 0.0, 0.0, 0.0]),
    constant(GumbelMax,          ShiftedExponential, [1.142, 0.0,    0.0,   -0.154, 0.031, 0.0,    0.0, 0.0, 0.0, 0.0]),
    constant(Lognormal,          ShiftedExponential, [1.098, 0.019,  0.303, 0.003,  0.025, -0.437, 0.0, 0.0, 0.0, 0.0]),
    constant(Gamma,              ShiftedExponential, [1.104, -0.008, 0.173, 0.003,  0.014, -0.296, 0.0, 0.0, 0.0, 0.0]),
    constant(WeibullMin,         ShiftedExponential, [1.147, 0.145,  0.010, -0.271, 0.459, -0.467, 0.0, 0.0, 0.0, 0.0]),

    // Dist2 = Shifted Rayleigh
    constant(ShiftedRayleigh,    ShiftedRayleigh, [1.028, 0.0,    0.0,   -0.029, 0.0,   0.0,    0.0, 0.0, 0.0, 0.0]),
    constant(GumbelMax,          ShiftedRayleigh, [1.046, 0.0,    0.0,   -0.045, 0.006, 0.0,    0.0, 0.0, 0.0, 0.0]),
    constant(Lognormal,          ShiftedRayleigh, [1.011, 0.014,  0.231, 0.001,  0.004, -0.130, 0.0, 0.0, 0.0, 0.0]),
    constant(Gamma,              ShiftedRayleigh, [1.014, -0.007, 0.126, 0.001,  0.002, -0.090, 0.0, 0.0, 0.0, 0.0]),
    constant(WeibullMin,         ShiftedRayleigh, [1.047, -0.212, 0.353, 0.042,  0.0,   -0.136, 0.0, 0.0, 0.0, 0.0]),

    // Dist2 = Gumbel
    constant(GumbelMax,          GumbelMax, [1.064, 0.0,    0.0,   -0.069, 0.005, 0.0,    0.0, 0.0, 0.0, 0.0]),
    constant(Lognormal,          GumbelMax, [1.029, 0.014,  0.233, 0.001,  0.004, -0.197, 0.0, 0.0, 0.0, 0.0]),
    constant(Gamma,              GumbelMax, [1.031, -0.007, 0.131, 0.001,  0.003, -0.132, 0.0, 0.0, 0.0, 0.0]),
    constant(WeibullMin,         GumbelMax, [1.064, -0.210, 0.356, 0.065,  0.003, -0.211, 0.0, 0.0, 0.0, 0.0]),

    // Dist2 = Lognormal
    formula(Lognormal,           Lognormal, lognormal_lognormal),
    constant(Gamma,              Lognormal, [1.001, 0.004, 0.223, 0.033, 0.002, -0.104, -0.016, 0.130, -0.119, 0.029]),
    constant(WeibullMin,         Lognormal, [1.031, 0.052, 0.220, 0.052, 0.002, 0.005,  -0.210, 0.350, -0.174, 0.009]),

    // Dist2 = Gamma
    constant(Gamma,              Gamma, [1.002, -0.012, 0.125, 0.022, 0.001, -0.077, -0.012, 0.125, -0.077, 0.014]),
    constant(WeibullMin,         Gamma, [1.032, -0.007, 0.121, 0.034, 0.0,   -0.006, -0.202, 0.339, -0.111, 0.003]),

    // Dist2 = Weibull
    constant(WeibullMin,         WeibullMin, [1.063, -0.200, 0.337, -0.004, -0.001, 0.007, -0.200, 0.337, 0.007, -0.007]),
];

/// All tabulated entries, grouped by `dist2` in reference order.
pub fn entries() -> &'static [TableEntry] {
    &TABLE
}

/// Find the entry for `(dist1, dist2)`, if tabulated.
pub fn lookup(dist1: DistributionTag, dist2: DistributionTag) -> Option<&'static TableEntry> {
    TABLE
        .iter()
        .filter(|entry| entry.dist2 == dist2)
        .find(|entry| entry.dist1 == dist1)
}

pub fn is_supported(dist1: DistributionTag, dist2: DistributionTag) -> bool {
    lookup(dist1, dist2).is_some()
}

/// Every supported `(dist1, dist2)` pair, in table order.
pub fn supported_pairs() -> impl Iterator<Item = (DistributionTag, DistributionTag)> {
    TABLE.iter().map(|entry| (entry.dist1, entry.dist2))
}

/// Resolve the polynomial coefficients for an ordered pair.
///
/// `corr`, `cov1` and `cov2` are only read by the formula-based entries.
///
/// # Errors
/// Returns [`NatafError::DistributionPairUnsupported`] when the pair is not
/// tabulated. The error carries the canonical codes of both tags.
pub fn resolve_coefficients(
    dist1: DistributionTag,
    dist2: DistributionTag,
    corr: f64,
    cov1: f64,
    cov2: f64,
) -> Result<CoefficientSet, NatafError> {
    lookup(dist1, dist2)
        .map(|entry| entry.coefficients(corr, cov1, cov2))
        .ok_or_else(|| NatafError::DistributionPairUnsupported {
            dist1,
            dist2,
            code1: dist1.code().to_string(),
            code2: dist2.code().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DistributionTag::Uniform;

    fn resolve_const(dist1: DistributionTag, dist2: DistributionTag) -> [f64; 10] {
        resolve_coefficients(dist1, dist2, 0.5, 0.3, 0.4).unwrap().to_array()
    }

    #[test]
    fn golden_constants_dist2_normal() {
        assert_eq!(resolve_const(Normal, Normal), [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(ShiftedExponential, Normal), [1.107, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(ShiftedRayleigh, Normal), [1.014, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(GumbelMax, Normal), [1.031, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(Gamma, Normal), [1.001, -0.007, 0.118, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(WeibullMin, Normal), [1.031, -0.195, 0.328, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn golden_constants_dist2_shifted_exponential() {
        let se = ShiftedExponential;
        assert_eq!(resolve_const(se, se), [1.229, 0.0, 0.0, -0.367, 0.153, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(ShiftedRayleigh, se), [1.123, 0.0, 0.0, -0.1, 0.021, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(GumbelMax, se), [1.142, 0.0, 0.0, -0.154, 0.031, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(Lognormal, se), [1.098, 0.019, 0.303, 0.003, 0.025, -0.437, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(Gamma, se), [1.104, -0.008, 0.173, 0.003, 0.014, -0.296, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(WeibullMin, se), [1.147, 0.145, 0.010, -0.271, 0.459, -0.467, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn golden_constants_dist2_shifted_rayleigh() {
        let sr = ShiftedRayleigh;
        assert_eq!(resolve_const(sr, sr), [1.028, 0.0, 0.0, -0.029, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(GumbelMax, sr), [1.046, 0.0, 0.0, -0.045, 0.006, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(Lognormal, sr), [1.011, 0.014, 0.231, 0.001, 0.004, -0.130, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(Gamma, sr), [1.014, -0.007, 0.126, 0.001, 0.002, -0.090, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(WeibullMin, sr), [1.047, -0.212, 0.353, 0.042, 0.0, -0.136, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn golden_constants_dist2_gumbel() {
        let g = GumbelMax;
        assert_eq!(resolve_const(g, g), [1.064, 0.0, 0.0, -0.069, 0.005, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(Lognormal, g), [1.029, 0.014, 0.233, 0.001, 0.004, -0.197, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(Gamma, g), [1.031, -0.007, 0.131, 0.001, 0.003, -0.132, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(resolve_const(WeibullMin, g), [1.064, -0.210, 0.356, 0.065, 0.003, -0.211, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn golden_constants_dist2_lognormal_gamma_weibull() {
        assert_eq!(
            resolve_const(Gamma, Lognormal),
            [1.001, 0.004, 0.223, 0.033, 0.002, -0.104, -0.016, 0.130, -0.119, 0.029]
        );
        assert_eq!(
            resolve_const(WeibullMin, Lognormal),
            [1.031, 0.052, 0.220, 0.052, 0.002, 0.005, -0.210, 0.350, -0.174, 0.009]
        );
        assert_eq!(
            resolve_const(Gamma, Gamma),
            [1.002, -0.012, 0.125, 0.022, 0.001, -0.077, -0.012, 0.125, -0.077, 0.014]
        );
        assert_eq!(
            resolve_const(WeibullMin, Gamma),
            [1.032, -0.007, 0.121, 0.034, 0.0, -0.006, -0.202, 0.339, -0.111, 0.003]
        );
        assert_eq!(
            resolve_const(WeibullMin, WeibullMin),
            [1.063, -0.200, 0.337, -0.004, -0.001, 0.007, -0.200, 0.337, 0.007, -0.007]
        );
    }

    #[test]
    fn lognormal_lognormal_closed_form() {
        let set = resolve_coefficients(Lognormal, Lognormal, 0.5, 0.3, 0.4).unwrap();
        let expected = (1.0_f64 + 0.5 * 0.3 * 0.4).ln()
            / (0.5 * ((1.09_f64).ln() * (1.16_f64).ln()).sqrt());
        assert!((set.a - expected).abs() < 1e-9, "a={} expected={expected}", set.a);
        assert_eq!(set.to_array()[1..], [0.0; 9]);
    }

    #[test]
    fn lognormal_normal_uses_second_cov() {
        let set = resolve_coefficients(Lognormal, Normal, 0.5, 7.0, 0.4).unwrap();
        let expected = 0.4 / (1.16_f64).ln().sqrt();
        assert!((set.a - expected).abs() < 1e-12);
        assert_eq!(set.to_array()[1..], [0.0; 9]);
    }

    #[test]
    fn lognormal_lognormal_zero_correlation_is_nan() {
        let set = resolve_coefficients(Lognormal, Lognormal, 0.0, 0.3, 0.4).unwrap();
        assert!(set.a.is_nan());
    }

    #[test]
    fn table_is_asymmetric() {
        assert!(is_supported(WeibullMin, Gamma));
        assert!(!is_supported(Gamma, WeibullMin));
        assert!(is_supported(Lognormal, Normal));
        assert!(!is_supported(Normal, Lognormal));

        match resolve_coefficients(Gamma, WeibullMin, 0.5, 0.3, 0.4) {
            Err(NatafError::DistributionPairUnsupported { dist1, dist2, code1, code2 }) => {
                assert_eq!((dist1, dist2), (Gamma, WeibullMin));
                assert_eq!((code1.as_str(), code2.as_str()), ("GM", "W"));
            }
            other => panic!("expected DistributionPairUnsupported, got {other:?}"),
        }
    }

    #[test]
    fn uniform_is_never_supported() {
        for tag in DistributionTag::ALL {
            assert!(!is_supported(tag, Uniform), "({tag:?}, Uniform)");
            assert!(!is_supported(Uniform, tag), "(Uniform, {tag:?})");
        }
    }

    #[test]
    fn coverage_matches_reference_partitions() {
        // Outer key in table order, with the number of inner tags it admits.
        let expected = [
            (Normal, 7),
            (ShiftedExponential, 6),
            (ShiftedRayleigh, 5),
            (GumbelMax, 4),
            (Lognormal, 3),
            (Gamma, 2),
            (WeibullMin, 1),
        ];
        for (dist2, count) in expected {
            let n = supported_pairs().filter(|&(_, d2)| d2 == dist2).count();
            assert_eq!(n, count, "partition {dist2:?}");
        }
        assert_eq!(supported_pairs().count(), 28);

        let mut pairs: Vec<_> = supported_pairs().collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), 28, "duplicate table rows");
    }

    #[test]
    fn only_lognormal_pairs_are_formulas() {
        let formulas: Vec<_> = entries()
            .iter()
            .filter(|e| e.kind() == CoefficientKind::Formula)
            .map(|e| (e.dist1, e.dist2))
            .collect();
        assert_eq!(formulas, vec![(Lognormal, Normal), (Lognormal, Lognormal)]);
    }
}
