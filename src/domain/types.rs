//! Shared domain types.
//!
//! These are small value types so they can be:
//!
//! - passed by value through the table lookup and the polynomial
//! - exported to JSON/CSV
//! - shared across rayon workers without synchronisation

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::NatafError;

/// Marginal distribution family of a single random variable.
///
/// Each family has a short code used at the boundary (CLI arguments, matrix
/// spec files). Codes are matched case-insensitively by [`DistributionTag::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DistributionTag {
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "U")]
    Uniform,
    #[serde(rename = "SE")]
    ShiftedExponential,
    #[serde(rename = "SR")]
    ShiftedRayleigh,
    /// Extreme value type I, largest values.
    #[serde(rename = "G")]
    GumbelMax,
    #[serde(rename = "LN")]
    Lognormal,
    #[serde(rename = "GM")]
    Gamma,
    /// Extreme value type III, smallest values.
    #[serde(rename = "W")]
    WeibullMin,
}

impl DistributionTag {
    pub const ALL: [DistributionTag; 8] = [
        DistributionTag::Normal,
        DistributionTag::Uniform,
        DistributionTag::ShiftedExponential,
        DistributionTag::ShiftedRayleigh,
        DistributionTag::GumbelMax,
        DistributionTag::Lognormal,
        DistributionTag::Gamma,
        DistributionTag::WeibullMin,
    ];

    /// Parse a short code (`N`, `U`, `SE`, `SR`, `G`, `LN`, `GM`, `W`), ignoring case.
    ///
    /// Surrounding whitespace is not stripped: `" N"` is an unknown code.
    pub fn from_code(code: &str) -> Result<Self, NatafError> {
        DistributionTag::ALL
            .into_iter()
            .find(|tag| tag.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| NatafError::UnknownDistributionCode {
                code: code.to_string(),
            })
    }

    /// Canonical (upper-case) short code.
    pub fn code(self) -> &'static str {
        match self {
            DistributionTag::Normal => "N",
            DistributionTag::Uniform => "U",
            DistributionTag::ShiftedExponential => "SE",
            DistributionTag::ShiftedRayleigh => "SR",
            DistributionTag::GumbelMax => "G",
            DistributionTag::Lognormal => "LN",
            DistributionTag::Gamma => "GM",
            DistributionTag::WeibullMin => "W",
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            DistributionTag::Normal => "Normal",
            DistributionTag::Uniform => "Uniform",
            DistributionTag::ShiftedExponential => "Shifted Exponential",
            DistributionTag::ShiftedRayleigh => "Shifted Rayleigh",
            DistributionTag::GumbelMax => "Gumbel (EV-I largest)",
            DistributionTag::Lognormal => "Lognormal",
            DistributionTag::Gamma => "Gamma",
            DistributionTag::WeibullMin => "Weibull (EV-III smallest)",
        }
    }
}

impl fmt::Display for DistributionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DistributionTag {
    type Err = NatafError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistributionTag::from_code(s)
    }
}

/// Coefficients `(a, b, c, d, e, f, g, h, k, l)` of the ratio polynomial
///
/// `R = a + b·V1 + c·V1² + d·ρ + e·ρ² + f·ρ·V1 + g·V2 + h·V2² + k·ρ·V2 + l·V1·V2`
///
/// where `ρ` is the original-space correlation and `V1`, `V2` the coefficients
/// of variation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoefficientSet {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub k: f64,
    pub l: f64,
}

impl CoefficientSet {
    /// Coefficient names in polynomial order.
    pub const NAMES: [&'static str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "k", "l"];

    pub const fn from_array(v: [f64; 10]) -> Self {
        Self {
            a: v[0],
            b: v[1],
            c: v[2],
            d: v[3],
            e: v[4],
            f: v[5],
            g: v[6],
            h: v[7],
            k: v[8],
            l: v[9],
        }
    }

    /// A set whose only non-zero term is the constant `a`.
    pub const fn constant(a: f64) -> Self {
        Self::from_array([a, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
    }

    pub fn to_array(self) -> [f64; 10] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h, self.k, self.l,
        ]
    }
}

/// Inputs of a single pair transform.
///
/// `corr` is not range-checked and `cov1`/`cov2` are not checked for
/// positivity; degenerate values surface as NaN/∞ in the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformInputs {
    pub dist1: DistributionTag,
    pub dist2: DistributionTag,
    pub corr: f64,
    pub cov1: f64,
    pub cov2: f64,
}

/// Ratio and transformed correlation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformResult {
    /// Empirical correction factor `R`.
    pub r: f64,
    /// Correlation in standard-normal space, `R · corr`.
    pub corr_y: f64,
}

/// A fully evaluated pair transform (inputs, resolved coefficients, result).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub inputs: TransformInputs,
    pub coefficients: CoefficientSet,
    pub result: TransformResult,
}

/// Output format for the binary's reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text tables.
    #[default]
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
}

/// Configuration for `nataf compute`.
///
/// Codes stay as strings here so unknown codes are reported with the
/// caller's spelling.
#[derive(Debug, Clone)]
pub struct ComputeConfig {
    pub dist1: String,
    pub dist2: String,
    pub corr: f64,
    pub cov1: f64,
    pub cov2: f64,
    pub format: OutputFormat,
}

/// Configuration for `nataf table`.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// When set, each row is also evaluated at `(corr, cov1, cov2)`.
    pub point: Option<(f64, f64, f64)>,
    pub format: OutputFormat,
}

/// Configuration for `nataf sweep`.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub dist1: String,
    pub dist2: String,
    pub cov1: f64,
    pub cov2: f64,
    pub corr_min: f64,
    pub corr_max: f64,
    pub steps: usize,
    pub export: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Configuration for `nataf matrix`.
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    pub spec: PathBuf,
    pub format: OutputFormat,
}
