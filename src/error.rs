//! Error types.
//!
//! - [`NatafError`] is returned by the library (table lookup, matrix transform, grids).
//! - [`AppError`] is what the `nataf` binary reports: a message plus a process exit code.

use thiserror::Error;

use crate::domain::DistributionTag;

/// Errors raised by the library.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NatafError {
    #[error("unknown distribution code '{code}' (expected one of N, U, SE, SR, G, LN, GM, W)")]
    UnknownDistributionCode { code: String },

    /// The ordered pair has no tabulated approximation (Melchers 2002, Appendix B.2).
    #[error(
        "transformation not found: distribution '{code1}' ({dist1:?}, Dist1) cannot be used with \
         distribution '{code2}' ({dist2:?}, Dist2); see Melchers (2002) Appendix B.2"
    )]
    DistributionPairUnsupported {
        dist1: DistributionTag,
        dist2: DistributionTag,
        code1: String,
        code2: String,
    },

    #[error("correlation matrix is {rows}x{cols}, expected {expected}x{expected}")]
    DimensionMismatch {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("correlation matrix is not symmetric at ({row}, {col})")]
    NotSymmetric { row: usize, col: usize },

    /// Off-diagonal entries must be finite; diagonal entries must be 1.
    #[error("correlation matrix entry ({row}, {col}) = {value} is not a valid correlation")]
    InvalidMatrixEntry { row: usize, col: usize, value: f64 },

    #[error("transformed correlation matrix is not positive definite")]
    NotPositiveDefinite,

    #[error("invalid correlation grid: {0}")]
    InvalidGrid(String),
}

impl NatafError {
    /// Replace the codes carried by a pair error with the caller's spelling.
    pub(crate) fn with_codes(self, code1: &str, code2: &str) -> Self {
        match self {
            NatafError::DistributionPairUnsupported { dist1, dist2, .. } => {
                NatafError::DistributionPairUnsupported {
                    dist1,
                    dist2,
                    code1: code1.to_string(),
                    code2: code2.to_string(),
                }
            }
            other => other,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<NatafError> for AppError {
    fn from(err: NatafError) -> Self {
        let exit_code = match err {
            NatafError::DistributionPairUnsupported { .. } => 3,
            NatafError::NotPositiveDefinite => 4,
            _ => 2,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_errors_map_to_exit_code_three() {
        let err = NatafError::DistributionPairUnsupported {
            dist1: DistributionTag::Normal,
            dist2: DistributionTag::Uniform,
            code1: "n".to_string(),
            code2: "u".to_string(),
        };
        let app: AppError = err.into();
        assert_eq!(app.exit_code(), 3);
        assert!(app.to_string().contains("'n'"));
        assert!(app.to_string().contains("'u'"));
    }

    #[test]
    fn input_errors_map_to_exit_code_two() {
        let app: AppError = NatafError::UnknownDistributionCode { code: "XYZ".to_string() }.into();
        assert_eq!(app.exit_code(), 2);
        let app: AppError = NatafError::InvalidMatrixEntry { row: 0, col: 0, value: 0.2 }.into();
        assert_eq!(app.exit_code(), 2);
        let app: AppError = NatafError::NotPositiveDefinite.into();
        assert_eq!(app.exit_code(), 4);
    }
}
