//! `nataf-corr` library crate.
//!
//! Computes the correlation of two random variables in standard-normal space
//! from their original-space correlation, coefficients of variation, and
//! marginal distribution families, using the Liu & Der Kiureghian (1986)
//! polynomial approximation tabulated in Melchers (2002), Appendix B.2.
//!
//! ```no_run
//! let res = nataf_corr::compute_transformed_correlation("GM", "LN", 0.9, 1.0, 1.0)?;
//! println!("R = {}, CorrY = {}", res.r, res.corr_y);
//! # Ok::<(), nataf_corr::error::NatafError>(())
//! ```
//!
//! The binary (`nataf`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the table and polynomial are reusable from other reliability code

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod report;
pub mod sweep;
pub mod transform;

pub use domain::{CoefficientSet, DistributionTag, Transform, TransformInputs, TransformResult};
pub use error::NatafError;
pub use models::{evaluate, resolve_coefficients};
pub use transform::{compute_transformed_correlation, transform};
