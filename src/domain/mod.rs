//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - marginal distribution tags and their short codes (`DistributionTag`)
//! - polynomial coefficients (`CoefficientSet`)
//! - pair transform inputs and outputs (`TransformInputs`, `TransformResult`, `Transform`)
//! - per-command run configuration derived from CLI flags

pub mod types;

pub use types::*;
