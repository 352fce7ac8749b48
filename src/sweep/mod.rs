//! Correlation sweeps.
//!
//! Responsibilities:
//!
//! - generate correlation grids
//! - evaluate one pair over a grid, or every tabulated pair at one point (parallel)

pub mod grid;
pub mod runner;

pub use grid::*;
pub use runner::*;
