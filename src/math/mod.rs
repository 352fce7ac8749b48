//! Linear-algebra utilities: the correlation-matrix transform and its Cholesky check.

pub mod matrix;

pub use matrix::*;
