//! The Liu & Der Kiureghian ratio model: coefficient table plus polynomial.
//!
//! Both halves are plain data and pure functions so sweeps and the matrix
//! transform can call them from any thread.

pub mod polynomial;
pub mod table;

pub use polynomial::*;
pub use table::*;
