//! Correlation grid generation.

use crate::error::NatafError;

/// Largest accepted number of grid points.
pub const MAX_GRID_STEPS: usize = 1_000_000;

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
///
/// The last point is exactly `max`.
pub fn linear_grid(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, NatafError> {
    if !(min.is_finite() && max.is_finite() && max > min) {
        return Err(NatafError::InvalidGrid(format!(
            "min={min}, max={max} (must be finite and max>min)"
        )));
    }
    if steps < 2 {
        return Err(NatafError::InvalidGrid(format!("steps={steps} (must be >= 2)")));
    }
    if steps > MAX_GRID_STEPS {
        return Err(NatafError::InvalidGrid(format!(
            "steps={steps} (must be <= {MAX_GRID_STEPS})"
        )));
    }

    let step = (max - min) / (steps as f64 - 1.0);
    let mut out: Vec<f64> = (0..steps).map(|i| min + step * i as f64).collect();
    out[steps - 1] = max;
    Ok(out)
}
