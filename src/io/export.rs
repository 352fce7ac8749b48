//! Export sweep results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::Transform;
use crate::error::AppError;

/// Write one CSV row per sweep point.
pub fn write_sweep_csv(path: &Path, rows: &[Transform]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(file, "dist1,dist2,corr,cov1,cov2,r,corr_y")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for t in rows {
        let i = &t.inputs;
        writeln!(
            file,
            "{},{},{:.10},{:.10},{:.10},{:.10},{:.10}",
            i.dist1.code(),
            i.dist2.code(),
            i.corr,
            i.cov1,
            i.cov2,
            t.result.r,
            t.result.corr_y,
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
