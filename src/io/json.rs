//! JSON output for reports.
//!
//! Every report type derives `Serialize`; this writes it pretty-printed either
//! to a file or to stdout.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::AppError;

/// Write `value` as pretty JSON to any writer, followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| AppError::new(2, format!("Failed to write JSON: {e}")))?;
    writeln!(writer).map_err(|e| AppError::new(2, format!("Failed to write JSON: {e}")))?;
    Ok(())
}

/// Write `value` as pretty JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    write_json(std::io::stdout().lock(), value)
}

/// Write `value` as pretty JSON to a file.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create JSON '{}': {e}", path.display())))?;
    write_json(file, value)
}
