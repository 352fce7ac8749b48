//! Input/output helpers.
//!
//! - matrix-spec JSON ingest (`ingest`)
//! - sweep CSV export (`export`)
//! - JSON report output (`json`)

pub mod export;
pub mod ingest;
pub mod json;

pub use export::*;
pub use ingest::*;
pub use json::*;
