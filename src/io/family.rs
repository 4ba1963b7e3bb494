//! Read/write curve family JSON files.
//!
//! A family JSON file is the "portable" representation of a sweep:
//! - geometry (`Ae/Ao`, `Z`) and the advance-ratio grid
//! - every curve with its KT, KQ and efficiency points
//!
//! The schema is defined by `domain::FamilyFile`.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::domain::{CurveFamily, FamilyFile};
use crate::error::AppError;

const TOOL_NAME: &str = "bseries";

/// Write a family JSON file.
pub fn write_family_json(path: &Path, family: &CurveFamily) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create family JSON '{}': {e}", path.display())))?;

    let doc = FamilyFile {
        tool: TOOL_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        family: family.clone(),
    };

    serde_json::to_writer_pretty(BufWriter::new(file), &doc)
        .map_err(|e| AppError::input(format!("Failed to write family JSON: {e}")))?;

    Ok(())
}

/// Read a family JSON file.
pub fn read_family_json(path: &Path) -> Result<FamilyFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open family JSON '{}': {e}", path.display())))?;
    let doc: FamilyFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::input(format!("Invalid family JSON: {e}")))?;
    Ok(doc)
}
