//! Export aggregated totals to CSV or JSON.
//!
//! Exports are meant to be easy to consume in spreadsheets or downstream
//! scripts, so the CSV keeps the same column names the input uses.

use std::fs::File;
use std::path::Path;

use crate::domain::RegionSummary;
use crate::error::AppError;

/// Write per-category totals to a CSV file.
pub fn write_totals_csv(path: &Path, summary: &RegionSummary) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        AppError::input(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writer
        .write_record(["Región", "Categoría", "VentasTotales"])
        .map_err(|e| AppError::input(format!("Failed to write export CSV header: {e}")))?;

    for t in &summary.totals {
        writer
            .write_record([
                summary.region.as_str(),
                t.category.as_str(),
                &format!("{:.2}", t.total),
            ])
            .map_err(|e| AppError::input(format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::input(format!("Failed to flush export CSV: {e}")))?;

    Ok(())
}

/// Write the full region summary to a JSON file.
pub fn write_totals_json(path: &Path, summary: &RegionSummary) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input(format!(
            "Failed to create export JSON '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(file, summary)
        .map_err(|e| AppError::input(format!("Failed to write export JSON: {e}")))?;

    Ok(())
}
