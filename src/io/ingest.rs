//! CSV ingest.
//!
//! This module turns the sales CSV into an immutable [`SalesTable`] that the
//! rest of the program only ever reads.
//!
//! Design goals:
//! - **Strict schema** for the four required columns (clear errors + exit code 2)
//! - **Strict rows**: an unparsable date or non-numeric sales amount aborts
//!   startup with the offending line number (exit code 3) instead of being
//!   silently skipped
//! - **Deterministic behavior**: record order is file order
//! - **Separation of concerns**: no aggregation logic here

use std::collections::HashMap;
use std::fs::File;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::{DashConfig, SaleRecord, SalesTable};
use crate::error::AppError;

/// Required header columns, in the normalized form produced by
/// [`normalize_header_name`].
const COL_DATE: &str = "fecha";
const COL_REGION: &str = "región";
const COL_CATEGORY: &str = "categoría";
const COL_SALES: &str = "ventas";

/// Date format used in the `Fecha` column.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed hint printed when the input file is missing.
pub const MISSING_FILE_HINT: &str =
    "Make sure 'datos_ventas.csv' is in the current directory, or pass a file with `sd -f <file.csv>`.";

/// Resolved indexes of the required columns.
#[derive(Debug, Clone, Copy)]
struct Columns {
    date: usize,
    region: usize,
    category: usize,
    sales: usize,
}

/// Load the sales CSV into an in-memory table.
///
/// A missing or unreadable file is fatal before any UI starts: the error
/// carries the fixed instructional hint and exit code 2.
pub fn load_sales(config: &DashConfig) -> Result<SalesTable, AppError> {
    let file = File::open(&config.csv_path).map_err(|e| {
        AppError::input(format!(
            "Failed to open sales CSV '{}': {e}. {MISSING_FILE_HINT}",
            config.csv_path.display()
        ))
    })?;

    read_sales(file)
}

/// Parse sales records from any reader.
///
/// Split out from [`load_sales`] so tests can feed in-memory CSV without
/// touching the filesystem.
pub fn read_sales<R: std::io::Read>(input: R) -> Result<SalesTable, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    let columns = resolve_columns(&header_map)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;

        let record =
            result.map_err(|e| AppError::data(format!("CSV parse error at line {line}: {e}")))?;
        records.push(parse_row(&record, columns, line)?);
    }

    if records.is_empty() {
        return Err(AppError::data("Sales CSV contains no data rows."));
    }

    Ok(SalesTable::new(records))
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿Fecha"). If we don't strip it, schema validation
    // will incorrectly report a missing column.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_lowercase()
}

fn resolve_columns(header_map: &HashMap<String, usize>) -> Result<Columns, AppError> {
    let required = [COL_DATE, COL_REGION, COL_CATEGORY, COL_SALES];
    let missing: Vec<&str> = required
        .iter()
        .filter(|name| !header_map.contains_key(**name))
        .copied()
        .collect();

    if !missing.is_empty() {
        return Err(AppError::input(format!(
            "Sales CSV is missing required column(s): {}. Expected header: Fecha,Región,Categoría,Ventas.",
            missing.join(", ")
        )));
    }

    Ok(Columns {
        date: header_map[COL_DATE],
        region: header_map[COL_REGION],
        category: header_map[COL_CATEGORY],
        sales: header_map[COL_SALES],
    })
}

fn parse_row(record: &StringRecord, columns: Columns, line: usize) -> Result<SaleRecord, AppError> {
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let date_raw = field(columns.date);
    let date = NaiveDate::parse_from_str(date_raw, DATE_FORMAT).map_err(|e| {
        AppError::data(format!(
            "Invalid date '{date_raw}' at line {line} (expected YYYY-MM-DD): {e}"
        ))
    })?;

    let region = field(columns.region);
    if region.is_empty() {
        return Err(AppError::data(format!("Empty region at line {line}.")));
    }

    let category = field(columns.category);
    if category.is_empty() {
        return Err(AppError::data(format!("Empty category at line {line}.")));
    }

    let sales_raw = field(columns.sales);
    let sales: f64 = sales_raw.parse().map_err(|e| {
        AppError::data(format!(
            "Invalid sales amount '{sales_raw}' at line {line}: {e}"
        ))
    })?;

    Ok(SaleRecord {
        date,
        region: region.to_string(),
        category: category.to_string(),
        sales,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = "\
Fecha,Región,Categoría,Ventas
2024-01-05,North,A,10
2024-01-06,North,B,30
2024-01-07,South,A,5
";

    #[test]
    fn reads_well_formed_csv() {
        let table = read_sales(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);

        let first = &table.records()[0];
        assert_eq!(first.region, "North");
        assert_eq!(first.category, "A");
        assert_eq!(first.sales, 10.0);
        assert_eq!(
            first.date,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );

        assert_eq!(table.regions(), vec!["North", "South"]);
    }

    #[test]
    fn strips_bom_and_ignores_header_case() {
        let csv = "\u{feff}fecha,REGIÓN,categoría,ventas\n2024-02-01,West,A,7\n";
        let table = read_sales(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].region, "West");
    }

    #[test]
    fn missing_column_is_an_input_error() {
        let csv = "Fecha,Región,Ventas\n2024-02-01,West,7\n";
        let err = read_sales(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("categoría"));
    }

    #[test]
    fn bad_date_reports_line_number() {
        let csv = "Fecha,Región,Categoría,Ventas\n2024-01-05,North,A,10\nnot-a-date,North,B,5\n";
        let err = read_sales(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn non_numeric_sales_reports_line_number() {
        let csv = "Fecha,Región,Categoría,Ventas\n2024-01-05,North,A,lots\n";
        let err = read_sales(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("line 2"));
        assert!(err.to_string().contains("lots"));
    }

    #[test]
    fn empty_file_is_a_data_error() {
        let csv = "Fecha,Región,Categoría,Ventas\n";
        let err = read_sales(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn missing_file_fails_with_fixed_hint() {
        let config = DashConfig {
            csv_path: PathBuf::from("definitely/not/here/datos_ventas.csv"),
        };
        let err = load_sales(&config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains(MISSING_FILE_HINT));
    }
}
