//! Core domain types for the sales dashboard.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while the dashboard is running
//! - exported to JSON/CSV
//! - constructed directly in tests without touching the filesystem

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Resolved runtime configuration, built from CLI arguments.
#[derive(Debug, Clone)]
pub struct DashConfig {
    /// Path to the sales CSV (`Fecha`, `Región`, `Categoría`, `Ventas`).
    pub csv_path: PathBuf,
}

/// One row of the dataset: a single transaction's date, region, category,
/// and sales amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub region: String,
    pub category: String,
    pub sales: f64,
}

/// The full dataset, loaded once at startup and read-only afterwards.
///
/// The table is an explicit handle passed by reference into the aggregation
/// and chart-building functions rather than ambient module state, so the
/// whole pipeline is testable without process bootstrap.
#[derive(Debug, Clone, Default)]
pub struct SalesTable {
    records: Vec<SaleRecord>,
}

impl SalesTable {
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct regions present in the dataset, sorted ascending.
    ///
    /// This is the closed option set the selector is populated from; its
    /// first element is the initial selection.
    pub fn regions(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for record in &self.records {
            if !out.iter().any(|r| r == &record.region) {
                out.push(record.region.clone());
            }
        }
        out.sort();
        out
    }
}

/// Summed sales for one category within the selected region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Aggregation output for one region, as reported and exported.
#[derive(Debug, Clone, Serialize)]
pub struct RegionSummary {
    pub region: String,
    /// Per-category totals, descending by total.
    pub totals: Vec<CategoryTotal>,
    /// Number of records that matched the region.
    pub rows: usize,
    /// Sum of sales across all matching records.
    pub total_sales: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, category: &str, sales: f64) -> SaleRecord {
        SaleRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            region: region.to_string(),
            category: category.to_string(),
            sales,
        }
    }

    #[test]
    fn regions_are_sorted_and_distinct() {
        let table = SalesTable::new(vec![
            record("South", "A", 1.0),
            record("North", "A", 2.0),
            record("South", "B", 3.0),
            record("East", "A", 4.0),
        ]);
        assert_eq!(table.regions(), vec!["East", "North", "South"]);
    }

    #[test]
    fn empty_table_has_no_regions() {
        let table = SalesTable::default();
        assert!(table.is_empty());
        assert!(table.regions().is_empty());
    }
}
