//! Shared dashboard data used by both the CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! CSV load -> region list -> per-region aggregation -> chart spec
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::agg;
use crate::chart::{self, BarChartSpec};
use crate::domain::{DashConfig, RegionSummary, SalesTable};
use crate::error::AppError;

/// The loaded dataset plus its closed region option set.
#[derive(Debug, Clone)]
pub struct DashboardData {
    table: SalesTable,
    regions: Vec<String>,
}

/// Everything computed for one selected region.
#[derive(Debug, Clone)]
pub struct RegionView {
    pub summary: RegionSummary,
    pub chart: BarChartSpec,
}

impl DashboardData {
    /// Load the CSV once at startup. Missing or malformed input is fatal
    /// before any UI starts.
    pub fn load(config: &DashConfig) -> Result<Self, AppError> {
        let table = crate::io::ingest::load_sales(config)?;
        let regions = table.regions();
        Ok(Self { table, regions })
    }

    /// Build directly from records. Test/embedding entry point.
    pub fn from_table(table: SalesTable) -> Self {
        let regions = table.regions();
        Self { table, regions }
    }

    pub fn table(&self) -> &SalesTable {
        &self.table
    }

    /// Sorted distinct regions; the selector's option set.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Initial selection: alphabetically first region.
    pub fn first_region(&self) -> Option<&str> {
        self.regions.first().map(String::as_str)
    }

    /// Aggregate one region and map it to its chart. Pure given the loaded
    /// table; called once per selection change.
    pub fn view(&self, region: &str) -> RegionView {
        let summary = agg::region_summary(&self.table, region);
        let chart = chart::build_bar_chart(&summary.totals, region);
        RegionView { summary, chart }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SaleRecord;
    use chrono::NaiveDate;

    fn record(region: &str, category: &str, sales: f64) -> SaleRecord {
        SaleRecord {
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            region: region.to_string(),
            category: category.to_string(),
            sales,
        }
    }

    #[test]
    fn first_region_is_alphabetically_first() {
        let data = DashboardData::from_table(SalesTable::new(vec![
            record("South", "A", 1.0),
            record("North", "B", 2.0),
        ]));
        assert_eq!(data.first_region(), Some("North"));
    }

    #[test]
    fn view_wires_aggregation_into_the_chart() {
        let data = DashboardData::from_table(SalesTable::new(vec![
            record("North", "A", 10.0),
            record("North", "B", 30.0),
            record("South", "A", 5.0),
        ]));

        let view = data.view("North");
        assert_eq!(view.summary.total_sales, 40.0);
        assert_eq!(view.chart.bars.len(), 2);
        assert_eq!(view.chart.bars[0].category, "B");
        assert!(view.chart.title.contains("North"));
    }
}
