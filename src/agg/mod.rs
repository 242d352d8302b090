//! The aggregation at the heart of the dashboard.
//!
//! Everything the UI shows derives from one pure function: filter the table
//! by region, group by category, sum sales, sort descending by total. It has
//! no side effects and no hidden state, so the CLI report, the exports, and
//! the TUI all call the same code.

use crate::domain::{CategoryTotal, RegionSummary, SalesTable};

/// Per-category sales totals for one region, descending by total.
///
/// Categories are accumulated in the order they first appear among the
/// region's records, and the final sort is stable, so categories with equal
/// totals keep that first-appearance order.
///
/// A region with no matching records yields an empty vector, not an error.
pub fn totals_by_category(table: &SalesTable, region: &str) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for record in table.records() {
        if record.region != region {
            continue;
        }
        match totals.iter_mut().find(|t| t.category == record.category) {
            Some(entry) => entry.total += record.sales,
            None => totals.push(CategoryTotal {
                category: record.category.clone(),
                total: record.sales,
            }),
        }
    }

    totals.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    totals
}

/// Aggregate one region into the summary used by reports and exports.
pub fn region_summary(table: &SalesTable, region: &str) -> RegionSummary {
    let totals = totals_by_category(table, region);
    let rows = table
        .records()
        .iter()
        .filter(|r| r.region == region)
        .count();
    let total_sales = totals.iter().map(|t| t.total).sum();

    RegionSummary {
        region: region.to_string(),
        totals,
        rows,
        total_sales,
    }
}
