//! Formatted terminal output for `sd report` and `sd regions`.
//!
//! Formatting lives in one place so:
//! - the aggregation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::RegionSummary;

/// Format the per-category totals for one region as a text table.
pub fn format_region_report(summary: &RegionSummary) -> String {
    let mut out = String::new();

    out.push_str("=== sd — Sales by category ===\n");
    out.push_str(&format!("Region: {}\n", summary.region));
    out.push_str(&format!(
        "Rows: {} | Categories: {} | Total sales: {:.2}\n",
        summary.rows,
        summary.totals.len(),
        summary.total_sales
    ));
    out.push('\n');

    if summary.totals.is_empty() {
        out.push_str("(no sales recorded for this region)\n");
        return out;
    }

    let name_width = summary
        .totals
        .iter()
        .map(|t| t.category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());

    out.push_str(&format!("{:<name_width$}  {:>12}\n", "Category", "Total"));
    out.push_str(&format!("{}  {}\n", "-".repeat(name_width), "-".repeat(12)));
    for t in &summary.totals {
        out.push_str(&format!(
            "{:<name_width$}  {:>12.2}\n",
            t.category, t.total
        ));
    }

    out
}

/// Format the distinct region list, one per line.
pub fn format_regions(regions: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} region(s):\n", regions.len()));
    for region in regions {
        out.push_str(&format!("  {region}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryTotal;

    #[test]
    fn report_lists_categories_in_order_with_totals() {
        let summary = RegionSummary {
            region: "North".to_string(),
            totals: vec![
                CategoryTotal {
                    category: "Electronics".to_string(),
                    total: 30.0,
                },
                CategoryTotal {
                    category: "Food".to_string(),
                    total: 10.0,
                },
            ],
            rows: 2,
            total_sales: 40.0,
        };

        let text = format_region_report(&summary);
        assert!(text.contains("Region: North"));
        assert!(text.contains("Total sales: 40.00"));

        let electronics = text.find("Electronics").unwrap();
        let food = text.find("Food").unwrap();
        assert!(electronics < food);
    }

    #[test]
    fn empty_region_report_says_so() {
        let summary = RegionSummary {
            region: "West".to_string(),
            totals: vec![],
            rows: 0,
            total_sales: 0.0,
        };
        let text = format_region_report(&summary);
        assert!(text.contains("no sales recorded"));
    }

    #[test]
    fn region_list_is_one_per_line() {
        let regions = vec!["East".to_string(), "North".to_string()];
        let text = format_regions(&regions);
        assert!(text.starts_with("2 region(s):"));
        assert!(text.contains("  East\n"));
        assert!(text.contains("  North\n"));
    }
}
