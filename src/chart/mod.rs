//! Pure chart-spec construction.
//!
//! The bar chart is described by plain data computed outside any render call:
//! series, colors, bounds, and labels. The TUI widget only draws what this
//! module produces, which keeps the mapping from aggregation output to chart
//! unit-testable without a terminal.

use crate::domain::CategoryTotal;

/// An RGB color, backend-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Fixed per-category palette, assigned by position in the aggregation
/// output and cycled when there are more categories than colors.
pub const PALETTE: [Rgb; 8] = [
    Rgb(0, 255, 255),  // cyan
    Rgb(255, 165, 0),  // orange
    Rgb(0, 255, 0),    // green
    Rgb(255, 0, 255),  // magenta
    Rgb(255, 255, 0),  // yellow
    Rgb(100, 149, 237), // cornflower
    Rgb(255, 99, 71),  // tomato
    Rgb(144, 238, 144), // light green
];

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: String,
    pub total: f64,
    pub color: Rgb,
}

/// A render-only description of the sales bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    /// Chart title, naming the selected region.
    pub title: String,
    /// One bar per category, in aggregation order (descending by total).
    pub bars: Vec<Bar>,
    /// Y bounds: `[0, max total + 5% pad]`.
    pub y_bounds: [f64; 2],
    pub x_label: &'static str,
    pub y_label: &'static str,
}

/// Map the aggregation output for one region to its bar chart.
///
/// Pure mapping: one bar per (category, total) pair, one palette color per
/// category, no computation beyond bounds padding.
pub fn build_bar_chart(totals: &[CategoryTotal], region: &str) -> BarChartSpec {
    let bars: Vec<Bar> = totals
        .iter()
        .enumerate()
        .map(|(i, t)| Bar {
            category: t.category.clone(),
            total: t.total,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect();

    let max = bars.iter().map(|b| b.total).fold(0.0_f64, f64::max);
    let y_max = if max.is_finite() && max > 0.0 {
        max * 1.05
    } else {
        1.0
    };

    BarChartSpec {
        title: format!("Total sales by category — region: {region}"),
        bars,
        y_bounds: [0.0, y_max],
        x_label: "category",
        y_label: "sales",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals() -> Vec<CategoryTotal> {
        vec![
            CategoryTotal {
                category: "B".to_string(),
                total: 30.0,
            },
            CategoryTotal {
                category: "A".to_string(),
                total: 10.0,
            },
        ]
    }

    #[test]
    fn one_bar_per_category_in_input_order() {
        let spec = build_bar_chart(&totals(), "North");
        assert_eq!(spec.bars.len(), 2);
        assert_eq!(spec.bars[0].category, "B");
        assert_eq!(spec.bars[0].total, 30.0);
        assert_eq!(spec.bars[1].category, "A");
    }

    #[test]
    fn title_includes_region() {
        let spec = build_bar_chart(&totals(), "South");
        assert!(spec.title.contains("South"));
        assert_eq!(spec.x_label, "category");
        assert_eq!(spec.y_label, "sales");
    }

    #[test]
    fn colors_differ_per_category() {
        let spec = build_bar_chart(&totals(), "North");
        assert_ne!(spec.bars[0].color, spec.bars[1].color);
    }

    #[test]
    fn y_bounds_start_at_zero_with_padding() {
        let spec = build_bar_chart(&totals(), "North");
        assert_eq!(spec.y_bounds[0], 0.0);
        assert!(spec.y_bounds[1] > 30.0);
        assert!(spec.y_bounds[1] < 32.0);
    }

    #[test]
    fn empty_totals_yield_empty_chart_with_sane_bounds() {
        let spec = build_bar_chart(&[], "West");
        assert!(spec.bars.is_empty());
        assert_eq!(spec.y_bounds, [0.0, 1.0]);
    }
}
