//! Plotters-powered bar chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `BarChart` widget?
//! - real y-axis with tick labels
//! - bars keep their relative heights at any terminal size
//! - easy to extend later (value annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using
//! `plotters-ratatui-backend`. Category labels are drawn by the caller in the
//! terminal grid, where text placement is exact; this widget only draws bars
//! and the y axis.

use plotters::prelude::*;
// The ratatui `Color` import below shadows the `plotters::style::Color` trait
// from the prelude glob; re-import it anonymously so `.filled()` stays in scope.
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::chart::Rgb;

/// A render-only bar series.
///
/// All data is computed outside the render call (see `chart::build_bar_chart`);
/// `render()` is pure drawing.
pub struct SalesBarChart<'a> {
    /// One (total, color) pair per bar, in display order.
    pub bars: &'a [(f64, Rgb)],
    /// Y bounds, `[0, padded max]`.
    pub y_bounds: [f64; 2],
    /// Y-axis description.
    pub y_label: &'a str,
    /// Tick label formatting.
    pub fmt_y: fn(f64) -> String,
}

impl Widget for SalesBarChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];
        if self.bars.is_empty() || !(y0.is_finite() && y1.is_finite()) || y1 <= y0 {
            return;
        }

        let n = self.bars.len() as f64;
        let bars = self.bars.to_vec();
        let y_label = self.y_label.to_string();
        let fmt_y = self.fmt_y;

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        //
        // We delegate rendering to the crate-provided widget helper to avoid
        // coupling our code to its internal backend types.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 2)
                .build_cartesian_2d(0.0..n, y0..y1)?;

            // Y axis + tick labels only; category names live in the terminal
            // grid below the chart, so x tick labels would just duplicate them
            // at the wrong positions.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .y_desc(&y_label)
                .x_labels(0)
                .y_labels(5)
                .y_label_formatter(&|v| fmt_y(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // One filled rectangle per category, colored from the fixed
            // palette. Bars are inset within their slot so adjacent bars stay
            // visually separate even at low resolution.
            chart.draw_series(bars.iter().enumerate().map(|(i, &(total, color))| {
                let x0 = i as f64 + 0.15;
                let x1 = i as f64 + 0.85;
                let fill = RGBColor(color.0, color.1, color.2).filled();
                Rectangle::new([(x0, 0.0), (x1, total)], fill)
            }))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chart<'a>(bars: &'a [(f64, Rgb)]) -> SalesBarChart<'a> {
        SalesBarChart {
            bars,
            y_bounds: [0.0, 31.5],
            y_label: "sales",
            fmt_y: |v| format!("{v:.0}"),
        }
    }

    #[test]
    fn renders_bars_into_the_buffer() {
        let bars = [(30.0, Rgb(0, 255, 255)), (10.0, Rgb(255, 165, 0))];
        let area = Rect::new(0, 0, 50, 14);
        let mut buf = Buffer::empty(area);

        sample_chart(&bars).render(area, &mut buf);

        // Bars plus the y axis must have drawn something.
        let drawn = buf.content.iter().any(|cell| cell.symbol() != " ");
        assert!(drawn);
    }

    #[test]
    fn tiny_area_shows_resize_hint() {
        let bars = [(30.0, Rgb(0, 255, 255))];
        let area = Rect::new(0, 0, 18, 4);
        let mut buf = Buffer::empty(area);

        sample_chart(&bars).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        // The hint may be clipped by the buffer width; the prefix is enough.
        assert!(row.starts_with("Chart area"));
    }

    #[test]
    fn empty_series_draws_nothing() {
        let area = Rect::new(0, 0, 50, 14);
        let mut buf = Buffer::empty(area);

        sample_chart(&[]).render(area, &mut buf);

        assert!(buf.content.iter().all(|cell| cell.symbol() == " "));
    }
}
