//! Ratatui-based terminal dashboard.
//!
//! The TUI binds one input (the region selector) to one output (the bar
//! chart): every selection change re-runs the aggregation and chart build
//! synchronously before the next draw. The dataset itself is loaded once
//! before the terminal is touched and is read-only from then on.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::{DashboardData, RegionView};
use crate::chart::Rgb;
use crate::error::AppError;

mod bar_chart;

use bar_chart::SalesBarChart;

/// Start the dashboard over an already-loaded dataset.
pub fn run(data: DashboardData) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::terminal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(data)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::terminal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::terminal(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    data: DashboardData,
    /// Index into `data.regions()`; the selector's current value.
    selected: usize,
    /// View computed for the selected region. Always in sync with `selected`.
    view: RegionView,
    status: String,
}

impl App {
    fn new(data: DashboardData) -> Result<Self, AppError> {
        let first = data
            .first_region()
            .ok_or_else(|| AppError::data("Dataset contains no regions."))?
            .to_string();
        let view = data.view(&first);

        let mut app = Self {
            data,
            selected: 0,
            view,
            status: String::new(),
        };
        app.status = app.selection_status();
        Ok(app)
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::terminal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::terminal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::terminal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.select(self.selected.saturating_sub(1)),
            KeyCode::Down => self.select(self.selected + 1),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(self.data.regions().len().saturating_sub(1)),
            _ => {}
        }
        false
    }

    /// Change the selected region and recompute the chart for it.
    ///
    /// This is the whole reactive contract: selection change -> recompute ->
    /// idle with the new chart. The recompute is synchronous and finishes
    /// before the next draw.
    fn select(&mut self, idx: usize) {
        let idx = idx.min(self.data.regions().len().saturating_sub(1));
        if idx == self.selected {
            return;
        }
        self.selected = idx;
        let region = self.data.regions()[idx].clone();
        self.view = self.data.view(&region);
        self.status = self.selection_status();
    }

    fn selection_status(&self) -> String {
        format!(
            "region: {} | categories: {} | total: {:.2}",
            self.view.summary.region,
            self.view.summary.totals.len(),
            self.view.summary.total_sales,
        )
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("sd", Style::default().fg(Color::Cyan)),
            Span::raw(" — sales by category, per region"),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "records: {} | regions: {} | selected: {}",
                self.data.table().len(),
                self.data.regions().len(),
                self.view.summary.region,
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(0)])
            .split(area);

        self.draw_region_list(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
    }

    fn draw_region_list(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = self
            .data
            .regions()
            .iter()
            .map(|r| ListItem::new(r.clone()))
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Region").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(self.view.chart.title.clone())
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        if self.view.chart.bars.is_empty() {
            let msg = Paragraph::new("No sales recorded for this region.")
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        }

        let series: Vec<(f64, Rgb)> = self
            .view
            .chart
            .bars
            .iter()
            .map(|b| (b.total, b.color))
            .collect();

        let widget = SalesBarChart {
            bars: &series,
            y_bounds: self.view.chart.y_bounds,
            y_label: self.view.chart.y_label,
            fmt_y: fmt_axis_y,
        };
        frame.render_widget(widget, inner);

        draw_category_labels(frame, inner, &self.view.chart);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select region  Home/End jump  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn fmt_axis_y(v: f64) -> String {
    format!("{v:.0}")
}

/// Insets of the plot region inside the chart widget area.
///
/// These mirror the label areas and margin the Plotters widget reserves, so
/// category labels drawn in the terminal grid line up under their bars.
#[derive(Debug, Clone, Copy)]
struct PlotInsets {
    left: u16,
    right: u16,
    bottom: u16,
}

const PLOT_INSETS: PlotInsets = PlotInsets {
    left: 7,
    right: 1,
    bottom: 2,
};

/// Draw one colored category label centered under each bar.
///
/// Text drawn through Plotters lands at sub-cell positions and smears in the
/// terminal; drawing the labels directly into the terminal grid keeps them
/// crisp and lets them reuse each bar's palette color.
fn draw_category_labels(frame: &mut ratatui::Frame<'_>, inner: Rect, chart: &crate::chart::BarChartSpec) {
    let insets = PLOT_INSETS;
    if inner.width <= insets.left + insets.right + 4 || inner.height <= insets.bottom + 4 {
        return;
    }

    let plot_width = inner.width - insets.left - insets.right;
    let y = inner.y + inner.height - insets.bottom;
    let n = chart.bars.len();

    for (i, bar) in chart.bars.iter().enumerate() {
        let slot = plot_width as f64 / n as f64;
        let center = insets.left as f64 + (i as f64 + 0.5) * slot;

        // Truncate to the slot width so neighboring labels never collide.
        let max_len = (slot as usize).saturating_sub(1).max(1);
        let label: String = bar.category.chars().take(max_len).collect();
        let label_len = label.chars().count() as u16;

        let x = inner.x + (center as u16).saturating_sub(label_len / 2);
        if x + label_len > inner.x + inner.width {
            continue;
        }

        let color = Color::Rgb(bar.color.0, bar.color.1, bar.color.2);
        frame.render_widget(
            Paragraph::new(label).style(Style::default().fg(color)),
            Rect {
                x,
                y,
                width: label_len,
                height: 1,
            },
        );
    }
}
