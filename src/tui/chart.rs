//! Income/expense line chart
//!
//! Turns a [`DailySeries`] into a ratatui `Chart` with one line per category,
//! a dim grid, labelled axes and a legend.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use crate::config::LedgerConfig;
use crate::models::Category;
use crate::reports::DailySeries;

const TITLE: &str = "Income and Expenses Over Time";
const GRID_STEPS: usize = 4;

/// Line colour for a category's series
pub fn series_color(category: Category) -> Color {
    match category {
        Category::Income => Color::Green,
        Category::Expenses => Color::Red,
    }
}

/// Plot-ready data for one chart
///
/// Owns the point buffers the ratatui datasets borrow from.
pub struct IncomeExpenseChart {
    income: Vec<(f64, f64)>,
    expenses: Vec<(f64, f64)>,
    grid: Vec<Vec<(f64, f64)>>,
    x_max: f64,
    y_max: f64,
    x_labels: Vec<String>,
    y_labels: Vec<String>,
}

impl IncomeExpenseChart {
    /// Build the chart data from a daily series
    pub fn new(series: &DailySeries, config: &LedgerConfig) -> Self {
        let x_max = series.len().saturating_sub(1).max(1) as f64;

        let peak = series.peak();
        let y_max = if peak.is_positive() {
            peak.as_f64() * 1.1
        } else {
            1.0
        };

        let x_labels = match series.bounds() {
            // the chart skips axis labels unless there are at least two
            Some((first, last)) if first == last => vec![config.format_date(first), String::new()],
            Some((first, last)) => {
                let middle = series.axis[series.len() / 2];
                if series.len() > 2 {
                    vec![
                        config.format_date(first),
                        config.format_date(middle),
                        config.format_date(last),
                    ]
                } else {
                    vec![config.format_date(first), config.format_date(last)]
                }
            }
            None => Vec::new(),
        };

        let y_labels = (0..=GRID_STEPS)
            .map(|i| {
                let value = y_max * i as f64 / GRID_STEPS as f64;
                format!("{:.2}", value)
            })
            .collect();

        let grid = (1..=GRID_STEPS)
            .map(|i| {
                let y = y_max * i as f64 / GRID_STEPS as f64;
                vec![(0.0, y), (x_max, y)]
            })
            .collect();

        Self {
            income: series.points(Category::Income),
            expenses: series.points(Category::Expenses),
            grid,
            x_max,
            y_max,
            x_labels,
            y_labels,
        }
    }

    /// Upper bound of the y axis
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// The ratatui widget, borrowing this chart's point data
    pub fn widget(&self) -> Chart<'_> {
        let grid_style = Style::default().fg(Color::DarkGray);

        let mut datasets: Vec<Dataset<'_>> = self
            .grid
            .iter()
            .map(|line| {
                Dataset::default()
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Line)
                    .style(grid_style)
                    .data(line)
            })
            .collect();

        for (category, points) in [
            (Category::Income, &self.income),
            (Category::Expenses, &self.expenses),
        ] {
            datasets.push(
                Dataset::default()
                    .name(category.as_str())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(series_color(category)))
                    .data(points),
            );
        }

        let axis_style = Style::default().fg(Color::Gray);
        let x_axis = Axis::default()
            .title("Date")
            .style(axis_style)
            .bounds([0.0, self.x_max])
            .labels(self.x_labels.iter().cloned().map(Span::raw).collect::<Vec<_>>());
        let y_axis = Axis::default()
            .title("Amount")
            .style(axis_style)
            .bounds([0.0, self.y_max])
            .labels(self.y_labels.iter().cloned().map(Span::raw).collect::<Vec<_>>());

        Chart::new(datasets)
            .block(
                Block::default()
                    .title(TITLE)
                    .title_style(Style::default().add_modifier(Modifier::BOLD))
                    .borders(Borders::ALL),
            )
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
    }

    /// Render into an area of the frame
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.widget(), area);
    }
}
