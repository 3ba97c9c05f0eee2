use std::collections::VecDeque;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};

use crate::psi::history::RatePoint;

/// Braille time-series of one resource's stall history. The y-range is
/// pinned to 0-100 so charts stay comparable across resources; over-100%
/// excursions are flagged by the meter instead of rescaling the chart.
pub fn render(frame: &mut Frame, area: Rect, label: &str, series: &VecDeque<RatePoint>) {
    let data: Vec<(f64, f64)> = series.iter().map(|p| (p.at, p.pct)).collect();

    let x_min = data.first().map_or(0.0, |p| p.0);
    let x_max = data.last().map_or(1.0, |p| p.0).max(x_min + 1.0);

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(label.to_string()),
        )
        .x_axis(Axis::default().bounds([x_min, x_max]))
        .y_axis(
            Axis::default()
                .bounds([0.0, 100.0])
                .labels(["0", "50", "100"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
