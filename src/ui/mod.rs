pub mod chart;
pub mod meter;


use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;
use crate::psi::Resource;
use crate::ui::meter::PressureMeter;

/// One row per resource: a two-line meter on top, the chart filling the
/// rest. Geometry comes from the frame; the core only supplies values.
pub fn draw(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(Resource::ALL.map(|_| Constraint::Ratio(1, Resource::COUNT as u32)))
        .split(frame.area());

    for (resource, row) in Resource::ALL.into_iter().zip(rows.iter()) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(*row);

        frame.render_widget(
            PressureMeter {
                label: resource.label(),
                pct: app.latest_pct(resource),
            },
            chunks[0],
        );
        chart::render(frame, chunks[1], resource.label(), app.history.series(resource));
    }
}
