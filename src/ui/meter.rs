use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

/// Partial-block characters indexed by filled eighths of a cell.
const EIGHTHS: [&str; 9] = [" ", "\u{258f}", "\u{258e}", "\u{258d}", "\u{258c}", "\u{258b}", "\u{258a}", "\u{2589}", "\u{2588}"];

/// Two-line meter: a label/readout line, then a bar scaled so the full
/// width is 100%. Rates above 100% fill the bar and light a `!` marker in
/// the slack column past it; an unclamped rate is the signal, not an error.
/// Before the first warm round the readout shows a `--` placeholder.
pub struct PressureMeter<'a> {
    pub label: &'a str,
    pub pct: Option<f64>,
}

impl Widget for PressureMeter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let readout = match self.pct {
            Some(pct) => format!("{:<7} {:>7.2}%", self.label, pct),
            None => format!("{:<7}      --", self.label),
        };
        buf.set_string(
            area.x,
            area.y,
            readout,
            Style::default().add_modifier(Modifier::BOLD),
        );

        if area.height < 2 {
            return;
        }

        let y = area.y + 1;
        // The last column is reserved for the over-100% marker.
        let bar_width = area.width.saturating_sub(1) as usize;
        let frac = (self.pct.unwrap_or(0.0) / 100.0).max(0.0);

        let full_scale = (bar_width * 8) as f64;
        let mut remaining = (full_scale * frac).min(full_scale) as usize;
        let bar_style = Style::default().fg(Color::White).bg(Color::DarkGray);
        for i in 0..bar_width {
            let eighths = remaining.min(8);
            remaining -= eighths;
            buf.set_string(area.x + i as u16, y, EIGHTHS[eighths], bar_style);
        }

        if frac > 1.0 {
            buf.set_string(
                area.x + bar_width as u16,
                y,
                "!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            );
        }
    }
}
