//! Gauge widgets for the metric cells.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::ui::Theme;

/// Clamp a value into a gauge ratio within `[min, max]`.
fn ratio(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Render one metric as a titled gauge.
///
/// `None` renders as an empty gauge with an `N/A` placeholder, the state a
/// source is in before its first successful fetch.
#[allow(clippy::too_many_arguments)]
pub fn render_metric(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    value: Option<f64>,
    range: (f64, f64),
    unit: &str,
    precision: usize,
    color: Color,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title)
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));

    let gauge = match value {
        Some(v) => Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(color))
            .ratio(ratio(v, range.0, range.1))
            .label(format!("{:.*} {}", precision, v, unit)),
        None => Gauge::default()
            .block(block)
            .gauge_style(theme.dim)
            .ratio(0.0)
            .label("N/A"),
    };
    frame.render_widget(gauge, area);
}

/// Render a host utilization metric, colored by load.
pub fn render_load(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    value: Option<f64>,
    unit: &str,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title)
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));

    let gauge = match value {
        Some(v) => Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(theme.load_color(v)))
            .ratio(ratio(v, 0.0, 100.0))
            .label(format!("{:.0} {}", v, unit)),
        None => Gauge::default()
            .block(block)
            .gauge_style(theme.dim)
            .ratio(0.0)
            .label("N/A"),
    };
    frame.render_widget(gauge, area);
}
