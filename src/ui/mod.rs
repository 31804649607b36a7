//! Terminal rendering.
//!
//! One fixed screen, redrawn every frame: indoor and outdoor gauges on the
//! left, clock, weather and host health on the right, source failures in the
//! status bar. The renderer only reads application state; nothing flows
//! back into the core.

pub mod gauges;
pub mod theme;

pub use theme::Theme;

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::source::SourceId;

/// Gauge scale for temperatures, in degrees C.
const TEMP_RANGE: (f64, f64) = (0.0, 50.0);
/// Gauge scale for relative humidity, in percent.
const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);

const MIN_WIDTH: u16 = 70;
const MIN_HEIGHT: u16 = 16;

/// Render the full dashboard screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.warn));
        let centered = Rect::new(0, area.height.saturating_sub(5) / 2, area.width, 5);
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Min(12),   // Gauges and panels
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, app, chunks[0]);

    let halves =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(chunks[1]);
    render_climate_gauges(frame, app, halves[0]);
    render_side_panel(frame, app, halves[1]);

    render_status_bar(frame, app, chunks[2]);
}

/// Header: overall status dot, app name, clock and date.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let now = Local::now();
    let failing = app.failures().count();

    let dot_style = if failing > 0 {
        Style::default().fg(app.theme.warn)
    } else {
        Style::default().fg(app.theme.ok)
    };

    let line = Line::from(vec![
        Span::styled(" ● ", dot_style),
        Span::styled("ENVDASH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            now.format("%H:%M").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::raw(now.format("%A, %B %d").to_string()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// The 2x2 grid of indoor/outdoor temperature and humidity gauges.
///
/// Indoor cells draw the smoothed displayed values; outdoor cells draw the
/// raw current observation.
fn render_climate_gauges(frame: &mut Frame, app: &App, area: Rect) {
    let rows =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
    let top =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[0]);
    let bottom =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[1]);

    let theme = &app.theme;
    let weather = app.readings().weather();

    gauges::render_metric(
        frame,
        theme,
        top[0],
        "Indoor Temp",
        app.indoor_temperature(),
        TEMP_RANGE,
        "°C",
        1,
        theme.temperature,
    );
    gauges::render_metric(
        frame,
        theme,
        top[1],
        "Indoor Humid",
        app.indoor_humidity(),
        HUMIDITY_RANGE,
        "%",
        0,
        theme.humidity,
    );
    gauges::render_metric(
        frame,
        theme,
        bottom[0],
        "Outside Temp",
        weather.map(|w| w.temperature_c),
        TEMP_RANGE,
        "°C",
        1,
        theme.temperature,
    );
    gauges::render_metric(
        frame,
        theme,
        bottom[1],
        "Outside Humid",
        weather.map(|w| w.humidity_pct),
        HUMIDITY_RANGE,
        "%",
        0,
        theme.humidity,
    );
}

/// Right-hand panel: current weather conditions and host health gauges.
fn render_side_panel(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Conditions
        Constraint::Length(3), // CPU temperature
        Constraint::Length(3), // Memory
        Constraint::Length(3), // Storage
        Constraint::Min(0),
    ])
    .split(area);

    render_conditions(frame, app, chunks[0]);

    let theme = &app.theme;
    let readings = app.readings();
    gauges::render_load(
        frame,
        theme,
        chunks[1],
        "CPU Temp",
        readings.scalar(SourceId::CpuTemperature),
        "°C",
    );
    gauges::render_load(
        frame,
        theme,
        chunks[2],
        "Memory",
        readings.scalar(SourceId::MemoryUsage),
        "%",
    );
    gauges::render_load(
        frame,
        theme,
        chunks[3],
        "Storage",
        readings.scalar(SourceId::StorageUsage),
        "%",
    );
}

/// Condition label and wind speed from the latest weather observation.
fn render_conditions(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(" Conditions ")
        .title_style(theme.title)
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));

    let lines = match app.readings().weather() {
        Some(weather) => vec![
            Line::from(Span::styled(
                weather.condition.label(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Wind: {:.1} km/h", weather.wind_kph)),
        ],
        None => vec![Line::from(Span::styled("N/A", theme.dim))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Status bar: the most pressing source failure, or an all-clear, plus key
/// hints.
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = match app.failures().next() {
        Some((id, err)) => Span::styled(
            format!(" {}: {} ", id, err),
            Style::default().fg(app.theme.warn),
        ),
        None => Span::styled(" all sources ok ", Style::default().fg(app.theme.ok)),
    };

    let line = Line::from(vec![
        status,
        Span::raw("│ "),
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit │ "),
        Span::styled("t", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" theme"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
