// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod data;
mod events;
mod scheduler;
mod smooth;
mod source;
mod ui;

use app::App;
use crate::config::DashboardConfig;
use scheduler::Scheduler;
use source::{
    CpuTemperatureSource, IioSensor, MemorySource, OpenMeteoSource, SimulatedSensor, Source,
    StorageSource,
};

/// Render tick length; also the event poll timeout. Sources poll far less
/// often than this.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "envdash")]
#[command(about = "Terminal dashboard for indoor climate, outdoor weather, and host health")]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// IIO device directory of the indoor sensor
    #[arg(long, conflicts_with = "simulate")]
    sensor: Option<PathBuf>,

    /// Run with a simulated indoor sensor instead of hardware
    #[arg(long)]
    simulate: bool,

    /// Override the configured latitude
    #[arg(long)]
    latitude: Option<f64>,

    /// Override the configured longitude
    #[arg(long)]
    longitude: Option<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Stderr logging, enabled via RUST_LOG; the status bar surfaces
    // per-source failures either way
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut config = DashboardConfig::load(args.config.as_deref())?;
    if let Some(latitude) = args.latitude {
        config.latitude = latitude;
    }
    if let Some(longitude) = args.longitude {
        config.longitude = longitude;
    }
    if let Some(sensor) = args.sensor {
        config.sensor_device = sensor;
    }

    let scheduler = build_scheduler(&config, args.simulate)?;
    let app = App::new(scheduler, &config);
    run_tui(app)
}

/// Register all five sources with their configured intervals.
fn build_scheduler(config: &DashboardConfig, simulate: bool) -> Result<Scheduler> {
    let mut scheduler = Scheduler::new();

    let sensor: Box<dyn Source> = if simulate {
        Box::new(SimulatedSensor::new())
    } else {
        Box::new(IioSensor::new(&config.sensor_device))
    };
    scheduler.register(config.sensor_interval(), sensor);

    scheduler.register(
        config.weather_interval(),
        Box::new(OpenMeteoSource::new(config.latitude, config.longitude)?),
    );

    scheduler.register(
        config.host_interval(),
        Box::new(CpuTemperatureSource::new()),
    );
    scheduler.register(config.host_interval(), Box::new(MemorySource::new()));
    scheduler.register(
        config.host_interval(),
        Box::new(StorageSource::new(&config.storage_mount_point)),
    );

    Ok(scheduler)
}

/// Run the TUI around the given app state
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        // Scheduler first, then smoothing, then paint
        app.tick(Instant::now());

        terminal.draw(|frame| ui::render(frame, app))?;

        // Event poll doubles as the frame pacer
        if let Some(event) = events::poll_event(FRAME_INTERVAL)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
