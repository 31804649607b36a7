// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # envdash
//!
//! A single-screen environmental dashboard for the terminal. It periodically
//! samples an indoor temperature/humidity sensor, polls an outdoor weather
//! service, reads host health metrics (CPU temperature, memory, storage),
//! and renders all of this plus a clock and calendar at a steady frame rate.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌───────────┐   ┌──────────┐   ┌────────┐   ┌──────────┐   │
//! │  │ scheduler │──▶│ readings │──▶│ smooth │──▶│    ui    │   │
//! │  │  (when)   │   │ (state)  │   │ (ease) │   │ (render) │   │
//! │  └─────┬─────┘   └──────────┘   └────────┘   └──────────┘   │
//! │        │                                                     │
//! │        ▼                                                     │
//! │  ┌───────────┐                                               │
//! │  │  source   │◀── IioSensor | OpenMeteoSource | host metrics │
//! │  │  (how)    │                                               │
//! │  └───────────┘                                               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`scheduler`]**: table-driven refresh scheduling - per-source poll
//!   intervals, decoupled from the render frame rate
//! - **[`source`]**: the [`Source`] trait and the concrete feeds (IIO
//!   sensor, Open-Meteo API, sysinfo host metrics, a simulator)
//! - **[`data`]**: current readings state and the WMO condition mapping
//! - **[`smooth`]**: exponential easing of displayed values between samples
//! - **[`app`]**: application state gluing the above together, one tick per
//!   frame
//! - **[`ui`]**: ratatui rendering - gauges, conditions, clock and status bar
//!
//! ## Usage
//!
//! ```bash
//! # With an attached IIO sensor
//! envdash --sensor /sys/bus/iio/devices/iio:device0
//!
//! # Without hardware
//! envdash --simulate
//! ```
//!
//! ### As a library
//!
//! ```
//! use std::time::Instant;
//! use envdash::{App, DashboardConfig, Scheduler, SimulatedSensor};
//!
//! let config = DashboardConfig::default();
//! let mut scheduler = Scheduler::new();
//! scheduler.register(config.sensor_interval(), Box::new(SimulatedSensor::new()));
//!
//! let mut app = App::new(scheduler, &config);
//! app.tick(Instant::now());
//! assert!(app.indoor_temperature().is_some());
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod scheduler;
pub mod smooth;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::DashboardConfig;
pub use data::{Condition, IndoorReading, Readings, Sample, WeatherReading};
pub use scheduler::Scheduler;
pub use smooth::SmoothedValue;
pub use source::{
    CpuTemperatureSource, IioSensor, MemorySource, OpenMeteoSource, SimulatedSensor, Source,
    SourceError, SourceId, StorageSource,
};
