//! Data models for the dashboard.
//!
//! ## Submodules
//!
//! - [`condition`]: WMO weather code classification into display labels
//! - [`readings`]: the current-value state struct ([`Readings`]) and the
//!   sample types published by the sources

pub mod condition;
pub mod readings;

pub use condition::Condition;
pub use readings::{IndoorReading, Readings, Sample, WeatherReading};
