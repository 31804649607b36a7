//! Data source abstraction for the polled feeds.
//!
//! Each feed (the indoor sensor, the weather API, the host metric queries)
//! is a [`Source`] producing a [`Sample`] or a typed [`SourceError`]. The
//! scheduler treats every source identically: it knows *when* to fetch, the
//! source knows *how*.

mod host;
mod sensor;
mod weather;

pub use host::{CpuTemperatureSource, MemorySource, StorageSource};
pub use sensor::{IioSensor, SimulatedSensor};
pub use weather::OpenMeteoSource;

use std::fmt;

use thiserror::Error;

use crate::data::Sample;

/// Identifies one polled data feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SourceId {
    IndoorSensor,
    OutdoorWeather,
    CpuTemperature,
    MemoryUsage,
    StorageUsage,
}

impl SourceId {
    /// Short name used in log events and the status bar.
    pub fn name(&self) -> &'static str {
        match self {
            SourceId::IndoorSensor => "indoor",
            SourceId::OutdoorWeather => "weather",
            SourceId::CpuTemperature => "cpu-temp",
            SourceId::MemoryUsage => "memory",
            SourceId::StorageUsage => "storage",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors a fetch can fail with.
///
/// All of these are non-fatal: the scheduler records them and retries at the
/// source's next due time.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// Reading from the underlying device or filesystem failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Response or raw value could not be parsed.
    #[error("failed to parse value: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Could not reach the remote endpoint.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The metric exists but has no value on this host.
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Timeout
        } else if err.is_connect() {
            SourceError::Connection(err.to_string())
        } else {
            SourceError::Http(err.to_string())
        }
    }
}

/// One independently polled data feed.
///
/// `fetch` is a synchronous call from the scheduler's point of view; a
/// source that talks to the network must bound its own latency (the weather
/// source uses a strict request timeout).
pub trait Source {
    /// Stable identifier, used as the key for this source's value slot.
    fn id(&self) -> SourceId;

    /// Produce a fresh sample, or a typed error on failure.
    fn fetch(&mut self) -> Result<Sample, SourceError>;
}
