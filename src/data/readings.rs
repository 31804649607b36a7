//! Current readings published by the sources.
//!
//! [`Readings`] is the single state struct holding the latest known-good
//! sample per source. It is owned by the application and handed to the
//! renderer by reference; nothing in the crate keeps readings in globals.

use std::collections::BTreeMap;

use crate::data::Condition;
use crate::source::SourceId;

/// One indoor sensor measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndoorReading {
    /// Temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Relative humidity in percent.
    pub humidity_pct: f64,
}

/// One outdoor weather observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    /// Temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Relative humidity in percent.
    pub humidity_pct: f64,
    /// Wind speed in km/h.
    pub wind_kph: f64,
    /// Bucketed sky/precipitation condition.
    pub condition: Condition,
}

/// The immutable result of one successful fetch.
///
/// Each source produces exactly one variant; a new sample replaces the old
/// one wholesale, fields from different polls are never merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Indoor(IndoorReading),
    Weather(WeatherReading),
    /// A bare scalar, used by the host metric sources.
    Scalar(f64),
}

/// Latest sample per source.
///
/// A slot is empty until the source's first successful fetch and keeps its
/// last value across later failures, so a flaky source degrades to a stale
/// reading rather than a blank one.
#[derive(Debug, Default)]
pub struct Readings {
    current: BTreeMap<SourceId, Sample>,
}

impl Readings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot for `id` with a fresh sample.
    pub fn publish(&mut self, id: SourceId, sample: Sample) {
        self.current.insert(id, sample);
    }

    /// Latest indoor sensor reading, if any poll has succeeded yet.
    pub fn indoor(&self) -> Option<IndoorReading> {
        match self.current.get(&SourceId::IndoorSensor) {
            Some(Sample::Indoor(r)) => Some(*r),
            _ => None,
        }
    }

    /// Latest outdoor weather observation.
    pub fn weather(&self) -> Option<WeatherReading> {
        match self.current.get(&SourceId::OutdoorWeather) {
            Some(Sample::Weather(r)) => Some(*r),
            _ => None,
        }
    }

    /// Latest scalar value for a host metric source.
    pub fn scalar(&self, id: SourceId) -> Option<f64> {
        match self.current.get(&id) {
            Some(Sample::Scalar(v)) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slots() {
        let readings = Readings::new();
        assert!(readings.indoor().is_none());
        assert!(readings.weather().is_none());
        assert!(readings.scalar(SourceId::MemoryUsage).is_none());
    }

    #[test]
    fn test_publish_replaces_wholesale() {
        let mut readings = Readings::new();
        readings.publish(
            SourceId::IndoorSensor,
            Sample::Indoor(IndoorReading {
                temperature_c: 21.5,
                humidity_pct: 40.0,
            }),
        );
        readings.publish(
            SourceId::IndoorSensor,
            Sample::Indoor(IndoorReading {
                temperature_c: 22.0,
                humidity_pct: 41.0,
            }),
        );
        let indoor = readings.indoor().unwrap();
        assert_eq!(indoor.temperature_c, 22.0);
        assert_eq!(indoor.humidity_pct, 41.0);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut readings = Readings::new();
        readings.publish(SourceId::CpuTemperature, Sample::Scalar(55.0));
        readings.publish(SourceId::MemoryUsage, Sample::Scalar(62.5));
        assert_eq!(readings.scalar(SourceId::CpuTemperature), Some(55.0));
        assert_eq!(readings.scalar(SourceId::MemoryUsage), Some(62.5));
        assert!(readings.scalar(SourceId::StorageUsage).is_none());
        assert!(readings.indoor().is_none());
    }

    #[test]
    fn test_mismatched_sample_kind_reads_as_empty() {
        let mut readings = Readings::new();
        readings.publish(SourceId::IndoorSensor, Sample::Scalar(1.0));
        assert!(readings.indoor().is_none());
    }
}
