//! Dashboard configuration.
//!
//! Everything tunable lives in [`DashboardConfig`]: poll intervals, the
//! smoothing coefficient, location coordinates and device paths. Values come
//! from an optional JSON config file layered over the defaults; a couple of
//! common settings can also be overridden on the command line.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Latitude for the outdoor weather query.
    pub latitude: f64,
    /// Longitude for the outdoor weather query.
    pub longitude: f64,
    /// Indoor sensor poll interval. DHT-class sensors must not be read more
    /// than once every 2 seconds.
    pub sensor_interval_secs: u64,
    /// Weather API poll interval. Keep this high enough to stay within the
    /// public endpoint's rate limits.
    pub weather_interval_secs: u64,
    /// Host metrics poll interval.
    pub host_interval_secs: u64,
    /// Fraction of the gap to target closed per frame, in (0, 1].
    pub smoothing_alpha: f64,
    /// IIO device directory for the indoor sensor.
    pub sensor_device: PathBuf,
    /// Mount point watched by the storage source.
    pub storage_mount_point: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            latitude: 52.427547,
            longitude: 10.780420,
            sensor_interval_secs: 2,
            weather_interval_secs: 600,
            host_interval_secs: 5,
            smoothing_alpha: 0.2,
            sensor_device: PathBuf::from("/sys/bus/iio/devices/iio:device0"),
            storage_mount_point: PathBuf::from("/"),
        }
    }
}

impl DashboardConfig {
    /// Load configuration, layering the file at `path` (if given) over the
    /// defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            None => Self::default(),
            Some(path) => config::Config::builder()
                .add_source(config::File::from(path))
                .build()?
                .try_deserialize()?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(self.smoothing_alpha > 0.0 && self.smoothing_alpha <= 1.0) {
            bail!(
                "smoothing_alpha must be in (0, 1], got {}",
                self.smoothing_alpha
            );
        }
        if self.sensor_interval_secs == 0
            || self.weather_interval_secs == 0
            || self.host_interval_secs == 0
        {
            bail!("poll intervals must be positive");
        }
        Ok(())
    }

    pub fn sensor_interval(&self) -> Duration {
        Duration::from_secs(self.sensor_interval_secs)
    }

    pub fn weather_interval(&self) -> Duration {
        Duration::from_secs(self.weather_interval_secs)
    }

    pub fn host_interval(&self) -> Duration {
        Duration::from_secs(self.host_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.sensor_interval(), Duration::from_secs(2));
        assert_eq!(config.weather_interval(), Duration::from_secs(600));
        assert_eq!(config.host_interval(), Duration::from_secs(5));
        assert_eq!(config.smoothing_alpha, 0.2);
        assert_eq!(config.storage_mount_point, PathBuf::from("/"));
        config.validate().unwrap();
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = DashboardConfig::load(None).unwrap();
        assert_eq!(config.sensor_interval_secs, 2);
    }

    #[test]
    fn test_load_json_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        write!(
            file,
            r#"{{
                "latitude": 48.1,
                "longitude": 11.6,
                "weather_interval_secs": 900
            }}"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = DashboardConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.latitude, 48.1);
        assert_eq!(config.weather_interval(), Duration::from_secs(900));
        // untouched fields keep their defaults
        assert_eq!(config.sensor_interval_secs, 2);
    }

    #[test]
    fn test_alpha_out_of_range_is_rejected() {
        let mut config = DashboardConfig::default();
        config.smoothing_alpha = 0.0;
        assert!(config.validate().is_err());
        config.smoothing_alpha = 1.5;
        assert!(config.validate().is_err());
        config.smoothing_alpha = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let mut config = DashboardConfig::default();
        config.sensor_interval_secs = 0;
        assert!(config.validate().is_err());
    }
}
