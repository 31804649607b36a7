//! Indoor temperature/humidity sensor sources.
//!
//! On Linux a DHT-class sensor shows up through the industrial-I/O subsystem
//! as a pair of sysfs files holding milli-units. [`IioSensor`] polls those;
//! [`SimulatedSensor`] produces plausible oscillating readings for machines
//! without the hardware.

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::{IndoorReading, Sample};
use crate::source::{Source, SourceError, SourceId};

/// Temperature file under the IIO device directory, in milli-degrees C.
const TEMP_FILE: &str = "in_temp_input";
/// Relative-humidity file under the IIO device directory, in milli-percent.
const HUMIDITY_FILE: &str = "in_humidityrelative_input";

/// Indoor sensor backed by a Linux IIO device directory.
///
/// Transient read failures (the DHT protocol is timing-sensitive and the
/// kernel driver reports `EIO` on a bad exchange) surface as fetch errors
/// and resolve themselves on a later poll.
#[derive(Debug)]
pub struct IioSensor {
    device_dir: PathBuf,
}

impl IioSensor {
    /// Create a sensor reading from the given IIO device directory,
    /// e.g. `/sys/bus/iio/devices/iio:device0`.
    pub fn new<P: AsRef<Path>>(device_dir: P) -> Self {
        Self {
            device_dir: device_dir.as_ref().to_path_buf(),
        }
    }

    /// Read one milli-unit sysfs attribute and scale it to base units.
    fn read_milli(&self, file: &str) -> Result<f64, SourceError> {
        let path = self.device_dir.join(file);
        let raw = fs::read_to_string(&path)?;
        let milli: f64 = raw
            .trim()
            .parse()
            .map_err(|_| SourceError::Parse(format!("{}: {:?}", path.display(), raw.trim())))?;
        Ok(milli / 1000.0)
    }
}

impl Source for IioSensor {
    fn id(&self) -> SourceId {
        SourceId::IndoorSensor
    }

    fn fetch(&mut self) -> Result<Sample, SourceError> {
        let temperature_c = self.read_milli(TEMP_FILE)?;
        let humidity_pct = self.read_milli(HUMIDITY_FILE)?;
        Ok(Sample::Indoor(IndoorReading {
            temperature_c,
            humidity_pct,
        }))
    }
}

/// Fake indoor sensor for development without hardware.
///
/// Oscillates temperature between 20 and 30 degrees C and humidity between
/// 50 and 70 percent, stepping the phase on every fetch.
#[derive(Debug, Default)]
pub struct SimulatedSensor {
    phase: f64,
}

impl SimulatedSensor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Source for SimulatedSensor {
    fn id(&self) -> SourceId {
        SourceId::IndoorSensor
    }

    fn fetch(&mut self) -> Result<Sample, SourceError> {
        self.phase += 0.1;
        Ok(Sample::Indoor(IndoorReading {
            temperature_c: 25.0 + 5.0 * self.phase.sin(),
            humidity_pct: 60.0 + 10.0 * (self.phase * 0.7).cos(),
        }))
    }
}
