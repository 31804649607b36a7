//! Host health sources: CPU temperature, memory and storage usage.
//!
//! All three are thin queries over `sysinfo`, each registered as its own
//! source so they can fail and recover independently.

use std::path::{Path, PathBuf};

use sysinfo::{Components, Disks, System};

use crate::data::Sample;
use crate::source::{Source, SourceError, SourceId};

/// Sensor label fragments that identify a CPU temperature, in match order.
/// Covers Intel (coretemp "Package id"/"Core") and AMD (k10temp "Tctl"/
/// "Tdie") driver naming.
const CPU_LABEL_FRAGMENTS: &[&str] = &["cpu", "package", "core", "tctl", "tdie"];

/// Used fraction of a capacity, in percent. `None` when the capacity is
/// unknown (zero).
fn percent(used: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(used as f64 / total as f64 * 100.0)
}

/// CPU temperature from the hardware component list.
pub struct CpuTemperatureSource {
    components: Components,
}

impl CpuTemperatureSource {
    pub fn new() -> Self {
        Self {
            components: Components::new_with_refreshed_list(),
        }
    }
}

impl Default for CpuTemperatureSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for CpuTemperatureSource {
    fn id(&self) -> SourceId {
        SourceId::CpuTemperature
    }

    fn fetch(&mut self) -> Result<Sample, SourceError> {
        self.components.refresh(true);

        for fragment in CPU_LABEL_FRAGMENTS {
            for component in &self.components {
                let label = component.label().to_lowercase();
                if !label.contains(fragment) {
                    continue;
                }
                let Some(temp) = component.temperature() else {
                    continue;
                };
                // Sensors occasionally report junk while waking up
                if temp <= 0.0 || temp > 150.0 {
                    continue;
                }
                return Ok(Sample::Scalar(temp as f64));
            }
        }

        Err(SourceError::Unavailable(
            "no CPU temperature sensor found".into(),
        ))
    }
}

/// Memory-used percentage.
pub struct MemorySource {
    sys: System,
}

impl MemorySource {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for MemorySource {
    fn id(&self) -> SourceId {
        SourceId::MemoryUsage
    }

    fn fetch(&mut self) -> Result<Sample, SourceError> {
        self.sys.refresh_memory();
        percent(self.sys.used_memory(), self.sys.total_memory())
            .map(Sample::Scalar)
            .ok_or_else(|| SourceError::Unavailable("total memory reported as zero".into()))
    }
}

/// Storage-used percentage for one mount point.
pub struct StorageSource {
    disks: Disks,
    mount_point: PathBuf,
}

impl StorageSource {
    /// Monitor the filesystem mounted at `mount_point` (typically `/`).
    pub fn new<P: AsRef<Path>>(mount_point: P) -> Self {
        Self {
            disks: Disks::new_with_refreshed_list(),
            mount_point: mount_point.as_ref().to_path_buf(),
        }
    }
}

impl Source for StorageSource {
    fn id(&self) -> SourceId {
        SourceId::StorageUsage
    }

    fn fetch(&mut self) -> Result<Sample, SourceError> {
        self.disks.refresh(true);

        let disk = self
            .disks
            .iter()
            .find(|d| d.mount_point() == self.mount_point)
            .ok_or_else(|| {
                SourceError::Unavailable(format!(
                    "no filesystem mounted at {}",
                    self.mount_point.display()
                ))
            })?;

        let total = disk.total_space();
        let used = total.saturating_sub(disk.available_space());
        percent(used, total)
            .map(Sample::Scalar)
            .ok_or_else(|| SourceError::Unavailable("filesystem reports zero capacity".into()))
    }
}
