//! Application state.
//!
//! [`App`] owns everything the frame loop touches: the scheduler with its
//! registered sources, the current [`Readings`], and the smoothed display
//! values for the indoor metrics. One [`App::tick`] per frame keeps the
//! whole dashboard moving.

use std::time::Instant;

use crate::config::DashboardConfig;
use crate::data::Readings;
use crate::scheduler::Scheduler;
use crate::smooth::SmoothedValue;
use crate::source::{SourceError, SourceId};
use crate::ui::Theme;

pub struct App {
    pub running: bool,
    pub theme: Theme,
    scheduler: Scheduler,
    readings: Readings,
    indoor_temperature: SmoothedValue,
    indoor_humidity: SmoothedValue,
}

impl App {
    /// Create the app around a scheduler with its sources already
    /// registered.
    pub fn new(scheduler: Scheduler, config: &DashboardConfig) -> Self {
        Self {
            running: true,
            theme: Theme::auto_detect(),
            scheduler,
            readings: Readings::new(),
            indoor_temperature: SmoothedValue::new(config.smoothing_alpha),
            indoor_humidity: SmoothedValue::new(config.smoothing_alpha),
        }
    }

    /// Advance the dashboard by one frame: fire due polls, then ease the
    /// displayed indoor values toward the latest samples.
    pub fn tick(&mut self, now: Instant) {
        self.scheduler.tick(now, &mut self.readings);

        let indoor = self.readings.indoor();
        self.indoor_temperature
            .retarget(indoor.map(|r| r.temperature_c));
        self.indoor_humidity.retarget(indoor.map(|r| r.humidity_pct));
        self.indoor_temperature.advance();
        self.indoor_humidity.advance();
    }

    /// Current raw readings, for the renderer.
    pub fn readings(&self) -> &Readings {
        &self.readings
    }

    /// Smoothed indoor temperature to draw this frame.
    pub fn indoor_temperature(&self) -> Option<f64> {
        self.indoor_temperature.displayed()
    }

    /// Smoothed indoor humidity to draw this frame.
    pub fn indoor_humidity(&self) -> Option<f64> {
        self.indoor_humidity.displayed()
    }

    /// Sources currently in a failed state, for the status bar.
    pub fn failures(&self) -> impl Iterator<Item = (SourceId, &SourceError)> {
        self.scheduler.failures()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = if self.theme.is_dark() {
            Theme::light()
        } else {
            Theme::dark()
        };
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
