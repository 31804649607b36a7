//! Per-source refresh scheduling.
//!
//! The scheduler owns a table of registered sources, each with a fixed poll
//! interval and the timestamp of its last attempt. [`Scheduler::tick`] runs
//! once per frame, fires whichever fetches are due, and routes the outcomes:
//! successful samples go into [`Readings`], failures are logged and retained
//! for the status bar. It never interprets why a fetch failed.

use std::time::{Duration, Instant};

use crate::data::Readings;
use crate::source::{Source, SourceError, SourceId};

/// One row of the schedule table.
struct Entry {
    interval: Duration,
    /// Last attempted poll, successful or not. `None` means never polled,
    /// which counts as infinitely overdue.
    last_poll: Option<Instant>,
    last_error: Option<SourceError>,
    source: Box<dyn Source>,
}

impl Entry {
    fn due(&self, now: Instant) -> bool {
        match self.last_poll {
            None => true,
            Some(last) => now.duration_since(last) >= self.interval,
        }
    }
}

/// Table-driven poll scheduler.
///
/// Adding a feed to the dashboard is one [`register`](Scheduler::register)
/// call; the tick body has no per-source branching.
#[derive(Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source to be polled every `interval`.
    ///
    /// The interval must be strictly positive and is fixed for the life of
    /// the process. The source counts as immediately due.
    pub fn register(&mut self, interval: Duration, source: Box<dyn Source>) {
        debug_assert!(!interval.is_zero());
        self.entries.push(Entry {
            interval,
            last_poll: None,
            last_error: None,
            source,
        });
    }

    /// Fire every due fetch.
    ///
    /// `now` must come from a monotonic clock and be non-decreasing across
    /// calls. Each due source is fetched exactly once, no matter how long
    /// ago its interval elapsed: a suspended process catches up with one
    /// fetch per source, not one per missed interval. A failed fetch leaves
    /// the source's published value untouched.
    pub fn tick(&mut self, now: Instant, readings: &mut Readings) {
        for entry in &mut self.entries {
            if !entry.due(now) {
                continue;
            }
            entry.last_poll = Some(now);

            let id = entry.source.id();
            match entry.source.fetch() {
                Ok(sample) => {
                    tracing::debug!(source = %id, "poll ok");
                    readings.publish(id, sample);
                    entry.last_error = None;
                }
                Err(err) => {
                    tracing::warn!(source = %id, error = %err, "poll failed");
                    entry.last_error = Some(err);
                }
            }
        }
    }

    /// Latest failure per source, for the status bar.
    ///
    /// A source appears here until its next successful fetch.
    pub fn failures(&self) -> impl Iterator<Item = (SourceId, &SourceError)> {
        self.entries
            .iter()
            .filter_map(|e| e.last_error.as_ref().map(|err| (e.source.id(), err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Sample;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Scripted source: counts fetches, fails when told to.
    struct ScriptedSource {
        id: SourceId,
        value: f64,
        fail: Rc<RefCell<bool>>,
        calls: Rc<RefCell<u32>>,
    }

    impl ScriptedSource {
        fn new(id: SourceId) -> (Self, Rc<RefCell<bool>>, Rc<RefCell<u32>>) {
            let fail = Rc::new(RefCell::new(false));
            let calls = Rc::new(RefCell::new(0));
            (
                Self {
                    id,
                    value: 1.0,
                    fail: fail.clone(),
                    calls: calls.clone(),
                },
                fail,
                calls,
            )
        }
    }

    impl Source for ScriptedSource {
        fn id(&self) -> SourceId {
            self.id
        }

        fn fetch(&mut self) -> Result<Sample, SourceError> {
            *self.calls.borrow_mut() += 1;
            if *self.fail.borrow() {
                Err(SourceError::Unavailable("scripted failure".into()))
            } else {
                self.value += 1.0;
                Ok(Sample::Scalar(self.value))
            }
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_first_tick_polls_everything() {
        let (a, _, a_calls) = ScriptedSource::new(SourceId::CpuTemperature);
        let (b, _, b_calls) = ScriptedSource::new(SourceId::MemoryUsage);

        let mut scheduler = Scheduler::new();
        scheduler.register(ms(2000), Box::new(a));
        scheduler.register(ms(60_000), Box::new(b));

        let mut readings = Readings::new();
        scheduler.tick(Instant::now(), &mut readings);

        assert_eq!(*a_calls.borrow(), 1);
        assert_eq!(*b_calls.borrow(), 1);
        assert!(readings.scalar(SourceId::CpuTemperature).is_some());
        assert!(readings.scalar(SourceId::MemoryUsage).is_some());
    }

    #[test]
    fn test_interval_gates_polling() {
        let (source, _, calls) = ScriptedSource::new(SourceId::CpuTemperature);
        let mut scheduler = Scheduler::new();
        scheduler.register(ms(2000), Box::new(source));

        let mut readings = Readings::new();
        let t0 = Instant::now();

        scheduler.tick(t0, &mut readings);
        assert_eq!(*calls.borrow(), 1);

        scheduler.tick(t0 + ms(1000), &mut readings);
        assert_eq!(*calls.borrow(), 1);

        scheduler.tick(t0 + ms(2001), &mut readings);
        assert_eq!(*calls.borrow(), 2);

        // last_poll moved to t0+2001ms, so t0+4000ms is still too early
        scheduler.tick(t0 + ms(4000), &mut readings);
        assert_eq!(*calls.borrow(), 2);

        scheduler.tick(t0 + ms(4001), &mut readings);
        assert_eq!(*calls.borrow(), 3);
    }

    #[test]
    fn test_exact_interval_boundary_is_due() {
        let (source, _, calls) = ScriptedSource::new(SourceId::CpuTemperature);
        let mut scheduler = Scheduler::new();
        scheduler.register(ms(2000), Box::new(source));

        let mut readings = Readings::new();
        let t0 = Instant::now();
        scheduler.tick(t0, &mut readings);
        scheduler.tick(t0 + ms(2000), &mut readings);
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_failure_updates_attempt_time_but_not_value() {
        let (source, fail, calls) = ScriptedSource::new(SourceId::CpuTemperature);
        let mut scheduler = Scheduler::new();
        scheduler.register(ms(1000), Box::new(source));

        let mut readings = Readings::new();
        let t0 = Instant::now();
        scheduler.tick(t0, &mut readings);
        let published = readings.scalar(SourceId::CpuTemperature).unwrap();

        *fail.borrow_mut() = true;
        scheduler.tick(t0 + ms(1000), &mut readings);
        assert_eq!(*calls.borrow(), 2);
        // previous sample intact
        assert_eq!(readings.scalar(SourceId::CpuTemperature), Some(published));
        assert_eq!(scheduler.failures().count(), 1);

        // failed attempt still counted: nothing due before the next interval
        scheduler.tick(t0 + ms(1500), &mut readings);
        assert_eq!(*calls.borrow(), 2);

        *fail.borrow_mut() = false;
        scheduler.tick(t0 + ms(2000), &mut readings);
        assert_eq!(*calls.borrow(), 3);
        assert_ne!(readings.scalar(SourceId::CpuTemperature), Some(published));
        assert_eq!(scheduler.failures().count(), 0);
    }

    #[test]
    fn test_long_gap_fetches_once_per_source() {
        let (source, _, calls) = ScriptedSource::new(SourceId::MemoryUsage);
        let mut scheduler = Scheduler::new();
        scheduler.register(ms(1000), Box::new(source));

        let mut readings = Readings::new();
        let t0 = Instant::now();
        scheduler.tick(t0, &mut readings);

        // 60 missed intervals, exactly one catch-up fetch
        scheduler.tick(t0 + ms(60_000), &mut readings);
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_one_failing_source_never_blocks_another() {
        let (bad, bad_fail, _) = ScriptedSource::new(SourceId::OutdoorWeather);
        let (good, _, good_calls) = ScriptedSource::new(SourceId::MemoryUsage);
        *bad_fail.borrow_mut() = true;

        let mut scheduler = Scheduler::new();
        scheduler.register(ms(1000), Box::new(bad));
        scheduler.register(ms(1000), Box::new(good));

        let mut readings = Readings::new();
        let t0 = Instant::now();
        scheduler.tick(t0, &mut readings);
        scheduler.tick(t0 + ms(1000), &mut readings);

        assert_eq!(*good_calls.borrow(), 2);
        assert!(readings.scalar(SourceId::MemoryUsage).is_some());
        assert!(readings.weather().is_none());
    }
}
