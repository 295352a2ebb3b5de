//! Setup observers: timing hooks around the model lifecycle.
//!
//! Resolution is cheap, but install and load are blocking calls that can
//! dominate construction time by orders of magnitude. Observers get a
//! callback at every stage boundary, so callers can time stages, log them,
//! or surface progress, without the facade taking a logging dependency.

use std::time::{Duration, Instant};

/// Stage name: catalog query and model name resolution.
pub const STAGE_RESOLVE: &str = "resolve";
/// Stage name: model installation. Reported as skipped when the model is
/// already in local storage.
pub const STAGE_INSTALL: &str = "install";
/// Stage name: loading the installed model into a pipeline.
pub const STAGE_LOAD: &str = "load";

/// All setup stages, in execution order.
pub const SETUP_STAGES: [&str; 3] = [STAGE_RESOLVE, STAGE_INSTALL, STAGE_LOAD];

/// Callbacks at setup stage boundaries.
///
/// Every method has an empty default body; implement only what you need.
/// A stage that fails never reports an end, so an observer seeing
/// `on_stage_start` without a matching `on_stage_end` knows where setup
/// died.
pub trait SetupObserver {
    /// A stage is about to run.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// A stage finished; `report` carries its timing.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Resolution picked `model`. Fires between the resolve stage ending
    /// and the install stage starting.
    fn on_resolved(&mut self, _model: &str) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SetupObserver for NoopObserver {}

/// Monotonic stopwatch for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time elapsed since [`start`](Self::start).
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What happened in one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    elapsed: Duration,
    skipped: bool,
}

impl StageReport {
    /// Report for a stage that ran for `elapsed`.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            skipped: false,
        }
    }

    /// Report for a stage that had nothing to do.
    pub fn skipped() -> Self {
        Self {
            elapsed: Duration::ZERO,
            skipped: true,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn was_skipped(&self) -> bool {
        self.skipped
    }
}

/// Observer that records every `(stage, report)` pair in order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
    resolved: Option<String>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded reports, in stage execution order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// The model name resolution produced, if it got that far.
    pub fn resolved(&self) -> Option<&str> {
        self.resolved.as_deref()
    }

    /// Total time across all recorded stages.
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl SetupObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }

    fn on_resolved(&mut self, model: &str) {
        self.resolved = Some(model.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StartCounter {
        starts: usize,
    }

    impl SetupObserver for StartCounter {
        fn on_stage_start(&mut self, _stage: &'static str) {
            self.starts += 1;
        }
    }

    #[test]
    fn test_partial_impl_compiles_with_defaults() {
        let mut counter = StartCounter { starts: 0 };
        counter.on_stage_start(STAGE_RESOLVE);
        counter.on_stage_end(STAGE_RESOLVE, &StageReport::new(Duration::ZERO));
        counter.on_resolved("en_core_web_lg");
        assert_eq!(counter.starts, 1);
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut observer = StageTimingObserver::new();
        observer.on_stage_end(STAGE_RESOLVE, &StageReport::new(Duration::from_millis(1)));
        observer.on_stage_end(STAGE_INSTALL, &StageReport::skipped());
        observer.on_stage_end(STAGE_LOAD, &StageReport::new(Duration::from_millis(2)));

        let stages: Vec<&str> = observer.reports().iter().map(|(s, _)| *s).collect();
        assert_eq!(stages, SETUP_STAGES);
        assert!(observer.reports()[1].1.was_skipped());
        assert_eq!(observer.total_elapsed(), Duration::from_millis(3));
    }

    #[test]
    fn test_skipped_report_has_zero_elapsed() {
        let report = StageReport::skipped();
        assert!(report.was_skipped());
        assert_eq!(report.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_clock_elapsed_is_monotonic() {
        let clock = StageClock::start();
        let first = clock.elapsed();
        let second = clock.elapsed();
        assert!(second >= first);
    }
}
