//! Phase timing for the per-snapshot pipeline
//!
//! Timings go to the `debug` log level (`RUST_LOG=hydro1d_plot=debug`).

use std::time::{Duration, Instant};

/// Records elapsed time per named phase
pub struct PhaseTimer {
    start: Instant,
    section_start: Instant,
    phases: Vec<(&'static str, Duration)>,
}

impl PhaseTimer {
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            section_start: now,
            phases: Vec::new(),
        }
    }

    /// Close the current phase and start the next one
    pub fn mark(&mut self, phase: &'static str) -> Duration {
        let section = self.section_start.elapsed();
        tracing::debug!(
            "TIMEPROF: {} [+{:.3}s, total: {:.3}s]",
            phase,
            section.as_secs_f64(),
            self.start.elapsed().as_secs_f64()
        );
        self.phases.push((phase, section));
        self.section_start = Instant::now();
        section
    }

    pub fn total(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn phases(&self) -> &[(&'static str, Duration)] {
        &self.phases
    }
}
