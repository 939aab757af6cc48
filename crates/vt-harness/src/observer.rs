//! Run observer trait for progress reporting.

use vt_core::Step;

/// Callbacks invoked by [`Runner::run`][crate::Runner::run] at step
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl RunObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: Step, active: usize) {
///         if step.0 % self.interval == 0 {
///             println!("{step}: {active} vehicles active");
///         }
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called once before the first step, after the universe is built.
    fn on_run_start(&mut self, _edge_count: usize, _vehicle_count: usize) {}

    /// Called at the end of each step.  `active` is the number of vehicles
    /// that reported telemetry this step.
    fn on_step_end(&mut self, _step: Step, _active: usize) {}

    /// Called once after the final step completes.  `final_step` is the
    /// number of steps processed.
    fn on_run_end(&mut self, _final_step: Step) {}
}

/// A [`RunObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
