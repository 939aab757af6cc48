//! The step loop.
//!
//! Single-threaded and synchronous by design: each simulated step is fully
//! processed (one `ingest` per subscribed vehicle, one `record_step_count`)
//! before the next step begins, so accumulator state never sees concurrent
//! mutation.  The only lifecycle boundary is run start (allocate) and run
//! end (export, then discard).

use vt_core::{EntityUniverse, Step, is_internal_edge};
use vt_metrics::{CollectConfig, Collector, VehicleSample};

use crate::client::SimulatorClient;
use crate::error::HarnessResult;
use crate::observer::RunObserver;

/// Bounds for one run.
#[derive(Copy, Clone, Debug)]
pub struct RunConfig {
    /// Hard upper bound on steps; the loop also stops earlier once the
    /// client reports no expected vehicles.
    pub max_steps: u64,
}

impl RunConfig {
    /// Bound the run by simulated hours at the engine's step length.
    pub fn for_hours(hours: f64, step_secs: f64) -> Self {
        Self {
            max_steps: (hours * 3_600.0 / step_secs).ceil() as u64,
        }
    }
}

/// Everything a run produces: the entity universe it was keyed by and the
/// finished, read-only collector.
#[derive(Debug)]
pub struct RunOutcome {
    pub universe:  EntityUniverse,
    pub collector: Collector,
    /// Steps actually processed.
    pub steps:     u64,
}

/// Drives a [`SimulatorClient`] to completion, collecting measures.
pub struct Runner {
    collect: CollectConfig,
    run:     RunConfig,
}

impl Runner {
    pub fn new(collect: CollectConfig, run: RunConfig) -> Self {
        Self { collect, run }
    }

    /// Run the step loop to completion.
    ///
    /// 1. Build the entity universe from the client's edge and vehicle lists
    ///    (internal edges filtered out).
    /// 2. Allocate the collector for the configured modes.
    /// 3. Step until the client has no expected vehicles or `max_steps` is
    ///    reached; every sample is interned and ingested, then the step's
    ///    active-vehicle count is recorded.
    ///
    /// # Errors
    ///
    /// Client failures and universe/sample mismatches abort the run and
    /// propagate; nothing is retried or silently dropped.
    pub fn run<C, O>(&self, client: &mut C, observer: &mut O) -> HarnessResult<RunOutcome>
    where
        C: SimulatorClient,
        O: RunObserver,
    {
        let edges: Vec<String> = client
            .edge_names()?
            .into_iter()
            .filter(|name| !is_internal_edge(name))
            .collect();
        let vehicles = client.vehicle_names()?;

        let universe = EntityUniverse::new(edges, vehicles)?;
        let mut collector = Collector::new(self.collect, &universe);
        observer.on_run_start(universe.edge_count(), universe.vehicle_count());

        let mut step = Step::ZERO;
        while step.0 < self.run.max_steps && client.expected_vehicles() > 0 {
            let samples = client.step()?;
            let active = samples.len();

            for (name, raw) in &samples {
                let vehicle = universe.vehicle_id(name)?;
                let sample = VehicleSample {
                    edge:      universe.edge_id(&raw.edge)?,
                    co2_mg_s:  raw.co2_mg_s,
                    nox_mg_s:  raw.nox_mg_s,
                    fuel_ml_s: raw.fuel_ml_s,
                    speed_m_s: raw.speed_m_s,
                    x:         raw.x,
                    y:         raw.y,
                    step,
                };
                collector.ingest(vehicle, &sample, &*client)?;
            }

            collector.record_step_count(active as u64);
            observer.on_step_end(step, active);
            step = step + 1;
        }

        observer.on_run_end(step);
        Ok(RunOutcome {
            universe,
            collector,
            steps: step.0,
        })
    }
}
