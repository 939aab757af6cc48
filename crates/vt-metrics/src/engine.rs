//! The aggregation engine — routes one telemetry sample per (vehicle, step)
//! into the accumulators of every active metric.
//!
//! # Mode checks
//!
//! A metric whose mode is `none` never allocates an accumulator, so the
//! `Option` check doubles as the "is this metric collected at all" gate and
//! no mutation can happen for disabled metrics.  Per-vehicle inclusion under
//! the remaining modes is resolved once at allocation time: the policy
//! predicate only depends on the vehicle name, and the universe is fixed, so
//! [`Collector::new`] precomputes one boolean per vehicle instead of
//! re-scanning names on every sample.

use vt_core::{EdgeId, EntityUniverse, GeoProjector, Step, VehicleId};

use crate::config::{CollectConfig, CollectMode};
use crate::error::{MetricsError, MetricsResult};
use crate::policy::should_collect;
use crate::registry::Metric;
use crate::state::{
    EdgeTraces, EmissionTotals, GpsTrace, SpeedSamples, StepCounters, StepCounts,
};

// ── Sample ────────────────────────────────────────────────────────────────────

/// One decoded telemetry record for one vehicle at one step.
///
/// Rates are instantaneous per-second values as reported by the simulator's
/// emission model; `x`/`y` are in the simulator's planar coordinate frame and
/// are only converted to geographic coordinates when a GPS sample is kept.
#[derive(Copy, Clone, Debug)]
pub struct VehicleSample {
    /// The edge the vehicle currently occupies.
    pub edge:      EdgeId,
    /// CO2 emission rate, mg/s.
    pub co2_mg_s:  f64,
    /// NOx emission rate, mg/s.
    pub nox_mg_s:  f64,
    /// Fuel consumption rate, ml/s.
    pub fuel_ml_s: f64,
    /// Current speed, m/s.
    pub speed_m_s: f64,
    /// Position in the simulator's coordinate frame.
    pub x:         f64,
    pub y:         f64,
    /// The step this sample was observed at.
    pub step:      Step,
}

// ── Collector ─────────────────────────────────────────────────────────────────

/// Accumulator state for one run.
///
/// Allocated once from the entity universe and the configured modes; one
/// accumulator exists per metric with mode != `none`, pre-populated for every
/// entity in the universe (emission-order metrics start empty instead).
#[derive(Debug)]
pub struct Collector {
    modes:      CollectConfig,
    n_edges:    usize,
    n_vehicles: usize,

    /// `true` for vehicles admitted under `Real` mode, indexed by `VehicleId`.
    /// `Rand` is the complement; `All`/`None` don't consult it.
    real_mask: Vec<bool>,

    gps:        Option<GpsTrace>,
    co2:        Option<EmissionTotals>,
    nox:        Option<EmissionTotals>,
    fuel:       Option<EmissionTotals>,
    speed:      Option<SpeedSamples>,
    traveltime: Option<StepCounters>,
    v_edge:     Option<EdgeTraces>,
    v_step:     Option<StepCounts>,
}

impl Collector {
    /// Allocate accumulators for every active metric.
    pub fn new(modes: CollectConfig, universe: &EntityUniverse) -> Self {
        let n_edges = universe.edge_count();
        let n_vehicles = universe.vehicle_count();

        let real_mask = universe
            .vehicle_names()
            .iter()
            .map(|name| should_collect(name, CollectMode::Real))
            .collect();

        let active = |m: Metric| modes.is_active(m);

        Self {
            modes,
            n_edges,
            n_vehicles,
            real_mask,
            gps:        active(Metric::Gps).then(GpsTrace::default),
            co2:        active(Metric::Co2).then(|| EmissionTotals::new(n_edges, n_vehicles)),
            nox:        active(Metric::Nox).then(|| EmissionTotals::new(n_edges, n_vehicles)),
            fuel:       active(Metric::Fuel).then(|| EmissionTotals::new(n_edges, n_vehicles)),
            speed:      active(Metric::Speed).then(|| SpeedSamples::new(n_edges)),
            traveltime: active(Metric::TravelTime).then(|| StepCounters::new(n_vehicles)),
            v_edge:     active(Metric::VEdge).then(|| EdgeTraces::new(n_vehicles)),
            v_step:     active(Metric::VStep).then(StepCounts::default),
        }
    }

    /// The modes this collector was allocated with.
    pub fn modes(&self) -> &CollectConfig {
        &self.modes
    }

    /// `true` if `metric` has a live accumulator.
    pub fn is_active(&self, metric: Metric) -> bool {
        self.modes.is_active(metric)
    }

    // ── Ingestion ─────────────────────────────────────────────────────────

    /// Route one sample into every active metric that admits `vehicle`.
    ///
    /// `projector` is consulted only when a GPS sample is actually kept.
    ///
    /// # Errors
    ///
    /// [`MetricsError::UnknownEntity`] if the vehicle or edge id lies outside
    /// the universe this collector was allocated from.  That is an upstream
    /// integration error; nothing is partially applied in that case.
    pub fn ingest(
        &mut self,
        vehicle:   VehicleId,
        sample:    &VehicleSample,
        projector: &dyn GeoProjector,
    ) -> MetricsResult<()> {
        if vehicle.index() >= self.n_vehicles {
            return Err(MetricsError::UnknownEntity {
                kind:     "vehicle",
                id:       vehicle.0,
                universe: self.n_vehicles,
            });
        }
        if sample.edge.index() >= self.n_edges {
            return Err(MetricsError::UnknownEntity {
                kind:     "edge",
                id:       sample.edge.0,
                universe: self.n_edges,
            });
        }

        let is_real = self.real_mask[vehicle.index()];

        // GPS trace
        if admits(self.modes.gps, is_real) {
            if let Some(gps) = self.gps.as_mut() {
                let geo = projector.to_geo(sample.x, sample.y);
                gps.push(vehicle, geo.lat, geo.lon, sample.step);
            }
        }

        // CO2 / NOx / fuel running sums
        if admits(self.modes.co2, is_real) {
            if let Some(co2) = self.co2.as_mut() {
                co2.add(sample.edge, vehicle, sample.co2_mg_s);
            }
        }
        if admits(self.modes.nox, is_real) {
            if let Some(nox) = self.nox.as_mut() {
                nox.add(sample.edge, vehicle, sample.nox_mg_s);
            }
        }
        if admits(self.modes.fuel, is_real) {
            if let Some(fuel) = self.fuel.as_mut() {
                fuel.add(sample.edge, vehicle, sample.fuel_ml_s);
            }
        }

        // Speed samples
        if admits(self.modes.speed, is_real) {
            if let Some(speed) = self.speed.as_mut() {
                speed.edge[sample.edge.index()].push(sample.speed_m_s);
            }
        }

        // Traveltime: one increment per observed step
        if admits(self.modes.traveltime, is_real) {
            if let Some(tt) = self.traveltime.as_mut() {
                tt.vehicle[vehicle.index()] += 1;
            }
        }

        // Vehicles per edge: de-duplicated edge sequence
        if admits(self.modes.v_edge, is_real) {
            if let Some(traces) = self.v_edge.as_mut() {
                traces.observe(vehicle, sample.edge);
            }
        }

        Ok(())
    }

    /// Record the active-vehicle count for one step.
    ///
    /// Called once per simulated step, independently of [`ingest`][Self::ingest];
    /// a no-op when `v_step` is disabled.
    pub fn record_step_count(&mut self, count: u64) {
        if let Some(v_step) = self.v_step.as_mut() {
            v_step.counts.push(count);
        }
    }

    // ── Read-only accumulator access (export) ─────────────────────────────
    //
    // Each accessor fails with `MetricInactive` when the metric's mode was
    // `none`: exporters must only be asked for active metrics.

    pub fn gps(&self) -> MetricsResult<&GpsTrace> {
        self.gps.as_ref().ok_or(MetricsError::MetricInactive(Metric::Gps))
    }

    /// Running sums for one of the emission metrics (co2, nox, fuel).
    ///
    /// # Errors
    ///
    /// `MetricInactive` if the metric is disabled; `NotAnEmission` if
    /// `metric` is not one of co2/nox/fuel.
    pub fn emissions(&self, metric: Metric) -> MetricsResult<&EmissionTotals> {
        let slot = match metric {
            Metric::Co2  => &self.co2,
            Metric::Nox  => &self.nox,
            Metric::Fuel => &self.fuel,
            other => return Err(MetricsError::NotAnEmission(other)),
        };
        slot.as_ref().ok_or(MetricsError::MetricInactive(metric))
    }

    pub fn speed(&self) -> MetricsResult<&SpeedSamples> {
        self.speed.as_ref().ok_or(MetricsError::MetricInactive(Metric::Speed))
    }

    pub fn traveltime(&self) -> MetricsResult<&StepCounters> {
        self.traveltime
            .as_ref()
            .ok_or(MetricsError::MetricInactive(Metric::TravelTime))
    }

    pub fn edge_traces(&self) -> MetricsResult<&EdgeTraces> {
        self.v_edge
            .as_ref()
            .ok_or(MetricsError::MetricInactive(Metric::VEdge))
    }

    pub fn step_counts(&self) -> MetricsResult<&StepCounts> {
        self.v_step
            .as_ref()
            .ok_or(MetricsError::MetricInactive(Metric::VStep))
    }

    /// Edge universe size this collector was allocated for.
    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    /// Vehicle universe size this collector was allocated for.
    pub fn vehicle_count(&self) -> usize {
        self.n_vehicles
    }
}

/// Per-vehicle admission under a mode, given the precomputed `Real` flag.
#[inline]
fn admits(mode: CollectMode, is_real: bool) -> bool {
    match mode {
        CollectMode::None => false,
        CollectMode::All  => true,
        CollectMode::Real => is_real,
        CollectMode::Rand => !is_real,
    }
}
