//! Accumulator shapes.
//!
//! Each active metric owns exactly one of these; the shape is fixed when the
//! [`Collector`][crate::Collector] is allocated and never changes during the
//! run.  Universe-keyed accumulators are flat `Vec`s indexed by interned id
//! and pre-populated with a zero/empty entry for every entity, so export
//! never encounters a missing key.  GPS traces and step counts are keyed by
//! emission order instead and start empty.

use vt_core::{EdgeId, Step, VehicleId};

// ── Universe-keyed shapes ─────────────────────────────────────────────────────

/// Running sums per edge and per vehicle (co2, nox, fuel).
#[derive(Debug)]
pub struct EmissionTotals {
    /// Indexed by `EdgeId`, length = edge universe size.
    pub edge:    Vec<f64>,
    /// Indexed by `VehicleId`, length = vehicle universe size.
    pub vehicle: Vec<f64>,
}

impl EmissionTotals {
    pub(crate) fn new(n_edges: usize, n_vehicles: usize) -> Self {
        Self {
            edge:    vec![0.0; n_edges],
            vehicle: vec![0.0; n_vehicles],
        }
    }

    /// Add one sample's rate to both the edge and the vehicle total.
    #[inline]
    pub(crate) fn add(&mut self, edge: EdgeId, vehicle: VehicleId, rate: f64) {
        self.edge[edge.index()] += rate;
        self.vehicle[vehicle.index()] += rate;
    }
}

/// Raw speed samples per edge, in arrival order.
#[derive(Debug)]
pub struct SpeedSamples {
    /// Indexed by `EdgeId`, length = edge universe size.
    pub edge: Vec<Vec<f64>>,
}

impl SpeedSamples {
    pub(crate) fn new(n_edges: usize) -> Self {
        Self { edge: vec![Vec::new(); n_edges] }
    }

    /// Sum of recorded samples per edge, in universe order.
    pub fn edge_sums(&self) -> Vec<f64> {
        self.edge.iter().map(|s| s.iter().sum()).collect()
    }
}

/// Steps observed per vehicle (traveltime).
#[derive(Debug)]
pub struct StepCounters {
    /// Indexed by `VehicleId`, length = vehicle universe size.
    pub vehicle: Vec<u64>,
}

impl StepCounters {
    pub(crate) fn new(n_vehicles: usize) -> Self {
        Self { vehicle: vec![0; n_vehicles] }
    }
}

/// Per-vehicle edge sequences with consecutive duplicates collapsed (v_edge).
#[derive(Debug)]
pub struct EdgeTraces {
    /// Indexed by `VehicleId`, length = vehicle universe size.
    pub vehicle: Vec<Vec<EdgeId>>,
}

impl EdgeTraces {
    pub(crate) fn new(n_vehicles: usize) -> Self {
        Self { vehicle: vec![Vec::new(); n_vehicles] }
    }

    /// Append `edge` to the vehicle's sequence unless it equals the current
    /// last element.  This keeps the invariant that no sequence ever
    /// contains two consecutive equal entries.
    #[inline]
    pub(crate) fn observe(&mut self, vehicle: VehicleId, edge: EdgeId) {
        let trace = &mut self.vehicle[vehicle.index()];
        if trace.last() != Some(&edge) {
            trace.push(edge);
        }
    }

    /// Derive the per-edge occupancy tally: every occurrence of an edge in
    /// any vehicle's de-duplicated sequence counts one visit span.
    pub fn edge_occupancy(&self, n_edges: usize) -> Vec<u64> {
        let mut tally = vec![0u64; n_edges];
        for trace in &self.vehicle {
            for edge in trace {
                tally[edge.index()] += 1;
            }
        }
        tally
    }
}

// ── Emission-order shapes ─────────────────────────────────────────────────────

/// GPS trace: four parallel sequences in sample-arrival order (not sorted).
#[derive(Debug, Default)]
pub struct GpsTrace {
    pub uids:       Vec<VehicleId>,
    pub lats:       Vec<f64>,
    pub lngs:       Vec<f64>,
    pub timestamps: Vec<u64>,
}

impl GpsTrace {
    #[inline]
    pub(crate) fn push(&mut self, vehicle: VehicleId, lat: f64, lng: f64, step: Step) {
        self.uids.push(vehicle);
        self.lats.push(lat);
        self.lngs.push(lng);
        self.timestamps.push(step.0);
    }

    pub fn len(&self) -> usize {
        self.uids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uids.is_empty()
    }
}

/// Active-vehicle count per step, one entry per recorded step (v_step).
#[derive(Debug, Default)]
pub struct StepCounts {
    pub counts: Vec<u64>,
}

impl StepCounts {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
