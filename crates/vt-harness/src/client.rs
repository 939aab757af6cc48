//! The simulator client seam.

use vt_core::GeoProjector;

use crate::HarnessResult;

/// One undecoded telemetry record as delivered by the simulator's per-vehicle
/// subscription: current edge by name, planar position, speed, and the
/// emission-model rates.
#[derive(Clone, Debug)]
pub struct RawSample {
    /// Name of the edge the vehicle currently occupies.
    pub edge:      String,
    /// Position in the simulator's coordinate frame.
    pub x:         f64,
    pub y:         f64,
    /// Current speed, m/s.
    pub speed_m_s: f64,
    /// CO2 emission rate, mg/s.
    pub co2_mg_s:  f64,
    /// NOx emission rate, mg/s.
    pub nox_mg_s:  f64,
    /// Fuel consumption rate, ml/s.
    pub fuel_ml_s: f64,
}

/// Interface to the external microsimulation engine.
///
/// The `GeoProjector` supertrait supplies the network's planar-to-geographic
/// conversion; only the simulator knows its projection.
///
/// Implementations wrap whatever control API the engine exposes.  The harness
/// never retries: any client failure aborts the run and propagates.
pub trait SimulatorClient: GeoProjector {
    /// Edge names of the loaded network, in the engine's order.
    ///
    /// May include internal (junction) edges; the runner filters those out
    /// before building the universe.
    fn edge_names(&mut self) -> HarnessResult<Vec<String>>;

    /// Vehicle names of the loaded demand, in the engine's order.
    fn vehicle_names(&mut self) -> HarnessResult<Vec<String>>;

    /// Vehicles still active or yet to depart.  The run loop stops when this
    /// reaches zero.
    fn expected_vehicles(&self) -> usize;

    /// Advance the simulation one step and return `(vehicle_name, sample)`
    /// for every subscribed vehicle active during that step.
    fn step(&mut self) -> HarnessResult<Vec<(String, RawSample)>>;
}
