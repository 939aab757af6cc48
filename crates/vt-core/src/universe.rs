//! The `EntityUniverse` — the fixed, ordered sets of edge and vehicle names.
//!
//! Both sets are known before the run starts: the simulator supplies the edge
//! list of the loaded network and the vehicle list of the loaded demand.  The
//! universe interns every name into a dense typed index
//! ([`EdgeId`]/[`VehicleId`]) so accumulators can be flat `Vec`s instead of
//! string-keyed maps, and keeps the original ordering for export — output
//! tables emit one row per entity in universe order.
//!
//! The universe is immutable after construction.  A name that fails to
//! resolve during the run indicates an upstream universe/sample mismatch and
//! is a hard error, never a silent drop.

use rustc_hash::FxHashMap;

use crate::{CoreError, CoreResult, EdgeId, VehicleId};

/// Edge names beginning with this marker are simulator-internal (junction
/// connector edges) and excluded from the edge universe.
pub const INTERNAL_EDGE_MARKER: char = ':';

/// Returns `true` for simulator-internal edge names.
#[inline]
pub fn is_internal_edge(name: &str) -> bool {
    name.starts_with(INTERNAL_EDGE_MARKER)
}

/// The ordered, fixed sets of edge and vehicle names for one run.
#[derive(Debug)]
pub struct EntityUniverse {
    edge_names:    Vec<String>,
    vehicle_names: Vec<String>,
    edge_index:    FxHashMap<String, EdgeId>,
    vehicle_index: FxHashMap<String, VehicleId>,
}

impl EntityUniverse {
    /// Build a universe from ordered name lists.
    ///
    /// The caller is expected to have filtered internal edges already (see
    /// [`is_internal_edge`]); this constructor does not second-guess the
    /// lists it is given.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateEntity`] if either list repeats a name.
    pub fn new(edge_names: Vec<String>, vehicle_names: Vec<String>) -> CoreResult<Self> {
        let edge_index = intern(&edge_names, EdgeId)?;
        let vehicle_index = intern(&vehicle_names, VehicleId)?;
        Ok(Self {
            edge_names,
            vehicle_names,
            edge_index,
            vehicle_index,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn edge_count(&self) -> usize {
        self.edge_names.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicle_names.len()
    }

    // ── Name → id ─────────────────────────────────────────────────────────

    /// Resolve an edge name to its interned id.
    pub fn edge_id(&self, name: &str) -> CoreResult<EdgeId> {
        self.edge_index
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::UnknownEdge(name.to_owned()))
    }

    /// Resolve a vehicle name to its interned id.
    pub fn vehicle_id(&self, name: &str) -> CoreResult<VehicleId> {
        self.vehicle_index
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::UnknownVehicle(name.to_owned()))
    }

    // ── Id → name ─────────────────────────────────────────────────────────

    /// Name of `edge`.
    ///
    /// # Panics
    /// Panics if `edge` was not produced by this universe.
    pub fn edge_name(&self, edge: EdgeId) -> &str {
        &self.edge_names[edge.index()]
    }

    /// Name of `vehicle`.
    ///
    /// # Panics
    /// Panics if `vehicle` was not produced by this universe.
    pub fn vehicle_name(&self, vehicle: VehicleId) -> &str {
        &self.vehicle_names[vehicle.index()]
    }

    // ── Ordered iteration ─────────────────────────────────────────────────

    /// All edge names in universe (export) order.
    pub fn edge_names(&self) -> &[String] {
        &self.edge_names
    }

    /// All vehicle names in universe (export) order.
    pub fn vehicle_names(&self) -> &[String] {
        &self.vehicle_names
    }

    /// Iterator over `(VehicleId, name)` pairs in universe order.
    pub fn vehicles(&self) -> impl Iterator<Item = (VehicleId, &str)> + '_ {
        self.vehicle_names
            .iter()
            .enumerate()
            .map(|(i, name)| (VehicleId(i as u32), name.as_str()))
    }

    /// Iterator over `(EdgeId, name)` pairs in universe order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &str)> + '_ {
        self.edge_names
            .iter()
            .enumerate()
            .map(|(i, name)| (EdgeId(i as u32), name.as_str()))
    }
}

/// Intern `names` into a dense index map, rejecting duplicates.
fn intern<I: Copy>(
    names: &[String],
    make: impl Fn(u32) -> I,
) -> CoreResult<FxHashMap<String, I>> {
    let mut index = FxHashMap::with_capacity_and_hasher(names.len(), Default::default());
    for (i, name) in names.iter().enumerate() {
        if index.insert(name.clone(), make(i as u32)).is_some() {
            return Err(CoreError::DuplicateEntity(name.clone()));
        }
    }
    Ok(index)
}
