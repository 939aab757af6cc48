//! `vt-core` — foundational types for the `rust_vt` telemetry harness.
//!
//! This crate is a dependency of every other `vt-*` crate.  It intentionally
//! has no `vt-*` dependencies and minimal external ones (only `rustc-hash`
//! and `thiserror`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `EdgeId`, `VehicleId`                                    |
//! | [`geo`]      | `GeoPoint`, the `GeoProjector` conversion seam           |
//! | [`step`]     | `Step` — the simulation step counter                     |
//! | [`universe`] | `EntityUniverse` — the fixed edge/vehicle id sets        |
//! | [`error`]    | `CoreError`, `CoreResult`                                |

pub mod error;
pub mod geo;
pub mod ids;
pub mod step;
pub mod universe;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, GeoProjector};
pub use ids::{EdgeId, VehicleId};
pub use step::Step;
pub use universe::{EntityUniverse, is_internal_edge, INTERNAL_EDGE_MARKER};
