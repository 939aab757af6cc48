//! `vt-output` — flattens collector state into tables and persists them.
//!
//! One CSV file per exported metric group, UTF-8, comma-separated, header
//! row first:
//!
//! | File                   | Columns                                         |
//! |------------------------|-------------------------------------------------|
//! | `edge_measures.csv`    | `edge_id`, `total_<metric>` per active edge metric |
//! | `vehicle_measures.csv` | `vehicle_id`, `total_<metric>` per active vehicle metric |
//! | `v_step.csv`           | `timestep`, `count`                             |
//! | `gps_vehicle.csv`      | `uid`, `lat`, `lng`, `timestamp`                |
//! | `speed_edge.csv`       | `edge_id`, `total_speed`                        |
//!
//! Table builders live in [`export`]; [`MeasureWriter`] persists every active
//! table in one call after the run.  Asking a builder for an inactive metric
//! is a caller contract violation and fails hard — activity is decided by the
//! same mode flags used when the collector was allocated.

pub mod csv;
pub mod error;
pub mod export;
pub mod table;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::MeasureWriter;
pub use error::{OutputError, OutputResult};
pub use export::{
    EDGE_METRIC_ORDER, VEHICLE_METRIC_ORDER, edge_table, gps_table, speed_table,
    step_count_table, vehicle_table,
};
pub use table::Table;
