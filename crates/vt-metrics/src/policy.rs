//! The vehicle-inclusion policy — a pure predicate, no side effects.
//!
//! Synthetic/background demand is marked by a reserved substring in the
//! vehicle name.  `Real` and `Rand` are complementary filters over that
//! marker, so together they partition any vehicle universe with no overlap
//! and no gap.

use crate::CollectMode;

/// Substring marking synthetic/background vehicles in vehicle names.
pub const BACKGROUND_MARKER: &str = "background";

/// Decide whether `vehicle_name` is included under `mode`.
pub fn should_collect(vehicle_name: &str, mode: CollectMode) -> bool {
    match mode {
        CollectMode::None => false,
        CollectMode::All  => true,
        CollectMode::Real => !vehicle_name.contains(BACKGROUND_MARKER),
        CollectMode::Rand => vehicle_name.contains(BACKGROUND_MARKER),
    }
}
