//! `vt-metrics` — metric registry, collection policy, and aggregation engine.
//!
//! This crate owns everything between a decoded telemetry sample and the
//! read-only accumulator state that `vt-output` flattens into tables:
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`registry`] | `Metric`, `Level` — the eight metrics and the levels each one writes to |
//! | [`config`]   | `CollectMode`, `CollectConfig` — per-metric collection modes |
//! | [`policy`]   | `should_collect` — the vehicle-inclusion predicate      |
//! | [`state`]    | Accumulator shapes (sums, sequences, counters, traces)  |
//! | [`engine`]   | `Collector`, `VehicleSample` — per-sample routing into accumulators |
//! | [`error`]    | `MetricsError`, `MetricsResult`                         |
//!
//! # Lifecycle
//!
//! A [`Collector`] is allocated once at run start from the entity universe
//! and the active metric set, mutated once per incoming sample during the
//! run, read-only during export, and discarded afterwards.  Accumulator
//! shapes are fixed at allocation and never change during the run.

pub mod config;
pub mod engine;
pub mod error;
pub mod policy;
pub mod registry;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CollectConfig, CollectMode};
pub use engine::{Collector, VehicleSample};
pub use error::{MetricsError, MetricsResult};
pub use policy::{BACKGROUND_MARKER, should_collect};
pub use registry::{Level, Metric};
pub use state::{EdgeTraces, EmissionTotals, GpsTrace, SpeedSamples, StepCounters, StepCounts};
