//! `vt-harness` — drives a simulator client through a step loop and feeds
//! every telemetry sample to the aggregation engine.
//!
//! The simulator itself (process lifecycle, stepping, subscriptions) is an
//! external collaborator behind the [`SimulatorClient`] trait; the harness
//! owns only the loop: build the entity universe, allocate the collector,
//! ingest each step's samples, record the per-step vehicle count, and hand
//! back the finished collector for export.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`client`]   | `SimulatorClient`, `RawSample`                        |
//! | [`runner`]   | `Runner`, `RunConfig`, `RunOutcome`                   |
//! | [`observer`] | `RunObserver`, `NoopObserver`                         |
//! | [`error`]    | `HarnessError`, `HarnessResult`                       |

pub mod client;
pub mod error;
pub mod observer;
pub mod runner;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use client::{RawSample, SimulatorClient};
pub use error::{HarnessError, HarnessResult};
pub use observer::{NoopObserver, RunObserver};
pub use runner::{RunConfig, RunOutcome, Runner};
