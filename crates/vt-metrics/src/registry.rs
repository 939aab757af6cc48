//! The metric registry — the eight known metrics and their aggregation levels.
//!
//! The mapping is static: a metric's levels decide which accumulators are
//! allocated for it and which export tables may ask for it.  An unknown
//! metric name is a configuration error surfaced before the run starts.

use std::fmt;

use crate::{MetricsError, MetricsResult};

/// An aggregation level a metric writes to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Level {
    /// Keyed by edge id, one export row per edge in universe order.
    Edge,
    /// Keyed by vehicle id (or, for GPS/step counts, by emission order).
    Vehicle,
}

/// The closed set of collectable metrics.
///
/// Config names match the original collection flags: `gps`, `co2`, `nox`,
/// `fuel`, `speed`, `traveltime`, `v_edge`, `v_step`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Metric {
    /// GPS traces: (uid, lat, lng, timestamp) in arrival order.
    Gps,
    /// CO2 emission rate (mg/s), summed per edge and per vehicle.
    Co2,
    /// NOx emission rate (mg/s), summed per edge and per vehicle.
    Nox,
    /// Fuel consumption rate (ml/s), summed per edge and per vehicle.
    Fuel,
    /// Raw speed samples (m/s) per edge.
    Speed,
    /// Steps observed per vehicle — a proxy for elapsed simulated time.
    TravelTime,
    /// Per-vehicle edge sequence with consecutive duplicates collapsed.
    VEdge,
    /// Active-vehicle count per step, appended once per step.
    VStep,
}

impl Metric {
    /// Every metric, in the registry's canonical order.
    pub const ALL: [Metric; 8] = [
        Metric::Gps,
        Metric::Co2,
        Metric::Nox,
        Metric::Fuel,
        Metric::Speed,
        Metric::TravelTime,
        Metric::VEdge,
        Metric::VStep,
    ];

    /// Resolve a config name to a metric.
    ///
    /// # Errors
    ///
    /// [`MetricsError::UnknownMetric`] for anything outside the eight known
    /// names — fatal at configuration time.
    pub fn from_name(name: &str) -> MetricsResult<Metric> {
        match name {
            "gps"        => Ok(Metric::Gps),
            "co2"        => Ok(Metric::Co2),
            "nox"        => Ok(Metric::Nox),
            "fuel"       => Ok(Metric::Fuel),
            "speed"      => Ok(Metric::Speed),
            "traveltime" => Ok(Metric::TravelTime),
            "v_edge"     => Ok(Metric::VEdge),
            "v_step"     => Ok(Metric::VStep),
            other        => Err(MetricsError::UnknownMetric(other.to_owned())),
        }
    }

    /// The metric's config name.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Gps        => "gps",
            Metric::Co2        => "co2",
            Metric::Nox        => "nox",
            Metric::Fuel       => "fuel",
            Metric::Speed      => "speed",
            Metric::TravelTime => "traveltime",
            Metric::VEdge      => "v_edge",
            Metric::VStep      => "v_step",
        }
    }

    /// The aggregation levels this metric writes to.
    pub fn levels(self) -> &'static [Level] {
        match self {
            Metric::Gps        => &[Level::Vehicle],
            Metric::Co2        => &[Level::Edge, Level::Vehicle],
            Metric::Nox        => &[Level::Edge, Level::Vehicle],
            Metric::Fuel       => &[Level::Edge, Level::Vehicle],
            Metric::Speed      => &[Level::Edge],
            Metric::TravelTime => &[Level::Vehicle],
            Metric::VEdge      => &[Level::Vehicle],
            Metric::VStep      => &[Level::Vehicle],
        }
    }

    /// `true` if the metric writes to `level`.
    #[inline]
    pub fn supports(self, level: Level) -> bool {
        self.levels().contains(&level)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Edge    => "edge",
            Level::Vehicle => "vehicle",
        })
    }
}
