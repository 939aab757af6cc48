//! Per-metric collection configuration.
//!
//! The configuration collaborator supplies one mode token per metric from the
//! closed set `{"all", "none", "real", "rand"}`.  `CollectConfig` derives
//! `serde::Deserialize` so applications can load it straight from a TOML or
//! JSON fragment; field names are the metric config names.
//!
//! ```toml
//! co2    = "real"
//! gps    = "all"
//! v_step = "none"
//! ```
//!
//! Defaults reproduce the original collection flags: everything `real`
//! except `gps = none`.

use serde::Deserialize;

use crate::{Metric, MetricsError, MetricsResult};

/// How vehicles are admitted to a metric's accumulators.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectMode {
    /// Every vehicle.
    All,
    /// No vehicle — the metric's accumulators are never allocated.
    None,
    /// Only vehicles whose name does NOT contain the background marker.
    Real,
    /// Only background vehicles (name contains the marker).
    Rand,
}

impl CollectMode {
    /// Parse a mode token.
    ///
    /// # Errors
    ///
    /// [`MetricsError::UnknownMode`] for tokens outside the closed set —
    /// fatal at configuration time.
    pub fn from_token(token: &str) -> MetricsResult<CollectMode> {
        match token {
            "all"  => Ok(CollectMode::All),
            "none" => Ok(CollectMode::None),
            "real" => Ok(CollectMode::Real),
            "rand" => Ok(CollectMode::Rand),
            other  => Err(MetricsError::UnknownMode(other.to_owned())),
        }
    }

    /// `true` unless the mode is `None`.
    #[inline]
    pub fn is_active(self) -> bool {
        self != CollectMode::None
    }
}

/// One collection mode per metric.
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectConfig {
    pub gps:        CollectMode,
    pub co2:        CollectMode,
    pub nox:        CollectMode,
    pub fuel:       CollectMode,
    pub speed:      CollectMode,
    pub traveltime: CollectMode,
    pub v_edge:     CollectMode,
    pub v_step:     CollectMode,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            gps:        CollectMode::None,
            co2:        CollectMode::Real,
            nox:        CollectMode::Real,
            fuel:       CollectMode::Real,
            speed:      CollectMode::Real,
            traveltime: CollectMode::Real,
            v_edge:     CollectMode::Real,
            v_step:     CollectMode::Real,
        }
    }
}

impl CollectConfig {
    /// A config with every metric disabled.  Useful as a test baseline.
    pub fn disabled() -> Self {
        Self {
            gps:        CollectMode::None,
            co2:        CollectMode::None,
            nox:        CollectMode::None,
            fuel:       CollectMode::None,
            speed:      CollectMode::None,
            traveltime: CollectMode::None,
            v_edge:     CollectMode::None,
            v_step:     CollectMode::None,
        }
    }

    /// The mode configured for `metric`.
    pub fn mode(&self, metric: Metric) -> CollectMode {
        match metric {
            Metric::Gps        => self.gps,
            Metric::Co2        => self.co2,
            Metric::Nox        => self.nox,
            Metric::Fuel       => self.fuel,
            Metric::Speed      => self.speed,
            Metric::TravelTime => self.traveltime,
            Metric::VEdge      => self.v_edge,
            Metric::VStep      => self.v_step,
        }
    }

    /// Set the mode for a metric by config name and mode token.
    ///
    /// This is the entry point for key/value-style configuration sources
    /// (command lines, environment); both the name and the token are
    /// validated here, before the run starts.
    pub fn set(&mut self, metric_name: &str, mode_token: &str) -> MetricsResult<()> {
        let metric = Metric::from_name(metric_name)?;
        let mode = CollectMode::from_token(mode_token)?;
        let slot = match metric {
            Metric::Gps        => &mut self.gps,
            Metric::Co2        => &mut self.co2,
            Metric::Nox        => &mut self.nox,
            Metric::Fuel       => &mut self.fuel,
            Metric::Speed      => &mut self.speed,
            Metric::TravelTime => &mut self.traveltime,
            Metric::VEdge      => &mut self.v_edge,
            Metric::VStep      => &mut self.v_step,
        };
        *slot = mode;
        Ok(())
    }

    /// `true` if `metric` will be collected at all.
    #[inline]
    pub fn is_active(&self, metric: Metric) -> bool {
        self.mode(metric).is_active()
    }

    /// Iterator over `(metric, mode)` pairs in registry order.
    pub fn modes(&self) -> impl Iterator<Item = (Metric, CollectMode)> + '_ {
        Metric::ALL.iter().map(|&m| (m, self.mode(m)))
    }
}
