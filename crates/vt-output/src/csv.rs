//! CSV persistence.
//!
//! [`MeasureWriter`] writes every active table into its configured directory
//! once, after the run; collector state is read-only by then.

use std::path::{Path, PathBuf};

use csv::Writer;

use vt_core::EntityUniverse;
use vt_metrics::{Collector, Metric};

use crate::error::OutputResult;
use crate::export::{
    EDGE_METRIC_ORDER, VEHICLE_METRIC_ORDER, edge_table, gps_table, speed_table,
    step_count_table, vehicle_table,
};
use crate::table::Table;

pub const EDGE_MEASURES_FILE:    &str = "edge_measures.csv";
pub const VEHICLE_MEASURES_FILE: &str = "vehicle_measures.csv";
pub const STEP_COUNTS_FILE:      &str = "v_step.csv";
pub const GPS_FILE:              &str = "gps_vehicle.csv";
pub const SPEED_FILE:            &str = "speed_edge.csv";

/// Writes collector state as CSV files into one directory.
pub struct MeasureWriter {
    dir: PathBuf,
}

impl MeasureWriter {
    /// The directory must already exist; creating the run's output directory
    /// is the application's job.
    pub fn new(dir: &Path) -> Self {
        Self { dir: dir.to_owned() }
    }

    /// Write one table as `<dir>/<file_name>`.
    pub fn write_table(&self, file_name: &str, table: &Table) -> OutputResult<PathBuf> {
        let path = self.dir.join(file_name);
        let mut writer = Writer::from_path(&path)?;
        writer.write_record(&table.header)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(path)
    }

    /// Persist every active table, returning the paths written.
    ///
    /// The edge and vehicle tables are always written (their metric columns
    /// filtered to active metrics, possibly leaving only the id column); the
    /// step-count, GPS, and speed tables only exist when their metric is
    /// active.
    pub fn write_all(
        &self,
        collector: &Collector,
        universe:  &EntityUniverse,
    ) -> OutputResult<Vec<PathBuf>> {
        let mut written = Vec::new();

        let edge_metrics = active(collector, &EDGE_METRIC_ORDER);
        let table = edge_table(collector, universe, &edge_metrics)?;
        written.push(self.write_table(EDGE_MEASURES_FILE, &table)?);

        let vehicle_metrics = active(collector, &VEHICLE_METRIC_ORDER);
        let table = vehicle_table(collector, universe, &vehicle_metrics)?;
        written.push(self.write_table(VEHICLE_MEASURES_FILE, &table)?);

        if collector.is_active(Metric::VStep) {
            let table = step_count_table(collector)?;
            written.push(self.write_table(STEP_COUNTS_FILE, &table)?);
        }

        if collector.is_active(Metric::Gps) {
            let table = gps_table(collector, universe)?;
            written.push(self.write_table(GPS_FILE, &table)?);
        }

        if collector.is_active(Metric::Speed) {
            let table = speed_table(collector, universe)?;
            written.push(self.write_table(SPEED_FILE, &table)?);
        }

        Ok(written)
    }
}

/// Filter a metric order down to the metrics the collector actually holds.
fn active(collector: &Collector, order: &[Metric]) -> Vec<Metric> {
    order.iter().copied().filter(|&m| collector.is_active(m)).collect()
}
