//! Table builders — flatten read-only collector state into [`Table`]s.
//!
//! Edge and vehicle tables emit one row per entity in universe order, with
//! the id column first and one `total_<metric>` column per requested metric
//! in the caller's order.  The v_edge column carries the derived occupancy
//! tally, not the raw per-vehicle sequences.

use vt_core::EntityUniverse;
use vt_metrics::{Collector, Level, Metric};

use crate::error::{OutputError, OutputResult};
use crate::table::Table;

/// Edge-table metric order used by [`MeasureWriter`][crate::MeasureWriter].
pub const EDGE_METRIC_ORDER: [Metric; 4] =
    [Metric::Co2, Metric::Nox, Metric::Fuel, Metric::VEdge];

/// Vehicle-table metric order used by [`MeasureWriter`][crate::MeasureWriter].
pub const VEHICLE_METRIC_ORDER: [Metric; 4] =
    [Metric::Co2, Metric::Nox, Metric::Fuel, Metric::TravelTime];

// ── Edge table ────────────────────────────────────────────────────────────────

/// One row per edge in universe order; columns = `edge_id` plus
/// `total_<metric>` for each metric in `metrics`, in that order.
///
/// # Errors
///
/// `MetricInactive` if any requested metric's mode was `none`;
/// `ColumnUnsupported` if a metric has no edge-level column.
pub fn edge_table(
    collector: &Collector,
    universe:  &EntityUniverse,
    metrics:   &[Metric],
) -> OutputResult<Table> {
    let columns: Vec<Vec<String>> = metrics
        .iter()
        .map(|&metric| edge_column(collector, metric))
        .collect::<OutputResult<_>>()?;

    Ok(assemble("edge_id", universe.edge_names(), metrics, columns))
}

/// The flattened edge-level column for one metric.
fn edge_column(collector: &Collector, metric: Metric) -> OutputResult<Vec<String>> {
    match metric {
        Metric::Co2 | Metric::Nox | Metric::Fuel => {
            let totals = collector.emissions(metric)?;
            Ok(totals.edge.iter().map(f64::to_string).collect())
        }
        // Derived transform: occupancy tally over de-duplicated sequences.
        Metric::VEdge => {
            let traces = collector.edge_traces()?;
            let tally = traces.edge_occupancy(collector.edge_count());
            Ok(tally.iter().map(u64::to_string).collect())
        }
        other => Err(OutputError::ColumnUnsupported {
            metric: other,
            level:  Level::Edge,
        }),
    }
}

// ── Vehicle table ─────────────────────────────────────────────────────────────

/// One row per vehicle in universe order; columns = `vehicle_id` plus
/// `total_<metric>` for each metric in `metrics`, in that order.
///
/// # Errors
///
/// `MetricInactive` if any requested metric's mode was `none`;
/// `ColumnUnsupported` if a metric has no vehicle-level column.
pub fn vehicle_table(
    collector: &Collector,
    universe:  &EntityUniverse,
    metrics:   &[Metric],
) -> OutputResult<Table> {
    let columns: Vec<Vec<String>> = metrics
        .iter()
        .map(|&metric| vehicle_column(collector, metric))
        .collect::<OutputResult<_>>()?;

    Ok(assemble("vehicle_id", universe.vehicle_names(), metrics, columns))
}

/// The flattened vehicle-level column for one metric.
fn vehicle_column(collector: &Collector, metric: Metric) -> OutputResult<Vec<String>> {
    match metric {
        Metric::Co2 | Metric::Nox | Metric::Fuel => {
            let totals = collector.emissions(metric)?;
            Ok(totals.vehicle.iter().map(f64::to_string).collect())
        }
        Metric::TravelTime => {
            let counters = collector.traveltime()?;
            Ok(counters.vehicle.iter().map(u64::to_string).collect())
        }
        other => Err(OutputError::ColumnUnsupported {
            metric: other,
            level:  Level::Vehicle,
        }),
    }
}

// ── Step-count table ──────────────────────────────────────────────────────────

/// Two columns: `timestep` (0-based, contiguous) and `count`, one row per
/// recorded step in call order.
pub fn step_count_table(collector: &Collector) -> OutputResult<Table> {
    let counts = collector.step_counts()?;
    let mut table = Table::new(vec!["timestep".into(), "count".into()]);
    for (step, count) in counts.counts.iter().enumerate() {
        table.push_row(vec![step.to_string(), count.to_string()]);
    }
    Ok(table)
}

// ── GPS table ─────────────────────────────────────────────────────────────────

/// Four columns: `uid`, `lat`, `lng`, `timestamp`, one row per recorded
/// sample in arrival order.
pub fn gps_table(collector: &Collector, universe: &EntityUniverse) -> OutputResult<Table> {
    let gps = collector.gps()?;
    let mut table = Table::new(vec![
        "uid".into(),
        "lat".into(),
        "lng".into(),
        "timestamp".into(),
    ]);
    for i in 0..gps.len() {
        table.push_row(vec![
            universe.vehicle_name(gps.uids[i]).to_owned(),
            gps.lats[i].to_string(),
            gps.lngs[i].to_string(),
            gps.timestamps[i].to_string(),
        ]);
    }
    Ok(table)
}

// ── Speed table ───────────────────────────────────────────────────────────────

/// Two columns: `edge_id` and `total_speed` (sum of recorded samples per
/// edge), one row per edge in universe order.
pub fn speed_table(collector: &Collector, universe: &EntityUniverse) -> OutputResult<Table> {
    let sums = collector.speed()?.edge_sums();
    let mut table = Table::new(vec!["edge_id".into(), "total_speed".into()]);
    for (name, sum) in universe.edge_names().iter().zip(&sums) {
        table.push_row(vec![name.clone(), sum.to_string()]);
    }
    Ok(table)
}

// ── Shared assembly ───────────────────────────────────────────────────────────

/// Zip an id column with pre-flattened metric columns into a table.
fn assemble(
    id_header: &str,
    ids:       &[String],
    metrics:   &[Metric],
    columns:   Vec<Vec<String>>,
) -> Table {
    let mut header = vec![id_header.to_owned()];
    header.extend(metrics.iter().map(|m| format!("total_{m}")));

    let mut table = Table::new(header);
    for (i, id) in ids.iter().enumerate() {
        let mut row = Vec::with_capacity(1 + columns.len());
        row.push(id.clone());
        for column in &columns {
            row.push(column[i].clone());
        }
        table.push_row(row);
    }
    table
}
