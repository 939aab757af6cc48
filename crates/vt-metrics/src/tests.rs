//! Unit tests for registry, config, policy, and the aggregation engine.

use vt_core::{EdgeId, EntityUniverse, GeoPoint, GeoProjector, Step, VehicleId};

use crate::{CollectConfig, CollectMode, Collector, Metric, MetricsError, VehicleSample};

// ── Shared fixtures ───────────────────────────────────────────────────────────

/// Offsets simulator coordinates by a fixed amount; enough to verify the
/// conversion seam is consulted.
struct ShiftProjector;

impl GeoProjector for ShiftProjector {
    fn to_geo(&self, x: f64, y: f64) -> GeoPoint {
        GeoPoint::new(y + 40.0, x + 9.0)
    }
}

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn universe() -> EntityUniverse {
    EntityUniverse::new(names(&["e1", "e2"]), names(&["v1", "v2"])).unwrap()
}

fn sample(edge: EdgeId, step: u64) -> VehicleSample {
    VehicleSample {
        edge,
        co2_mg_s:  0.0,
        nox_mg_s:  0.0,
        fuel_ml_s: 0.0,
        speed_m_s: 0.0,
        x:         0.0,
        y:         0.0,
        step:      Step(step),
    }
}

#[cfg(test)]
mod registry {
    use crate::{Level, Metric, MetricsError};

    #[test]
    fn known_names_resolve() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_name(metric.name()).unwrap(), metric);
        }
    }

    #[test]
    fn unknown_name_is_config_error() {
        assert!(matches!(
            Metric::from_name("co3"),
            Err(MetricsError::UnknownMetric(_))
        ));
    }

    #[test]
    fn levels_match_the_registry() {
        assert_eq!(Metric::Gps.levels(), [Level::Vehicle]);
        assert_eq!(Metric::Co2.levels(), [Level::Edge, Level::Vehicle]);
        assert_eq!(Metric::Nox.levels(), [Level::Edge, Level::Vehicle]);
        assert_eq!(Metric::Fuel.levels(), [Level::Edge, Level::Vehicle]);
        assert_eq!(Metric::Speed.levels(), [Level::Edge]);
        assert_eq!(Metric::TravelTime.levels(), [Level::Vehicle]);
        assert_eq!(Metric::VEdge.levels(), [Level::Vehicle]);
        assert_eq!(Metric::VStep.levels(), [Level::Vehicle]);
    }

    #[test]
    fn supports() {
        assert!(Metric::Co2.supports(Level::Edge));
        assert!(!Metric::TravelTime.supports(Level::Edge));
    }
}

#[cfg(test)]
mod config {
    use crate::{CollectConfig, CollectMode, Metric, MetricsError};

    #[test]
    fn mode_tokens_parse() {
        assert_eq!(CollectMode::from_token("all").unwrap(), CollectMode::All);
        assert_eq!(CollectMode::from_token("none").unwrap(), CollectMode::None);
        assert_eq!(CollectMode::from_token("real").unwrap(), CollectMode::Real);
        assert_eq!(CollectMode::from_token("rand").unwrap(), CollectMode::Rand);
        assert!(matches!(
            CollectMode::from_token("everything"),
            Err(MetricsError::UnknownMode(_))
        ));
    }

    #[test]
    fn defaults_collect_real_except_gps() {
        let cfg = CollectConfig::default();
        assert_eq!(cfg.gps, CollectMode::None);
        for metric in Metric::ALL {
            if metric != Metric::Gps {
                assert_eq!(cfg.mode(metric), CollectMode::Real, "{metric}");
            }
        }
    }

    #[test]
    fn set_by_name() {
        let mut cfg = CollectConfig::disabled();
        cfg.set("co2", "all").unwrap();
        assert_eq!(cfg.co2, CollectMode::All);
        assert!(cfg.is_active(Metric::Co2));
        assert!(!cfg.is_active(Metric::Nox));
    }

    #[test]
    fn set_rejects_unknown_metric_and_mode() {
        let mut cfg = CollectConfig::default();
        assert!(matches!(cfg.set("pm10", "all"), Err(MetricsError::UnknownMetric(_))));
        assert!(matches!(cfg.set("co2", "some"), Err(MetricsError::UnknownMode(_))));
    }

    #[test]
    fn deserialize_partial_config_fills_defaults() {
        // serde derive with default fields: partial configs fill in defaults.
        let de = serde::de::value::MapDeserializer::<_, serde::de::value::Error>::new(
            [("co2", "all"), ("gps", "rand")].into_iter(),
        );
        let cfg = <CollectConfig as serde::Deserialize>::deserialize(de).unwrap();
        assert_eq!(cfg.co2, CollectMode::All);
        assert_eq!(cfg.gps, CollectMode::Rand);
        assert_eq!(cfg.nox, CollectMode::Real);
    }
}

#[cfg(test)]
mod policy {
    use crate::{BACKGROUND_MARKER, CollectMode, should_collect};

    #[test]
    fn none_excludes_everything() {
        assert!(!should_collect("v1", CollectMode::None));
        assert!(!should_collect("background_7", CollectMode::None));
    }

    #[test]
    fn all_includes_everything() {
        assert!(should_collect("v1", CollectMode::All));
        assert!(should_collect("background_7", CollectMode::All));
    }

    #[test]
    fn real_and_rand_partition_the_universe() {
        let vehicles = ["v1", "background_0", "car_background_3", "taxi_9"];
        for name in vehicles {
            let real = should_collect(name, CollectMode::Real);
            let rand = should_collect(name, CollectMode::Rand);
            assert_ne!(real, rand, "overlap or gap for {name:?}");
            assert_eq!(rand, name.contains(BACKGROUND_MARKER));
        }
    }
}

#[cfg(test)]
mod engine {
    use super::*;

    #[test]
    fn disabled_metrics_allocate_nothing_and_reject_export() {
        let collector = Collector::new(CollectConfig::disabled(), &universe());
        assert!(matches!(collector.gps(), Err(MetricsError::MetricInactive(Metric::Gps))));
        assert!(matches!(
            collector.emissions(Metric::Co2),
            Err(MetricsError::MetricInactive(Metric::Co2))
        ));
        assert!(matches!(collector.speed(), Err(MetricsError::MetricInactive(_))));
        assert!(matches!(collector.traveltime(), Err(MetricsError::MetricInactive(_))));
        assert!(matches!(collector.edge_traces(), Err(MetricsError::MetricInactive(_))));
        assert!(matches!(collector.step_counts(), Err(MetricsError::MetricInactive(_))));
    }

    #[test]
    fn disabled_step_counts_ignore_recording() {
        let mut collector = Collector::new(CollectConfig::disabled(), &universe());
        collector.record_step_count(5);
        assert!(collector.step_counts().is_err());
    }

    #[test]
    fn co2_end_to_end_scenario() {
        // universe {e1,e2} × {v1,v2}; co2=all, everything else none.
        let mut cfg = CollectConfig::disabled();
        cfg.co2 = CollectMode::All;
        let u = universe();
        let mut collector = Collector::new(cfg, &u);

        let mut s = sample(EdgeId(0), 0);
        s.co2_mg_s = 5.0;
        collector.ingest(VehicleId(0), &s, &ShiftProjector).unwrap();

        let mut s = sample(EdgeId(1), 1);
        s.co2_mg_s = 3.0;
        collector.ingest(VehicleId(1), &s, &ShiftProjector).unwrap();

        let mut s = sample(EdgeId(0), 2);
        s.co2_mg_s = 2.0;
        collector.ingest(VehicleId(0), &s, &ShiftProjector).unwrap();

        let co2 = collector.emissions(Metric::Co2).unwrap();
        assert_eq!(co2.edge, [7.0, 3.0]);
        assert_eq!(co2.vehicle, [7.0, 3.0]);
    }

    #[test]
    fn emission_conservation_edge_vs_vehicle() {
        // Each sample adds the same rate to exactly one edge entry and one
        // vehicle entry, so the two totals always agree.
        let mut cfg = CollectConfig::disabled();
        cfg.co2 = CollectMode::All;
        let u = universe();
        let mut collector = Collector::new(cfg, &u);

        let script = [(0u32, 0u32, 1.5), (1, 0, 2.25), (0, 1, 0.5), (1, 1, 4.0), (0, 0, 3.0)];
        for (step, (v, e, rate)) in script.into_iter().enumerate() {
            let mut s = sample(EdgeId(e), step as u64);
            s.co2_mg_s = rate;
            collector.ingest(VehicleId(v), &s, &ShiftProjector).unwrap();
        }

        let co2 = collector.emissions(Metric::Co2).unwrap();
        let edge_sum: f64 = co2.edge.iter().sum();
        let vehicle_sum: f64 = co2.vehicle.iter().sum();
        assert_eq!(edge_sum, vehicle_sum);
        assert_eq!(edge_sum, 11.25);
    }

    #[test]
    fn v_edge_collapses_consecutive_duplicates() {
        let mut cfg = CollectConfig::disabled();
        cfg.v_edge = CollectMode::All;
        let u = universe();
        let mut collector = Collector::new(cfg, &u);

        // v1 observed on [e1, e1, e2, e2, e1] across steps.
        for (step, e) in [0u32, 0, 1, 1, 0].into_iter().enumerate() {
            collector
                .ingest(VehicleId(0), &sample(EdgeId(e), step as u64), &ShiftProjector)
                .unwrap();
        }

        let traces = collector.edge_traces().unwrap();
        assert_eq!(traces.vehicle[0], [EdgeId(0), EdgeId(1), EdgeId(0)]);
        // e1 appears twice in the de-duped sequence (two visit spans), e2 once.
        assert_eq!(traces.edge_occupancy(2), [2, 1]);
    }

    #[test]
    fn v_edge_never_repeats_under_interleaving() {
        let mut cfg = CollectConfig::disabled();
        cfg.v_edge = CollectMode::All;
        let u = universe();
        let mut collector = Collector::new(cfg, &u);

        // Same-edge samples from both vehicles interleaved across steps.
        let script = [(0u32, 0u32), (1, 0), (0, 0), (1, 1), (0, 1), (1, 1), (0, 0)];
        for (step, (v, e)) in script.into_iter().enumerate() {
            collector
                .ingest(VehicleId(v), &sample(EdgeId(e), step as u64), &ShiftProjector)
                .unwrap();
        }

        let traces = collector.edge_traces().unwrap();
        for trace in &traces.vehicle {
            for pair in trace.windows(2) {
                assert_ne!(pair[0], pair[1], "consecutive duplicate in {trace:?}");
            }
        }
    }

    #[test]
    fn traveltime_counts_observed_steps() {
        let mut cfg = CollectConfig::disabled();
        cfg.traveltime = CollectMode::All;
        let u = universe();
        let mut collector = Collector::new(cfg, &u);

        for step in 0..4 {
            collector
                .ingest(VehicleId(0), &sample(EdgeId(0), step), &ShiftProjector)
                .unwrap();
        }
        collector
            .ingest(VehicleId(1), &sample(EdgeId(1), 4), &ShiftProjector)
            .unwrap();

        let tt = collector.traveltime().unwrap();
        assert_eq!(tt.vehicle, [4, 1]);
    }

    #[test]
    fn speed_samples_append_per_edge() {
        let mut cfg = CollectConfig::disabled();
        cfg.speed = CollectMode::All;
        let u = universe();
        let mut collector = Collector::new(cfg, &u);

        for (step, (e, v)) in [(0u32, 10.0), (0, 12.5), (1, 7.0)].into_iter().enumerate() {
            let mut s = sample(EdgeId(e), step as u64);
            s.speed_m_s = v;
            collector.ingest(VehicleId(0), &s, &ShiftProjector).unwrap();
        }

        let speed = collector.speed().unwrap();
        assert_eq!(speed.edge[0], [10.0, 12.5]);
        assert_eq!(speed.edge[1], [7.0]);
        assert_eq!(speed.edge_sums(), [22.5, 7.0]);
    }

    #[test]
    fn gps_keeps_arrival_order_and_uses_the_projector() {
        let mut cfg = CollectConfig::disabled();
        cfg.gps = CollectMode::All;
        let u = universe();
        let mut collector = Collector::new(cfg, &u);

        let mut s = sample(EdgeId(0), 3);
        s.x = 1.0;
        s.y = 2.0;
        collector.ingest(VehicleId(1), &s, &ShiftProjector).unwrap();
        let mut s = sample(EdgeId(1), 4);
        s.x = -1.0;
        s.y = 0.5;
        collector.ingest(VehicleId(0), &s, &ShiftProjector).unwrap();

        let gps = collector.gps().unwrap();
        assert_eq!(gps.uids, [VehicleId(1), VehicleId(0)]);
        assert_eq!(gps.lats, [42.0, 40.5]);
        assert_eq!(gps.lngs, [10.0, 8.0]);
        assert_eq!(gps.timestamps, [3, 4]);
    }

    #[test]
    fn real_mode_skips_background_vehicles() {
        let u = EntityUniverse::new(
            names(&["e1"]),
            names(&["v1", "background_0"]),
        )
        .unwrap();
        let mut cfg = CollectConfig::disabled();
        cfg.co2 = CollectMode::Real;
        cfg.traveltime = CollectMode::Rand;
        let mut collector = Collector::new(cfg, &u);

        for v in [0, 1] {
            let mut s = sample(EdgeId(0), 0);
            s.co2_mg_s = 1.0;
            collector.ingest(VehicleId(v), &s, &ShiftProjector).unwrap();
        }

        let co2 = collector.emissions(Metric::Co2).unwrap();
        assert_eq!(co2.vehicle, [1.0, 0.0], "real mode must exclude background");
        let tt = collector.traveltime().unwrap();
        assert_eq!(tt.vehicle, [0, 1], "rand mode must only include background");
    }

    #[test]
    fn out_of_universe_ids_fail_loudly() {
        let mut collector = Collector::new(CollectConfig::default(), &universe());

        let err = collector
            .ingest(VehicleId(99), &sample(EdgeId(0), 0), &ShiftProjector)
            .unwrap_err();
        assert!(matches!(err, MetricsError::UnknownEntity { kind: "vehicle", .. }));

        let err = collector
            .ingest(VehicleId(0), &sample(EdgeId(7), 0), &ShiftProjector)
            .unwrap_err();
        assert!(matches!(err, MetricsError::UnknownEntity { kind: "edge", .. }));
    }

    #[test]
    fn step_counts_record_in_call_order() {
        let mut cfg = CollectConfig::disabled();
        cfg.v_step = CollectMode::All;
        let mut collector = Collector::new(cfg, &universe());

        for count in [2, 5, 3, 0] {
            collector.record_step_count(count);
        }
        assert_eq!(collector.step_counts().unwrap().counts, [2, 5, 3, 0]);
    }

    #[test]
    fn emissions_accessor_rejects_non_emission_metrics() {
        let collector = Collector::new(CollectConfig::default(), &universe());
        assert!(matches!(
            collector.emissions(Metric::Speed),
            Err(MetricsError::NotAnEmission(Metric::Speed))
        ));
    }
}
