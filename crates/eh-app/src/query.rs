//! Per-engine slices of the result tables.

use eh_core::{EngineId, QuantileLevel, Real, quantile};
use eh_results::{AnomalyRecord, EngineRecord, FleetData, PredictionRecord};

/// Rows of one engine, stable-sorted by cycle.
///
/// Rows sharing a cycle keep their input order, so applying this again to
/// its own output returns the same sequence.
pub fn select_engine<'a, R, I>(records: I, engine: &EngineId) -> Vec<&'a R>
where
    R: EngineRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut slice: Vec<&R> = records
        .into_iter()
        .filter(|r| r.engine_id() == engine)
        .collect();
    slice.sort_by_key(|r| r.cycle());
    slice
}

pub fn anomaly_slice<'a>(fleet: &'a FleetData, engine: &EngineId) -> Vec<&'a AnomalyRecord> {
    select_engine(fleet.anomalies(), engine)
}

pub fn prediction_slice<'a>(fleet: &'a FleetData, engine: &EngineId) -> Vec<&'a PredictionRecord> {
    select_engine(fleet.predictions(), engine)
}

/// Quantile of the anomaly scores of a slice; `None` for an empty slice.
pub fn anomaly_threshold(slice: &[&AnomalyRecord], level: QuantileLevel) -> Option<Real> {
    quantile(slice.iter().map(|r| r.anomaly_score), level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn anomaly(engine: &str, cycle: i64, score: Real) -> AnomalyRecord {
        AnomalyRecord {
            engine_id: engine.into(),
            cycle,
            anomaly_score: score,
        }
    }

    #[test]
    fn filters_and_sorts_by_cycle() {
        let fleet = FleetData::from_records(
            vec![
                anomaly("1", 3, 0.3),
                anomaly("2", 1, 0.9),
                anomaly("1", 1, 0.1),
                anomaly("1", 2, 0.2),
            ],
            vec![],
        );
        let slice = anomaly_slice(&fleet, &EngineId::from("1"));
        let cycles: Vec<i64> = slice.iter().map(|r| r.cycle).collect();
        assert_eq!(cycles, [1, 2, 3]);
        assert!(prediction_slice(&fleet, &EngineId::from("1")).is_empty());
    }

    #[test]
    fn equal_cycles_keep_input_order() {
        let fleet = FleetData::from_records(
            vec![anomaly("1", 2, 0.7), anomaly("1", 1, 0.1), anomaly("1", 2, 0.4)],
            vec![],
        );
        let slice = anomaly_slice(&fleet, &EngineId::from("1"));
        let scores: Vec<Real> = slice.iter().map(|r| r.anomaly_score).collect();
        assert_eq!(scores, [0.1, 0.7, 0.4]);
    }

    #[test]
    fn threshold_of_empty_slice_is_none() {
        let level = QuantileLevel::new(0.05).unwrap();
        assert_eq!(anomaly_threshold(&[], level), None);
    }

    fn arb_records() -> impl Strategy<Value = Vec<AnomalyRecord>> {
        prop::collection::vec(
            (prop::sample::select(vec!["1", "2", "3"]), 0_i64..20, 0.0_f64..1.0),
            0..40,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(engine, cycle, score)| anomaly(engine, cycle, score))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn filter_sort_is_idempotent(records in arb_records()) {
            let engine = EngineId::from("2");
            let once = select_engine(&records, &engine);
            let twice = select_engine(once.iter().copied(), &engine);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn slice_is_sorted_and_complete(records in arb_records()) {
            let engine = EngineId::from("1");
            let slice = select_engine(&records, &engine);
            prop_assert!(slice.windows(2).all(|w| w[0].cycle <= w[1].cycle));
            let expected = records.iter().filter(|r| r.engine_id == engine).count();
            prop_assert_eq!(slice.len(), expected);
        }
    }
}
