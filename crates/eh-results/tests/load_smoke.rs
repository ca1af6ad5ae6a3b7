use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use eh_core::EngineId;
use eh_results::{FleetData, ResultsError};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

#[test]
fn load_both_tables() {
    let dir = unique_temp_dir("eh_results_load");
    fs::create_dir_all(&dir).expect("failed to create temp dir");

    let anomaly_path = dir.join("anomaly_scores.csv");
    let prediction_path = dir.join("results_df.csv");
    fs::write(
        &anomaly_path,
        "engine_id,cycle,anomaly_score\n1,2,0.7\n1,1,0.8\n3,1,0.4\n",
    )
    .expect("failed to write anomaly file");
    fs::write(
        &prediction_path,
        "engine_id,cycle,predicted_RUL,true_RUL,fail_probability\n1,1,120.5,125,0.02\n2,1,80,75,0.4\n",
    )
    .expect("failed to write prediction file");

    let fleet = FleetData::load(&anomaly_path, &prediction_path).expect("failed to load fleet");
    assert_eq!(fleet.anomalies().len(), 3);
    assert_eq!(fleet.predictions().len(), 2);

    // Rows are kept in file order; sorting is the caller's job.
    assert_eq!(fleet.anomalies()[0].cycle, 2);
    assert_eq!(fleet.predictions()[1].engine_id, EngineId::from("2"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_fails_the_whole_load() {
    let dir = unique_temp_dir("eh_results_missing");
    fs::create_dir_all(&dir).expect("failed to create temp dir");

    let anomaly_path = dir.join("anomaly_scores.csv");
    fs::write(&anomaly_path, "engine_id,cycle,anomaly_score\n1,1,0.5\n")
        .expect("failed to write anomaly file");

    let err = FleetData::load(&anomaly_path, &dir.join("results_df.csv")).unwrap_err();
    assert!(matches!(err, ResultsError::FileRead { .. }));
    assert!(err.to_string().contains("results_df.csv"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_file_fails_the_whole_load() {
    let dir = unique_temp_dir("eh_results_malformed");
    fs::create_dir_all(&dir).expect("failed to create temp dir");

    let anomaly_path = dir.join("anomaly_scores.csv");
    let prediction_path = dir.join("results_df.csv");
    fs::write(&anomaly_path, "engine_id,cycle,anomaly_score\n1,1,not-a-number\n")
        .expect("failed to write anomaly file");
    fs::write(
        &prediction_path,
        "engine_id,cycle,predicted_RUL,true_RUL,fail_probability\n",
    )
    .expect("failed to write prediction file");

    let err = FleetData::load(&anomaly_path, &prediction_path).unwrap_err();
    assert!(matches!(err, ResultsError::Csv { .. }));

    let _ = fs::remove_dir_all(&dir);
}
