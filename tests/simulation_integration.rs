//! ---
//! wms_section: "03-testing-qa"
//! wms_subsection: "integration-tests"
//! wms_type: "source"
//! wms_scope: "code"
//! wms_description: "End-to-end generation and export tests."
//! wms_version: "v0.1.0"
//! wms_owner: "tbd"
//! ---
use weldsim_common::StartTime;
use weldsim_sim::{
    default_file_name, export_csv_file, MachineState, SimulationRecord, WeldingSimulationEngine,
};

fn run(count: u64, interval_seconds: f64, seed: u64) -> Vec<SimulationRecord> {
    let start: StartTime = "2025-05-03 08:00:00".parse().expect("valid start time");
    WeldingSimulationEngine::seeded(interval_seconds, start, seed)
        .expect("valid engine parameters")
        .generate(count)
        .expect("positive count")
}

#[test]
fn generate_export_and_reread_preserves_every_invariant() {
    let interval = 5.0;
    let records = run(7500, interval, 4242);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(default_file_name(&records));
    export_csv_file(&path, &records).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], b"\xef\xbb\xbf", "CSV must start with a BOM");

    let mut reader = csv::Reader::from_reader(&bytes[3..]);
    assert_eq!(
        reader.headers().unwrap(),
        &csv::StringRecord::from(vec!["timestamp", "state", "power", "auto_shutdown"])
    );
    let parsed: Vec<SimulationRecord> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("every exported row parses back");
    assert_eq!(parsed.len(), 7500);
    assert_eq!(parsed[0].state, MachineState::Running);

    let mut idle_run = 0u32;
    for (index, record) in parsed.iter().enumerate() {
        if index > 0 {
            let elapsed = record.timestamp - parsed[index - 1].timestamp;
            assert_eq!(elapsed.num_seconds(), 5, "row {index} breaks the interval");
            assert!(
                !(parsed[index - 1].state == MachineState::Shutdown
                    && record.state == MachineState::Idle),
                "row {index} is a forbidden shutdown -> idle transition"
            );
        }
        match record.state {
            MachineState::Running => assert!((500.0..=1500.0).contains(&record.power)),
            MachineState::Idle => assert!((80.0..=100.0).contains(&record.power)),
            MachineState::Shutdown => assert_eq!(record.power, 0.0),
        }
        if record.state == MachineState::Idle {
            idle_run += 1;
        } else {
            idle_run = 0;
        }
        let expected = record.state == MachineState::Idle
            && f64::from(idle_run) * interval >= 180.0;
        assert_eq!(record.auto_shutdown, expected, "row {index} flag mismatch");
    }
}

#[test]
fn stock_run_file_name_matches_the_start_date() {
    let records = run(3, 5.0, 7);
    assert_eq!(
        default_file_name(&records),
        "2025-05-03-welding_machine_records.csv"
    );
}

#[test]
fn three_record_run_yields_documented_timestamps() {
    let records = run(3, 5.0, 99);
    let timestamps: Vec<String> = records
        .iter()
        .map(|r| r.timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
        .collect();
    assert_eq!(
        timestamps,
        ["2025-05-03 08:00:00", "2025-05-03 08:00:05", "2025-05-03 08:00:10"]
    );
    assert_eq!(records[0].state, MachineState::Running);
}

#[test]
fn unseeded_entropy_runs_still_honour_the_contract() {
    let records = weldsim_sim::generate(250, 10.0, StartTime::Now).unwrap();
    assert_eq!(records.len(), 250);
    assert_eq!(records[0].state, MachineState::Running);
    for pair in records.windows(2) {
        assert_eq!((pair[1].timestamp - pair[0].timestamp).num_seconds(), 10);
    }
}
