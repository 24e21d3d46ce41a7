//! End-to-end: network file + plan -> report lines.

use std::path::PathBuf;

use rn_app::{load_network, load_plan_or_standard, run_plan};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
}

const EXPECTED: [&str; 10] = [
    "Output #1: 9",
    "Output #2: 5",
    "Output #3: 13",
    "Output #4: 22",
    "Output #5: NO_SUCH_ROUTE",
    "Output #6: 2",
    "Output #7: 3",
    "Output #8: 9",
    "Output #9: 9",
    "Output #10: 7",
];

#[test]
fn standard_report_on_reference_network() {
    let store = load_network(&data_path("reference_network.txt")).unwrap();
    let plan = load_plan_or_standard(None).unwrap();

    let lines: Vec<String> = run_plan(&store, &plan)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(lines, EXPECTED);
}

#[test]
fn plan_file_matches_standard_plan() {
    let store = load_network(&data_path("reference_network.txt")).unwrap();
    let from_file = load_plan_or_standard(Some(&data_path("standard_plan.yaml"))).unwrap();
    let standard = load_plan_or_standard(None).unwrap();

    assert_eq!(from_file, standard);
    assert_eq!(run_plan(&store, &from_file), run_plan(&store, &standard));
}

#[test]
fn repeated_runs_agree() {
    let store = load_network(&data_path("reference_network.txt")).unwrap();
    let plan = load_plan_or_standard(None).unwrap();
    assert_eq!(run_plan(&store, &plan), run_plan(&store, &plan));
}
