use rn_core::Edge;
use rn_network::*;
use rn_routes::BoundType;

/// Per-process scratch file, so parallel test runs don't share paths.
fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("rn_network_{}_{}", std::process::id(), name))
}

#[test]
fn scratch_paths_are_process_scoped() {
    let path = scratch_path("plan.yaml");
    let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.contains(&std::process::id().to_string()));
    assert_ne!(scratch_path("a.yaml"), scratch_path("b.yaml"));
}

#[test]
fn roundtrip_yaml_standard_plan() {
    let plan = QueryPlan::standard();

    let path = scratch_path("roundtrip_standard.yaml");
    save_plan_yaml(&path, &plan).unwrap();
    let loaded = load_plan(&path).unwrap();

    assert_eq!(plan, loaded);
}

#[test]
fn load_json_plan() {
    let path = scratch_path("plan.json");
    std::fs::write(
        &path,
        r#"{"queries": [{"kind": "count_routes", "start": "A", "end": "C",
            "bound": 4, "bound_type": "stop_count", "exact": true}]}"#,
    )
    .unwrap();

    let plan = load_plan(&path).unwrap();
    assert_eq!(
        plan.queries[0].query,
        Query::count("A", "C", 4, BoundType::StopCount, true)
    );
}

#[test]
fn unknown_plan_extension() {
    let path = std::path::Path::new("plan.toml");
    assert!(matches!(
        load_plan(path),
        Err(NetworkError::UnsupportedFormat { .. })
    ));
}

#[test]
fn read_network_file() {
    let path = scratch_path("read.txt");
    std::fs::write(&path, "AB5, BC4, CD8\n").unwrap();

    let edges = read_network(&path).unwrap();
    assert_eq!(
        edges,
        [
            Edge::new("A", "B", 5),
            Edge::new("B", "C", 4),
            Edge::new("C", "D", 8)
        ]
    );
}

#[test]
fn read_missing_network_file() {
    let path = std::path::Path::new("input/invalid.txt");
    assert!(matches!(read_network(path), Err(NetworkError::Io(_))));
}

#[test]
fn invalid_network_text() {
    assert!(matches!(
        parse_network("AB5, B3"),
        Err(NetworkError::Validation(ValidationError::Format { index: 2, .. }))
    ));
}
