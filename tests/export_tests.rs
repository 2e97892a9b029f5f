use predicates::str::contains;
use std::fs;

mod common;
use common::{add_ride, init_db, temp_out, tvl};

#[test]
fn test_export_csv() {
    let db_path = init_db("export_csv");
    add_ride(&db_path, "20", "10", "30");
    add_ride(&db_path, "35", "8", "20");
    let out = temp_out("export_csv", "csv");

    tvl()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id,created_at,fare,distance_km,estimated_minutes"));
    assert!(lines[0].ends_with("profitability,currency"));
    // newest first
    assert!(lines[1].contains(",35.0,") && lines[1].contains("GOOD"));
    assert!(lines[2].contains(",20.0,") && lines[2].contains("BAD"));
}

#[test]
fn test_export_json() {
    let db_path = init_db("export_json");
    add_ride(&db_path, "20", "10", "30");
    let out = temp_out("export_json", "json");

    tvl()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["profitability"], "BAD");
    assert_eq!(rows[0]["currency"], "R$");
    assert_eq!(rows[0]["fare"], 20.0);
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = init_db("export_relative");
    add_ride(&db_path, "20", "10", "30");

    tvl()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites() {
    let db_path = init_db("export_force");
    add_ride(&db_path, "20", "10", "30");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").unwrap();

    tvl()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("id,"));
}

#[test]
fn test_export_empty_history_writes_nothing() {
    let db_path = init_db("export_empty");
    let out = temp_out("export_empty", "csv");

    tvl()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No rides to export."));

    assert!(!std::path::Path::new(&out).exists());
}
